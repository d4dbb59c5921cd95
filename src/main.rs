//! Command-line driver for the chessboard library: play moves from standard input, or count
//! variations from a position.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]
#![warn(clippy::option_unwrap_used, clippy::result_unwrap_used)]

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use clap::{App, Arg, ArgMatches, SubCommand, crate_version};
use log::info;
use simplelog::{WriteLogger, LevelFilter};
use chessboard::config::{self, Config};
use chessboard::game::Game;
use chessboard::pgn::Tags;
use chessboard::{variations, Position, START_FEN};

fn main() -> Result<(), Error> {
    let matches =
        App::new("Chessboard")
            .version(crate_version!())
            .author("Mike Leany")
            .arg(Arg::with_name("config")
                .long("config")
                .short("c")
                .global(true)
                .value_name("CONFIG_FILE")
                .takes_value(true)
                .help("Reads settings from CONFIG_FILE instead of ~/.chessboard/config.yaml"))
            .arg(Arg::with_name("log")
                .long("log")
                .short("l")
                .global(true)
                .help("Turns on logging"))
            .arg(Arg::with_name("log-file")
                .long("log-file")
                .global(true)
                .value_name("LOG_FILE")
                .takes_value(true)
                .help("Sets the log file if logging is turned on [default: chessboard.log]"))
            .arg(Arg::with_name("log-level")
                .long("log-level")
                .global(true)
                .value_name("LEVEL")
                .takes_value(true)
                .help("Sets the log level if logging is turned on [default: info]"))
            .subcommand(SubCommand::with_name("play")
                .about("Reads moves from standard input and plays them. Moves are written as \
                        0<from><to><promotion>,\neg 0e2e40 or 0a7a8Q. Also accepts undo, \
                        moves, pgn and quit. This is the default.")
                .arg(Arg::with_name("fen")
                    .long("fen")
                    .short("f")
                    .value_name("FEN_STRING")
                    .takes_value(true)
                    .help("Starting position in Forsyth-Edwards Notation (FEN)")))
            .subcommand(SubCommand::with_name("perft")
                .about("Counts the number of variations from a given starting position \
                        to a specified\ndepth. Defaults to the standard starting position.")
                .arg(Arg::with_name("file")
                    .long("file")
                    .value_name("EPD_FILE")
                    .takes_value(true)
                    .conflicts_with("depth")
                    .conflicts_with("fen")
                    .help("An EPD file of positions with expected counts (;D<depth> <count>)"))
                .arg(Arg::with_name("depth")
                    .long("depth")
                    .short("d")
                    .value_name("DEPTH")
                    .takes_value(true)
                    .help("Depth to search the position"))
                .arg(Arg::with_name("fen")
                    .value_name("FEN_STRING")
                    .default_value(START_FEN)
                    .hide_default_value(true)
                    .multiple(true)
                    .help("Position to search in Forsyth-Edwards Notation (FEN)")))
            .get_matches();

    let config = Config::load(matches.value_of_os("config").map(Path::new))?;
    init_logger(&matches, &config)?;

    match matches.subcommand() {
        ("perft", Some(matches)) => perft(matches, &config),
        ("play", Some(matches)) => play(matches.value_of("fen"), &config),
        _ => play(None, &config),
    }
}

fn init_logger(matches: &ArgMatches<'_>, config: &Config) -> Result<(), Error> {
    let log_file = matches.value_of_os("log-file")
        .map_or_else(|| config.log.file.clone(), PathBuf::from);
    let log_level = match matches.value_of("log-level").unwrap_or(config.log.level.as_str()) {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        level => return Err(Error(format!("{}: invalid log level", level))),
    };

    let result = if matches.is_present("log") || config.log.enabled {
        WriteLogger::init(
            log_level,
            simplelog::Config::default(),
            File::create(&log_file).map_err(|err| {
                Error(format!("{}: {}", log_file.display(), err))
            })?)
    } else {
        WriteLogger::init(LevelFilter::Off, simplelog::Config::default(), io::sink())
    };

    result.map_err(|err| Error(err.to_string()))
}

fn play(fen: Option<&str>, config: &Config) -> Result<(), Error> {
    let fen = fen.or_else(|| config.start_fen.as_deref()).unwrap_or(START_FEN);
    let pos: Position = fen.parse().map_err(|err| Error(format!("{}: {}", fen, err)))?;
    let mut game = Game::starting_at(pos);
    info!("new game from {}", fen);

    print_game(&game);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        for token in line?.split_whitespace() {
            match token {
                "quit" => return Ok(()),
                "moves" => {
                    let moves: Vec<_> = game.position().legal_moves().iter()
                        .map(|mv| mv.to_string())
                        .collect();
                    println!("{}", moves.join(" "));
                },
                "pgn" => print!("{}", game.to_pgn(&Tags::new())),
                "undo" => match game.undo() {
                    Ok(_) => print_game(&game),
                    Err(err) => eprintln!("error: {}", err),
                },
                token => match game.make_move_str(token).map(|_| ()) {
                    Ok(()) => print_game(&game),
                    Err(err) => eprintln!("error: {}: {}", token, err),
                },
            }
        }
    }

    Ok(())
}

fn print_game(game: &Game) {
    let pos = game.position();
    println!("\n{:#}", pos);
    println!("{}", pos);
    match game.result() {
        Some(result) => println!("{:?} {}", game.status(), result),
        None => println!("{:?}, {} to move", game.status(), pos.turn()),
    }
}

fn perft(matches: &ArgMatches<'_>, config: &Config) -> Result<(), Error> {
    if let Some(file) = matches.value_of("file") {
        return read_epd(Path::new(file));
    }

    let depth = match matches.value_of("depth") {
        Some(depth) => depth.parse().map_err(|_| Error("depth must be numeric".to_owned()))?,
        None => config.perft_depth
            .ok_or_else(|| Error("a depth is required (--depth or perft_depth)".to_owned()))?,
    };

    println!();
    for fen in matches.values_of("fen").expect("INFALLIBLE") {
        let pos = fen.parse().map_err(|err| Error(format!("{}: {}", fen, err)))?;
        println!("{}", fen);
        let count = variations::print(&pos, depth);
        println!("Depth {} total:\t{:12}\n", depth, count);
    }

    Ok(())
}

fn read_epd(path: &Path) -> Result<(), Error> {
    let epd = BufReader::new(File::open(path)
        .map_err(|err| Error(format!("{}: {}", path.display(), err)))?);

    let mut failures = 0;
    for (line_num, line) in epd.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        failures += check_epd_line(&line, line_num + 1)
            .map_err(|err| Error(format!("{}: line {}: {}", path.display(), line_num + 1, err)))?;
    }

    if failures > 0 {
        return Err(Error(format!("{} count(s) did not match", failures)));
    }
    Ok(())
}

/// Checks every `;D<depth> <count>` record on the line and returns the number of mismatches
fn check_epd_line(line: &str, line_num: usize) -> Result<usize, String> {
    let mut fields = line.split(';');
    let fen = fields.next().unwrap_or("").trim();

    // EPD leaves off the clocks
    let pos: Position = match fen.split_whitespace().count() {
        4 => format!("{} 0 1", fen).parse(),
        _ => fen.parse(),
    }.map_err(|err| format!("{}: {}", fen, err))?;

    println!("\nLine {:3}:\t{}", line_num, fen);
    let mut failures = 0;
    for field in fields {
        let nums: Vec<&str> = field.trim().trim_start_matches('D').split_whitespace().collect();
        if nums.len() != 2 {
            return Err(format!("\"{}\": expected ;D<depth> <count>", field));
        }
        let depth: usize = nums[0].parse().map_err(|err| format!("\"{}\": {}", nums[0], err))?;
        let expected: usize = nums[1].parse().map_err(|err| format!("\"{}\": {}", nums[1], err))?;

        let count = variations::count(&pos, depth);
        println!("Depth {} expected:\t{:12}", depth, expected);
        println!("Depth {} result:  \t{:12}", depth, count);
        if count != expected {
            eprintln!("line {}: depth {}: expected {} but counted {}",
                line_num, depth, expected, count);
            failures += 1;
        }
    }

    Ok(failures)
}

struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.0.fmt(f)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error { }

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error(err.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error(err.to_string())
    }
}

//! Module to implement a chess game: a position with its move history and result
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use log::{debug, info};
use crate::pgn::Tags;
use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The result of a game
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// White has won, such as by checkmate or because black resigned.
    WhiteWins,
    /// The game has ended in a draw, such as by stalemate, 3-fold repetition, or agreement.
    Draw,
    /// Black has won, such as by checkmate or because white resigned.
    BlackWins,
}

impl GameResult {
    /// Returns the result of a win for `color`
    pub fn win_for(color: Color) -> GameResult {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

impl fmt::Display for GameResult {
    /// Formats the result the way PGN does ("1-0", "1/2-1/2" or "0-1")
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::Draw => "1/2-1/2",
            GameResult::BlackWins => "0-1",
        }.fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The state of a game as decided by the rules, without regard to resignations or agreements
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The side to move has at least one legal move and no draw rule applies
    Ongoing,
    /// The side to move is checkmated; the color given is the winner
    Checkmate(Color),
    /// The side to move has no legal moves but is not in check
    Stalemate,
    /// A hundred plies without a capture or pawn move
    FiftyMoveRule,
    /// The current position has occurred three times
    ThreefoldRepetition,
    /// Neither side has enough material to checkmate
    InsufficientMaterial,
}

impl GameStatus {
    /// Returns the result implied by the status, or `None` if the game is ongoing
    pub fn result(self) -> Option<GameResult> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate(winner) => Some(GameResult::win_for(winner)),
            _ => Some(GameResult::Draw),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A chess game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    history: Vec<(Position, Move)>,
    position: Position,
    declared: Option<GameResult>,
}

impl Game {
    /// Creates a new game from the standard starting position
    pub fn new() -> Self {
        Game::default()
    }

    /// Creates a new game using `pos` as the starting position
    pub fn starting_at(pos: Position) -> Self {
        Game {
            position: pos,
            ..Default::default()
        }
    }

    /// Returns the current position
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the position the game started from
    pub fn initial_position(&self) -> &Position {
        self.history.first().map_or(&self.position, |(pos, _)| pos)
    }

    /// Returns the moves made so far, in order
    pub fn moves(&self) -> Vec<Move> {
        self.history.iter().map(|&(_, mv)| mv).collect()
    }

    /// Returns each move made so far together with the position it was made from
    pub fn history(&self) -> &[(Position, Move)] {
        &self.history
    }

    /// Make the given move
    ///
    /// # Errors
    ///
    /// Returns `Error::GameOver` if the game already has a result, or `Error::IllegalMove` if
    /// the move is not legal in the current position.
    pub fn make_move(&mut self, mv: Move) -> Result<&mut Self> {
        if let Some(result) = self.result() {
            debug!("move {} rejected: game already ended {}", mv, result);
            return Err(Error::GameOver);
        }

        let before = self.position.clone();
        self.position.apply_move(mv)?;
        self.history.push((before, mv));

        let status = self.status();
        if let Some(result) = status.result() {
            info!("game over after {:#}: {:?} ({})", mv, status, result);
        }

        Ok(self)
    }

    /// Parses a move token and makes the move
    pub fn make_move_str(&mut self, token: &str) -> Result<&mut Self> {
        self.make_move(token.parse()?)
    }

    /// Undoes the last move and returns it. A declared result is withdrawn as well.
    pub fn undo(&mut self) -> Result<Move> {
        let (pos, mv) = self.history.pop().ok_or(Error::NoMoveToUndo)?;
        self.position = pos;
        self.declared = None;

        Ok(mv)
    }

    /// Returns the number of times the current position has occurred, counting this occurrence
    pub fn repetitions(&self) -> usize {
        1 + self.history.iter()
            .filter(|(pos, _)| pos.is_repetition_of(&self.position))
            .count()
    }

    /// Returns the status of the game according to the rules
    pub fn status(&self) -> GameStatus {
        let pos = &self.position;

        if pos.legal_moves().is_empty() {
            if pos.in_check() {
                GameStatus::Checkmate(!pos.turn())
            } else {
                GameStatus::Stalemate
            }
        } else if pos.fifty_moves() {
            GameStatus::FiftyMoveRule
        } else if self.repetitions() >= 3 {
            GameStatus::ThreefoldRepetition
        } else if pos.insufficient_material() {
            GameStatus::InsufficientMaterial
        } else {
            GameStatus::Ongoing
        }
    }

    /// Ends the game with `result`, as when a player resigns or the players agree to a draw
    pub fn declare_result(&mut self, result: GameResult) -> Result<()> {
        if self.result().is_some() {
            return Err(Error::GameOver);
        }

        info!("result declared: {}", result);
        self.declared = Some(result);

        Ok(())
    }

    /// Returns the result of the game, either declared or reached by the rules
    pub fn result(&self) -> Option<GameResult> {
        self.declared.or_else(|| self.status().result())
    }

    /// Returns `true` if the game has a result
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Returns the game in PGN format, with the seven tag roster taken from `tags`
    pub fn to_pgn(&self, tags: &Tags) -> String {
        let result = self.result().map_or("*".to_owned(), |r| r.to_string());

        let initial = self.initial_position();
        let setup = if initial.is_repetition_of(&Position::new()) { None } else { Some(initial) };

        let mut words = Vec::new();
        for (i, (pos, mv)) in self.history.iter().enumerate() {
            if pos.turn() == Color::White {
                words.push(format!("{}.", pos.move_number()));
            } else if i == 0 {
                words.push(format!("{}...", pos.move_number()));
            }
            words.push(pos.san(*mv).unwrap_or_else(|_| format!("{:#}", mv)));
        }
        words.push(result.clone());

        format!("{}\n{}\n", tags.to_tag_pairs(&result, setup), pgn::wrap_move_text(&words))
    }
}

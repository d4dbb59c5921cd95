//! Settings read from a YAML file in the user's home directory
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use serde::Deserialize;

/// Name of the directory, under the user's home directory, that holds the default config file
pub const APP_DIR: &str = ".chessboard";

/// Name of the default config file
pub const CONFIG_FILE: &str = "config.yaml";

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Settings for the command-line driver. Every field is optional in the file.
///
/// ```
/// use chessboard::config::Config;
///
/// let config: Config = serde_yaml::from_str("perft_depth: 4\nlog:\n  level: debug\n").unwrap();
/// assert_eq!(config.perft_depth, Some(4));
/// assert_eq!(config.log.level, "debug");
/// assert!(!config.log.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Starting position for `play`, as a FEN string
    pub start_fen: Option<String>,
    /// Default depth for `perft`
    pub perft_depth: Option<usize>,
    /// Logging settings
    pub log: LogConfig,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether to write a log file at all
    pub enabled: bool,
    /// Log file to write
    pub file: PathBuf,
    /// One of off, error, warn, info, debug or trace
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            enabled: false,
            file: PathBuf::from("chessboard.log"),
            level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Returns the path of the default config file, if the home directory can be found
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Reads the config from `path`, or from the default path if `path` is `None`.
    ///
    /// A default file that does not exist just yields the default config. A file named
    /// explicitly must exist, and any file that exists must parse.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Config::read(path),
            None => match Config::default_path() {
                Some(path) => match Config::read(&path) {
                    Err(ConfigError::Io(ref e)) if e.kind() == ErrorKind::NotFound => {
                        Ok(Config::default())
                    }
                    other => other,
                },
                None => Ok(Config::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Config, ConfigError> {
        let s = read_to_string(path)?;
        Config::from_yaml(&s)
    }

    /// Parses a config from a YAML string. An empty string is the default config.
    pub fn from_yaml(s: &str) -> Result<Config, ConfigError> {
        if s.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Failure to read or parse a config file
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file is not valid YAML or does not match the expected layout
    Yaml(serde_yaml::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Yaml(e) => write!(f, "invalid config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError { }

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_the_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("\n  \n").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_yaml("start_fen: \"4k3/8/8/8/8/8/8/4K3 w - - 0 1\"\n").unwrap();
        assert_eq!(config.start_fen.as_deref(), Some("4k3/8/8/8/8/8/8/4K3 w - - 0 1"));
        assert_eq!(config.perft_depth, None);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn full_file() {
        let yaml = "\
start_fen: ~
perft_depth: 5
log:
  enabled: true
  file: /tmp/chess.log
  level: trace
";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.perft_depth, Some(5));
        assert!(config.log.enabled);
        assert_eq!(config.log.file, PathBuf::from("/tmp/chess.log"));
        assert_eq!(config.log.level, "trace");
    }

    #[test]
    fn malformed_file_is_an_error() {
        match Config::from_yaml("perft_depth: deep\n") {
            Err(ConfigError::Yaml(_)) => (),
            other => panic!("expected a YAML error, got {:?}", other),
        }
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = Path::new("/nonexistent/chessboard/config.yaml");
        match Config::load(Some(path)) {
            Err(ConfigError::Io(_)) => (),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }
}

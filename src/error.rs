//! Error types for the rover program.
//!
//! Each failure the program can hit has its own error type, so that apps
//! only mention the failures they can actually produce. [`RoverError`] is
//! the union used at the composition root; every specific error converts
//! into it with `From`, which is what
//! [`err_into`](crate::app::AppExt::err_into) relies on.
//!
//! All errors are `Clone` so that a failing plan can be run again. I/O
//! sources are shared through `Arc` for that reason.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// A configuration file could not be read.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to read {}: {source}", .path.display())]
pub struct ReadFileError {
    /// The file that was being read.
    pub path: PathBuf,
    /// The underlying I/O failure.
    pub source: Arc<io::Error>,
}

impl ReadFileError {
    /// Create a new read failure for `path`.
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ReadFileError {
            path: path.into(),
            source: Arc::new(source),
        }
    }
}

/// A command line could not be read from the console.
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to read from console: {source}")]
pub struct ReadConsoleError {
    /// The underlying I/O failure.
    pub source: Arc<io::Error>,
}

impl ReadConsoleError {
    /// Create a new console failure.
    pub fn new(source: io::Error) -> Self {
        ReadConsoleError {
            source: Arc::new(source),
        }
    }
}

/// The planet configuration is not of the form `<width>x<height>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid planet config: {spec:?}")]
pub struct InvalidPlanetConfig {
    /// The rejected input.
    pub spec: String,
}

/// The rover configuration is not of the form `<x>,<y>:<N|S|E|W>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid initial state config: {spec:?}")]
pub struct InvalidInitialStateConfig {
    /// The rejected input.
    pub spec: String,
}

/// A command line holds something other than `F`, `B`, `L` and `R`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid command {0:?}")]
pub struct InvalidCommand(pub String);

/// Every failure the rover program can end with.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RoverError {
    /// A configuration file could not be read.
    #[error(transparent)]
    ReadFile(#[from] ReadFileError),

    /// The console could not be read.
    #[error(transparent)]
    ReadConsole(#[from] ReadConsoleError),

    /// The planet configuration is malformed.
    #[error(transparent)]
    InvalidPlanet(#[from] InvalidPlanetConfig),

    /// The rover configuration is malformed.
    #[error(transparent)]
    InvalidInitialState(#[from] InvalidInitialStateConfig),

    /// A command line is malformed.
    #[error(transparent)]
    InvalidCommand(#[from] InvalidCommand),
}

impl RoverError {
    /// The one-line message shown to the user when the program fails.
    pub fn user_message(&self) -> String {
        match self {
            RoverError::ReadFile(_) => "Bad file".to_string(),
            RoverError::ReadConsole(_) => "Bad input".to_string(),
            RoverError::InvalidPlanet(_) => "Invalid planet".to_string(),
            RoverError::InvalidInitialState(_) => "Invalid rover state".to_string(),
            RoverError::InvalidCommand(InvalidCommand(s)) => format!("Invalid command {s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_user_messages() {
        let cases = [
            (
                RoverError::from(ReadFileError::new("config/rover.txt", io::ErrorKind::NotFound.into())),
                "Bad file",
            ),
            (
                RoverError::from(InvalidPlanetConfig { spec: "5y4".into() }),
                "Invalid planet",
            ),
            (
                RoverError::from(InvalidInitialStateConfig { spec: "0,0".into() }),
                "Invalid rover state",
            ),
            (RoverError::from(InvalidCommand("X".into())), "Invalid command X"),
        ];

        for (error, expected) in cases {
            assert_eq!(error.user_message(), expected);
        }
    }

    #[test]
    fn test_read_file_error_keeps_source() {
        let error = ReadFileError::new("missing.txt", io::Error::other("gone"));
        assert_eq!(error.to_string(), "failed to read missing.txt: gone");
        assert!(error.source().is_some());

        let cloned = RoverError::from(error).clone();
        assert_eq!(cloned.to_string(), "failed to read missing.txt: gone");
    }
}

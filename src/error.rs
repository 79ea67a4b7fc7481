//! Error type shared by the game engine and its collaborators

use std::fmt;
use std::io;

/// Errors surfaced while setting up or playing a game
#[derive(Debug)]
pub enum GameError {
    /// Reading a word list, picture, or guess failed
    Io(io::Error),
    /// The guess source ran out before the round ended
    InputClosed,
    /// Command-line arguments could not be interpreted
    Usage(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::InputClosed => write!(f, "Input closed before the round finished"),
            Self::Usage(msg) => write!(f, "Invalid arguments: {msg}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InputClosed | Self::Usage(_) => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

//! Word lists and pictures for the game
//!
//! Assets come either from files or from the defaults embedded in the binary.

mod embedded;
pub mod loader;

pub use embedded::{PICTURE, WORDS, WORDS_COUNT};

use crate::core::Grid;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Name that selects the embedded asset instead of a file
pub const BUILTIN: &str = "builtin";

/// Where a word list or picture comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Builtin,
    File(PathBuf),
}

impl AssetSource {
    /// Interpret a command-line value: `builtin` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            BUILTIN => Self::Builtin,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the word pool from this source
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file source cannot be read.
    pub fn load_words(&self) -> io::Result<Vec<String>> {
        match self {
            Self::Builtin => Ok(loader::words_from_slice(WORDS)),
            Self::File(path) => loader::load_words(path),
        }
    }

    /// Load the picture from this source
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file source cannot be read.
    pub fn load_grid(&self) -> io::Result<Grid> {
        match self {
            Self::Builtin => Ok(Grid::new(PICTURE)),
            Self::File(path) => loader::load_grid(path),
        }
    }
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "{BUILTIN}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

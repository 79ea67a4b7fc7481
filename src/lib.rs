//! Picture Reveal
//!
//! A hangman-style word game: every correctly guessed letter uncovers more of a
//! hidden ASCII-art picture.
//!
//! # Quick Start
//!
//! ```rust
//! use picture_reveal::core::{Grid, RoundState};
//!
//! let grid = Grid::from_lines(["/\\_/\\", "( o o )"]);
//! let mut round = RoundState::new("owl", 9);
//!
//! // Three letters hidden: three masked cells before each visible one
//! println!("{}", grid.render(round.unguessed()));
//!
//! round.guess('o');
//! println!("{}", grid.render(round.unguessed()));
//! ```

// Core domain types
pub mod core;

// Round and session engines
pub mod engine;

// Word lists and pictures
pub mod assets;

// Runtime configuration
pub mod config;

// Error type
pub mod error;

// Terminal output formatting
pub mod output;

pub use error::GameError;

//! Terminal output formatting
//!
//! Console rendering of a game session and of picture previews.

pub mod display;
pub mod formatters;

pub use display::{ConsoleView, print_preview};

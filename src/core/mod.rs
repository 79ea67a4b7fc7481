//! Core game types
//!
//! The picture grid with its mask renderer, and the per-round guess state machine.
//! Everything here is pure: no I/O and no randomness.

mod grid;
mod round;

pub use grid::{Frame, Grid, MASK_CHAR};
pub use round::{DEFAULT_WRONG_BUDGET, GuessOutcome, RoundState};

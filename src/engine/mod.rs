//! Game engine
//!
//! Drives rounds and sessions on top of the pure types in [`crate::core`].
//! Input and output stay behind the [`GuessSource`] and [`GameView`] traits.

pub mod guess;
mod round;
mod session;
pub mod view;

pub use guess::{GuessSource, ScriptedGuesses, TokenGuesses};
pub use round::{RoundOutcome, run_round};
pub use session::{RoundRecord, Session, SessionSummary};
pub use view::GameView;

//! Guess sources
//!
//! The round engine asks for one guess at a time through [`GuessSource`], so a
//! round can be driven by a terminal or by a fixed script.

use crate::error::GameError;
use std::collections::VecDeque;
use std::io::BufRead;

/// Supplies the next guessed letter
pub trait GuessSource {
    /// Block until the next guess is available
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InputClosed`] when no more guesses will arrive, or
    /// [`GameError::Io`] if reading fails.
    fn next_guess(&mut self) -> Result<char, GameError>;
}

/// Reads whitespace-separated tokens and uses the first letter of each
///
/// Blank lines are skipped. Several tokens typed on one line are consumed by
/// successive requests, and anything after a token's first character is ignored.
pub struct TokenGuesses<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenGuesses<R> {
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, GameError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl<R: BufRead> GuessSource for TokenGuesses<R> {
    fn next_guess(&mut self) -> Result<char, GameError> {
        let token = self.next_token()?.to_lowercase();
        // split_whitespace never yields empty tokens
        token.chars().next().ok_or(GameError::InputClosed)
    }
}

/// A fixed sequence of guesses
#[derive(Debug, Clone, Default)]
pub struct ScriptedGuesses {
    guesses: VecDeque<char>,
}

impl ScriptedGuesses {
    #[must_use]
    pub fn new(guesses: impl IntoIterator<Item = char>) -> Self {
        Self {
            guesses: guesses.into_iter().collect(),
        }
    }

    /// Guesses not yet handed out
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.guesses.len()
    }
}

impl GuessSource for ScriptedGuesses {
    fn next_guess(&mut self) -> Result<char, GameError> {
        self.guesses.pop_front().ok_or(GameError::InputClosed)
    }
}

//! Per-round guessing state machine
//!
//! Tracks which letters of the target word are still hidden. Each correct guess
//! uncovers exactly one position: the leftmost occurrence that has not been found
//! yet. Guessing `a` three times against "banana" reveals the three `a`s one by one.

use super::grid::MASK_CHAR;

/// Number of wrong guesses allowed in a round
pub const DEFAULT_WRONG_BUDGET: usize = 9;

/// Result of applying one guess to a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter was found at `position` and is now revealed
    Correct { position: usize },
    /// The letter is not among the remaining hidden positions
    Incorrect,
    /// The round had already ended; nothing changed
    Ignored,
}

/// State of a single round, owned by whoever drives it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: Vec<char>,
    /// `None` marks a position already found, so it can never match again
    remaining: Vec<Option<char>>,
    progress: Vec<char>,
    unguessed: usize,
    wrong: usize,
    wrong_budget: usize,
}

impl RoundState {
    /// Start a round for `word`, compared case-insensitively
    ///
    /// An empty word yields a round that is already solved.
    ///
    /// # Examples
    /// ```
    /// use picture_reveal::core::{GuessOutcome, RoundState};
    ///
    /// let mut round = RoundState::new("Cat", 9);
    /// assert_eq!(round.guess('A'), GuessOutcome::Correct { position: 1 });
    /// assert_eq!(round.progress(), ".a.");
    /// assert_eq!(round.unguessed(), 2);
    /// ```
    #[must_use]
    pub fn new(word: &str, wrong_budget: usize) -> Self {
        debug_assert!(wrong_budget > 0, "wrong-guess budget must be positive");

        let target: Vec<char> = word.to_lowercase().chars().collect();
        let remaining = target.iter().copied().map(Some).collect();
        let progress = vec![MASK_CHAR; target.len()];
        let unguessed = target.len();

        Self {
            target,
            remaining,
            progress,
            unguessed,
            wrong: 0,
            wrong_budget,
        }
    }

    /// Apply a guess, matching the leftmost hidden occurrence of `letter`
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::Ignored;
        }

        let letter = letter.to_lowercase().next().unwrap_or(letter);

        match self.remaining.iter().position(|&c| c == Some(letter)) {
            Some(position) => {
                self.progress[position] = self.target[position];
                self.remaining[position] = None;
                self.unguessed -= 1;
                GuessOutcome::Correct { position }
            }
            None => {
                self.wrong += 1;
                GuessOutcome::Incorrect
            }
        }
    }

    /// Letters of the target not yet found
    #[inline]
    #[must_use]
    pub const fn unguessed(&self) -> usize {
        self.unguessed
    }

    /// Wrong guesses made so far
    #[inline]
    #[must_use]
    pub const fn wrong(&self) -> usize {
        self.wrong
    }

    #[inline]
    #[must_use]
    pub const fn wrong_budget(&self) -> usize {
        self.wrong_budget
    }

    /// Wrong guesses still allowed before the round is lost
    #[inline]
    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        self.wrong_budget.saturating_sub(self.wrong)
    }

    /// Found letters in place, [`MASK_CHAR`] everywhere else
    #[must_use]
    pub fn progress(&self) -> String {
        self.progress.iter().collect()
    }

    /// The lowercased target word
    #[must_use]
    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.unguessed == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.is_solved() && self.wrong >= self.wrong_budget
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_solved() || self.is_failed()
    }
}

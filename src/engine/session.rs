//! Session engine
//!
//! Plays one round per word in the pool, drawing words uniformly at random
//! without replacement until the pool is empty.

use super::guess::GuessSource;
use super::round::run_round;
use super::view::GameView;
use crate::core::{DEFAULT_WRONG_BUDGET, Grid};
use crate::error::GameError;
use log::{debug, info};
use rand::Rng;
use rand::rngs::ThreadRng;

/// Result of one round within a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// 1-based round number
    pub number: usize,
    pub word: String,
    pub solved: bool,
    pub wrong_guesses: usize,
}

/// Results of every round played in a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: Vec<RoundRecord>,
}

impl SessionSummary {
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn rounds_solved(&self) -> usize {
        self.rounds.iter().filter(|r| r.solved).count()
    }
}

/// A game over a pool of words
pub struct Session<R: Rng> {
    pool: Vec<String>,
    rng: R,
    wrong_budget: usize,
}

impl Session<ThreadRng> {
    /// Create a session drawing words with the thread-local RNG
    #[must_use]
    pub fn new(pool: Vec<String>) -> Self {
        Self::with_rng(pool, rand::rng())
    }
}

impl<R: Rng> Session<R> {
    /// Create a session drawing words with `rng`
    ///
    /// # Examples
    /// ```
    /// use picture_reveal::engine::Session;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let pool = vec!["cat".to_string(), "dog".to_string()];
    /// let mut session = Session::with_rng(pool, StdRng::seed_from_u64(7));
    ///
    /// let first = session.draw().unwrap();
    /// let second = session.draw().unwrap();
    /// assert_ne!(first, second);
    /// assert!(session.draw().is_none());
    /// ```
    #[must_use]
    pub fn with_rng(pool: Vec<String>, rng: R) -> Self {
        Self {
            pool,
            rng,
            wrong_budget: DEFAULT_WRONG_BUDGET,
        }
    }

    /// Override the number of wrong guesses allowed per round
    #[must_use]
    pub fn wrong_budget(mut self, wrong_budget: usize) -> Self {
        self.wrong_budget = wrong_budget;
        self
    }

    /// Words not yet played
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    /// Remove and return a uniformly chosen word from the remaining pool
    pub fn draw(&mut self) -> Option<String> {
        if self.pool.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.pool.len());
        Some(self.pool.swap_remove(index))
    }

    /// Play a round for every word in the pool
    ///
    /// An empty pool finishes immediately with zero rounds.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a round, typically from `guesses`.
    pub fn run<G, V>(
        &mut self,
        grid: &Grid,
        guesses: &mut G,
        view: &mut V,
    ) -> Result<SessionSummary, GameError>
    where
        G: GuessSource + ?Sized,
        V: GameView + ?Sized,
    {
        info!(
            "session starting with {} words, {} wrong guesses per round",
            self.pool.len(),
            self.wrong_budget
        );
        view.session_started(self.pool.len(), self.wrong_budget);

        let mut summary = SessionSummary::default();

        while let Some(word) = self.draw() {
            let number = summary.rounds.len() + 1;
            debug!("round {number}: {} words left in pool", self.pool.len());
            view.round_started(number);

            let outcome = run_round(grid, &word, self.wrong_budget, guesses, view)?;
            summary.rounds.push(RoundRecord {
                number,
                word,
                solved: outcome.solved,
                wrong_guesses: outcome.wrong_guesses,
            });
        }

        info!(
            "session finished: {} of {} rounds solved",
            summary.rounds_solved(),
            summary.rounds_played()
        );
        view.session_finished(&summary);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::guess::ScriptedGuesses;
    use crate::engine::view::RecordingView;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn draw_uses_every_word_once() {
        let words = ["wizard", "owl", "wand", "spell", "potion"];
        let mut session = Session::with_rng(pool(&words), StdRng::seed_from_u64(42));

        let mut drawn = Vec::new();
        while let Some(word) = session.draw() {
            drawn.push(word);
        }

        drawn.sort();
        let mut expected = pool(&words);
        expected.sort();
        assert_eq!(drawn, expected);
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn two_word_session_plays_both() {
        let mut session = Session::with_rng(pool(&["cat", "dog"]), StdRng::seed_from_u64(1));
        // Each word's letters, in either order, solve both rounds
        let mut guesses = ScriptedGuesses::new("catdogcat".chars());
        let mut view = RecordingView::default();

        let summary = session
            .run(&Grid::new("abc"), &mut guesses, &mut view)
            .unwrap();

        assert_eq!(summary.rounds_played(), 2);
        assert_eq!(session.remaining(), 0);

        let mut words: Vec<&str> = summary.rounds.iter().map(|r| r.word.as_str()).collect();
        words.sort_unstable();
        assert_eq!(words, vec!["cat", "dog"]);

        assert_eq!(summary.rounds[0].number, 1);
        assert_eq!(summary.rounds[1].number, 2);
        assert_eq!(view.events.first().unwrap(), "session_started:2:9");
        assert_eq!(view.count("round_started"), 2);
        assert_eq!(view.count("session_finished"), 1);
    }

    #[test]
    fn empty_pool_finishes_with_zero_rounds() {
        let mut session = Session::with_rng(Vec::new(), StdRng::seed_from_u64(0));
        let mut guesses = ScriptedGuesses::default();
        let mut view = RecordingView::default();

        let summary = session
            .run(&Grid::new("abc"), &mut guesses, &mut view)
            .unwrap();

        assert_eq!(summary.rounds_played(), 0);
        assert_eq!(
            view.events,
            vec!["session_started:0:9", "session_finished:0:0"]
        );
    }

    #[test]
    fn failed_rounds_still_consume_their_word() {
        let mut session = Session::with_rng(pool(&["owl"]), StdRng::seed_from_u64(3))
            .wrong_budget(2);
        let mut guesses = ScriptedGuesses::new("xz".chars());
        let mut view = RecordingView::default();

        let summary = session
            .run(&Grid::new("abc"), &mut guesses, &mut view)
            .unwrap();

        assert_eq!(summary.rounds_played(), 1);
        assert_eq!(summary.rounds_solved(), 0);
        assert_eq!(summary.rounds[0].wrong_guesses, 2);
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn input_closed_stops_the_session() {
        let mut session = Session::with_rng(pool(&["cat", "dog"]), StdRng::seed_from_u64(5));
        let mut guesses = ScriptedGuesses::new("q".chars());
        let mut view = RecordingView::default();

        let result = session.run(&Grid::new("abc"), &mut guesses, &mut view);

        assert!(matches!(result, Err(GameError::InputClosed)));
        assert_eq!(view.count("session_finished"), 0);
    }

    #[test]
    fn draw_order_is_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let runs = 4000;
        let mut cat_first = 0;

        for _ in 0..runs {
            let mut session = Session::with_rng(pool(&["cat", "dog"]), &mut rng);
            if session.draw().as_deref() == Some("cat") {
                cat_first += 1;
            }
        }

        // Expected 2000, standard deviation about 32
        assert!((1800..=2200).contains(&cat_first), "cat first {cat_first} times");
    }

    #[test]
    fn draw_covers_every_position_for_three_words() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut first_counts = [0usize; 3];
        let words = ["a", "b", "c"];

        for _ in 0..3000 {
            let mut session = Session::with_rng(pool(&words), &mut rng);
            let first = session.draw().unwrap();
            let index = words.iter().position(|&w| w == first).unwrap();
            first_counts[index] += 1;
        }

        for count in first_counts {
            assert!((850..=1150).contains(&count), "counts {first_counts:?}");
        }
    }
}

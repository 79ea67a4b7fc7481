//! Round engine
//!
//! Plays one word to completion: asks for guesses, updates the round state, and
//! shows the picture after every guess.

use super::guess::GuessSource;
use super::view::GameView;
use crate::core::{Grid, GuessOutcome, RoundState};
use crate::error::GameError;
use log::debug;

/// How a round ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub solved: bool,
    /// The word as it appeared in the pool, original case preserved
    pub revealed_word: String,
    pub wrong_guesses: usize,
    pub guesses: usize,
}

/// Play a single round for `word` against `grid`
///
/// The round ends once every letter is found or `wrong_budget` wrong guesses were
/// made, whichever comes first.
///
/// # Errors
///
/// Propagates errors from `guesses`, e.g. [`GameError::InputClosed`] when input
/// ends before the round does.
///
/// # Examples
/// ```
/// use picture_reveal::core::Grid;
/// use picture_reveal::engine::{ScriptedGuesses, run_round};
/// # use picture_reveal::engine::{GameView, RoundOutcome, SessionSummary};
/// # use picture_reveal::core::Frame;
/// # struct Quiet;
/// # impl GameView for Quiet {
/// #     fn session_started(&mut self, _: usize, _: usize) {}
/// #     fn round_started(&mut self, _: usize) {}
/// #     fn frame(&mut self, _: &Frame) {}
/// #     fn progress(&mut self, _: usize, _: &str) {}
/// #     fn incorrect_guess(&mut self) {}
/// #     fn round_finished(&mut self, _: &RoundOutcome) {}
/// #     fn session_finished(&mut self, _: &SessionSummary) {}
/// # }
///
/// let grid = Grid::from_lines(["/\\", "\\/"]);
/// let mut guesses = ScriptedGuesses::new("owl".chars());
/// let outcome = run_round(&grid, "Owl", 9, &mut guesses, &mut Quiet).unwrap();
///
/// assert!(outcome.solved);
/// assert_eq!(outcome.revealed_word, "Owl");
/// ```
pub fn run_round<G, V>(
    grid: &Grid,
    word: &str,
    wrong_budget: usize,
    guesses: &mut G,
    view: &mut V,
) -> Result<RoundOutcome, GameError>
where
    G: GuessSource + ?Sized,
    V: GameView + ?Sized,
{
    let mut state = RoundState::new(word, wrong_budget);
    let mut guess_count = 0;

    view.frame(&grid.render(state.unguessed()));

    while !state.is_over() {
        view.progress(state.wrong(), &state.progress());

        let letter = guesses.next_guess()?;
        guess_count += 1;

        match state.guess(letter) {
            GuessOutcome::Correct { position } => {
                debug!(
                    "guess '{letter}' found at {position}, {} letters left",
                    state.unguessed()
                );
            }
            GuessOutcome::Incorrect => {
                debug!(
                    "guess '{letter}' missed, {} wrong of {}",
                    state.wrong(),
                    state.wrong_budget()
                );
                view.incorrect_guess();
            }
            GuessOutcome::Ignored => unreachable!("guess applied after the round ended"),
        }

        view.frame(&grid.render(state.unguessed()));
    }

    let outcome = RoundOutcome {
        solved: state.is_solved(),
        revealed_word: word.to_string(),
        wrong_guesses: state.wrong(),
        guesses: guess_count,
    };
    debug!(
        "round over: solved={} after {} guesses",
        outcome.solved, outcome.guesses
    );

    view.round_finished(&outcome);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_WRONG_BUDGET;
    use crate::engine::guess::ScriptedGuesses;
    use crate::engine::view::RecordingView;

    fn play(word: &str, script: &str) -> (Result<RoundOutcome, GameError>, RecordingView) {
        let grid = Grid::new("abcdefgh");
        let mut guesses = ScriptedGuesses::new(script.chars());
        let mut view = RecordingView::default();
        let result = run_round(&grid, word, DEFAULT_WRONG_BUDGET, &mut guesses, &mut view);
        (result, view)
    }

    #[test]
    fn all_correct_guesses_solve_the_round() {
        let (result, view) = play("cat", "cat");
        let outcome = result.unwrap();

        assert!(outcome.solved);
        assert_eq!(outcome.guesses, 3);
        assert_eq!(outcome.wrong_guesses, 0);
        assert_eq!(outcome.revealed_word, "cat");
        assert!(view.events.contains(&"progress:0:ca.".to_string()));
        assert_eq!(view.events.last().unwrap(), "round_finished:cat:true");
    }

    #[test]
    fn nine_wrong_guesses_fail_the_round() {
        let (result, view) = play("cat", "xyzqweruiz");
        let outcome = result.unwrap();

        assert!(!outcome.solved);
        assert_eq!(outcome.wrong_guesses, 9);
        assert_eq!(outcome.guesses, 9);
        assert_eq!(outcome.revealed_word, "cat");
        assert_eq!(view.count("incorrect"), 9);
        // Picture never changes on wrong guesses
        assert!(view.frames().iter().all(|f| *f == "...d...h"));
    }

    #[test]
    fn frame_shown_initially_and_after_every_guess() {
        let (result, view) = play("ab", "zab");
        result.unwrap();

        assert_eq!(view.frames(), vec!["..c..f..", "..c..f..", ".b.d.f.h", "abcdefgh"]);
    }

    #[test]
    fn progress_shown_before_each_guess() {
        let (result, view) = play("banana", "aaa");
        assert!(matches!(result, Err(GameError::InputClosed)));

        let progress: Vec<&str> = view
            .events
            .iter()
            .map(String::as_str)
            .filter(|e| e.starts_with("progress:"))
            .collect();
        assert_eq!(
            progress,
            vec![
                "progress:0:......",
                "progress:0:.a....",
                "progress:0:.a.a..",
                "progress:0:.a.a.a",
            ]
        );
    }

    #[test]
    fn wrong_count_prefixes_progress() {
        let (result, view) = play("owl", "qowl");
        assert!(result.unwrap().solved);
        assert!(view.events.contains(&"progress:1:...".to_string()));
        assert!(view.events.contains(&"progress:1:ow.".to_string()));
    }

    #[test]
    fn revealed_word_keeps_original_case() {
        let (result, _) = play("Phoenix", "PHOENIX");
        let outcome = result.unwrap();
        assert!(outcome.solved);
        assert_eq!(outcome.revealed_word, "Phoenix");
    }

    #[test]
    fn input_closed_mid_round_is_an_error() {
        let (result, view) = play("dragon", "dr");
        assert!(matches!(result, Err(GameError::InputClosed)));
        assert_eq!(view.count("round_finished"), 0);
    }

    #[test]
    fn empty_word_solves_without_guesses() {
        let (result, view) = play("", "");
        let outcome = result.unwrap();
        assert!(outcome.solved);
        assert_eq!(outcome.guesses, 0);
        assert_eq!(view.frames(), vec!["abcdefgh"]);
    }

    #[test]
    fn solved_within_word_length_correct_guesses() {
        let word = "cauldron";
        let (result, _) = play(word, "zzcauldronzz");
        let outcome = result.unwrap();
        assert!(outcome.solved);
        assert_eq!(outcome.guesses - outcome.wrong_guesses, word.len());
    }
}

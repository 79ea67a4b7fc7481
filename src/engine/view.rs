//! Presentation hooks called by the round and session engines

use super::round::RoundOutcome;
use super::session::SessionSummary;
use crate::core::Frame;

/// Receives everything a player should see during a session
pub trait GameView {
    /// A session of `rounds` rounds is starting
    fn session_started(&mut self, rounds: usize, wrong_budget: usize);

    /// Round number `round` (1-based) is starting
    fn round_started(&mut self, round: usize);

    /// The picture as it currently looks
    fn frame(&mut self, frame: &Frame);

    /// Found letters so far, shown before each guess
    fn progress(&mut self, wrong: usize, progress: &str);

    fn incorrect_guess(&mut self);

    /// The round ended; reveals the word
    fn round_finished(&mut self, outcome: &RoundOutcome);

    fn session_finished(&mut self, summary: &SessionSummary);
}

/// Records view calls as plain strings for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub events: Vec<String>,
}

#[cfg(test)]
impl RecordingView {
    pub fn frames(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| e.strip_prefix("frame:"))
            .collect()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.events.iter().filter(|e| e.starts_with(prefix)).count()
    }
}

#[cfg(test)]
impl GameView for RecordingView {
    fn session_started(&mut self, rounds: usize, wrong_budget: usize) {
        self.events
            .push(format!("session_started:{rounds}:{wrong_budget}"));
    }

    fn round_started(&mut self, round: usize) {
        self.events.push(format!("round_started:{round}"));
    }

    fn frame(&mut self, frame: &Frame) {
        self.events.push(format!("frame:{frame}"));
    }

    fn progress(&mut self, wrong: usize, progress: &str) {
        self.events.push(format!("progress:{wrong}:{progress}"));
    }

    fn incorrect_guess(&mut self) {
        self.events.push("incorrect".to_string());
    }

    fn round_finished(&mut self, outcome: &RoundOutcome) {
        self.events.push(format!(
            "round_finished:{}:{}",
            outcome.revealed_word, outcome.solved
        ));
    }

    fn session_finished(&mut self, summary: &SessionSummary) {
        self.events.push(format!(
            "session_finished:{}:{}",
            summary.rounds_played(),
            summary.rounds_solved()
        ));
    }
}

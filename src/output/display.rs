//! Console view of a running game

use super::formatters::{plural, progress_line, round_banner, rule};
use crate::core::Frame;
use crate::engine::{GameView, RoundOutcome, SessionSummary};
use colored::Colorize;

/// Prints the game to stdout
#[derive(Debug, Default)]
pub struct ConsoleView;

impl GameView for ConsoleView {
    fn session_started(&mut self, rounds: usize, wrong_budget: usize) {
        println!("{}", rule('*').bright_cyan());
        println!("You will play a total of {} and", plural(rounds, "round", "rounds"));
        println!(
            "You will be allowed to make {} in each round",
            plural(wrong_budget, "wrong guess", "wrong guesses")
        );
        println!("{}", rule('*').bright_cyan());
    }

    fn round_started(&mut self, round: usize) {
        println!("\n{}", round_banner(round).bright_yellow().bold());
    }

    fn frame(&mut self, frame: &Frame) {
        println!("{frame}");
    }

    fn progress(&mut self, wrong: usize, progress: &str) {
        println!("{}", progress_line(wrong, progress).bright_white().bold());
    }

    fn incorrect_guess(&mut self) {
        println!("{}", "incorrect guess".red());
    }

    fn round_finished(&mut self, outcome: &RoundOutcome) {
        let word = outcome.revealed_word.bright_cyan().bold();
        if outcome.solved {
            println!("{} The word was: {word}", "✅".green());
        } else {
            println!("{} The word was: {word}", "❌".red());
        }
    }

    fn session_finished(&mut self, summary: &SessionSummary) {
        println!("\n{}", rule('═').cyan());
        println!("No more words left to guess");
        if summary.rounds_played() > 0 {
            println!(
                "You solved {} of {}",
                summary.rounds_solved().to_string().bright_green().bold(),
                plural(summary.rounds_played(), "round", "rounds")
            );
        }
        println!("I hope you enjoyed the game, bye!");
        println!("{}", rule('═').cyan());
    }
}

/// Print the picture as it looks with `unguessed` letters left
pub fn print_preview(frame: &Frame, unguessed: usize) {
    println!(
        "{}",
        format!("Picture with {} left:", plural(unguessed, "letter", "letters"))
            .bright_cyan()
            .bold()
    );
    println!("{frame}");
}

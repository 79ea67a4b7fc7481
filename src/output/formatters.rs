//! Formatting utilities for terminal output

/// Width of banner rules
pub const RULE_WIDTH: usize = 65;

/// A horizontal rule made of `ch`
#[must_use]
pub fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// Progress line shown before each guess, prefixed by the wrong-guess count
#[must_use]
pub fn progress_line(wrong: usize, progress: &str) -> String {
    format!("{wrong}: {progress}")
}

/// Centered round heading
#[must_use]
pub fn round_banner(round: usize) -> String {
    let title = format!("ROUND - {round}");
    format!("{title:^RULE_WIDTH$}")
}

/// "N guess"/"N guesses"
#[must_use]
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

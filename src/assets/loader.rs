//! Word list and picture loading utilities
//!
//! Both sources are plain line-oriented text files.

use crate::core::Grid;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and blank lines skipped, so a stray empty line never becomes
/// a zero-letter round. Case is preserved; rounds compare case-insensitively and
/// reveal the word as written.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use picture_reveal::assets::loader::load_words;
///
/// let words = load_words("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Load a picture from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_grid<P: AsRef<Path>>(path: P) -> io::Result<Grid> {
    let content = fs::read_to_string(path)?;
    Ok(Grid::from_lines(content.lines()))
}

/// Split word-list text into words
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert embedded string slice to an owned word pool
///
/// # Examples
/// ```
/// use picture_reveal::assets::loader::words_from_slice;
/// use picture_reveal::assets::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "picture_reveal_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn words_from_text_trims_and_skips_blank_lines() {
        let words = words_from_text("Wizard\n\n  owl \r\nWand\n");
        assert_eq!(words, vec!["Wizard", "owl", "Wand"]);
    }

    #[test]
    fn words_from_text_empty() {
        assert!(words_from_text("").is_empty());
        assert!(words_from_text("\n\n").is_empty());
        assert!(words_from_text("  \n\t\n").is_empty());
    }

    #[test]
    fn words_from_slice_copies_in_order() {
        let words = words_from_slice(&["cat", "Dog"]);
        assert_eq!(words, vec!["cat", "Dog"]);
    }

    #[test]
    fn load_words_from_file() {
        let path = temp_file("words.txt", "cat\ndog\n");
        let words = load_words(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn load_grid_terminates_every_row() {
        let path = temp_file("picture.txt", " /\\\n/__\\");
        let grid = load_grid(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(grid.as_str(), " /\\\n/__\\\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("picture_reveal_does_not_exist.txt");
        assert!(load_words(&path).is_err());
        assert!(load_grid(&path).is_err());
    }
}

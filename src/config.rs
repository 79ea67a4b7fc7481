//! Runtime configuration
//!
//! Resolves where the word list and picture come from. Besides the `--words` and
//! `--picture` options, the classic four-argument form is accepted:
//!
//! ```text
//! picture_reveal -words <WORDS> -picture <PICTURE>
//! picture_reveal -picture <PICTURE> -words <WORDS>
//! ```
//!
//! Only the first flag matters: if it is `-words`, the second argument is the word
//! list and the fourth the picture; `-picture` first swaps them. The third
//! argument is not inspected.

use crate::assets::AssetSource;
use crate::core::DEFAULT_WRONG_BUDGET;
use crate::error::GameError;
use std::ffi::{OsStr, OsString};

/// Word list used when none is given
pub const DEFAULT_WORDS_PATH: &str = "words.txt";

/// Picture used when none is given
pub const DEFAULT_PICTURE_PATH: &str = "hp.txt";

const LEGACY_WORDS_FLAG: &str = "-words";
const LEGACY_PICTURE_FLAG: &str = "-picture";

/// Everything needed to start a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub words: AssetSource,
    pub picture: AssetSource,
    pub wrong_budget: usize,
    /// Seed for the word order; random when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            AssetSource::from_arg(DEFAULT_WORDS_PATH),
            AssetSource::from_arg(DEFAULT_PICTURE_PATH),
        )
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(words: AssetSource, picture: AssetSource) -> Self {
        Self {
            words,
            picture,
            wrong_budget: DEFAULT_WRONG_BUDGET,
            seed: None,
        }
    }

    /// Parse the classic argument form, if `args` (program name excluded) use it
    ///
    /// Returns `Ok(None)` when the arguments are not in that form, so they can be
    /// handed to the regular parser.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Usage`] when the classic form has fewer than four
    /// arguments.
    ///
    /// # Examples
    /// ```
    /// use picture_reveal::assets::AssetSource;
    /// use picture_reveal::config::GameConfig;
    ///
    /// let args = ["-picture", "owl.txt", "-words", "list.txt"];
    /// let config = GameConfig::from_legacy_args(&args).unwrap().unwrap();
    /// assert_eq!(config.words, AssetSource::from_arg("list.txt"));
    /// assert_eq!(config.picture, AssetSource::from_arg("owl.txt"));
    /// ```
    pub fn from_legacy_args<S: AsRef<str>>(args: &[S]) -> Result<Option<Self>, GameError> {
        let Some(first) = args.first() else {
            return Ok(None);
        };
        let first: &str = first.as_ref();
        if !is_legacy_flag(first) {
            return Ok(None);
        }

        let (Some(second), Some(fourth)) = (args.get(1), args.get(3)) else {
            return Err(GameError::Usage(format!(
                "expected `{first} <PATH> <FLAG> <PATH>`, got {} argument(s)",
                args.len()
            )));
        };
        let (words, picture): (&str, &str) = if first == LEGACY_WORDS_FLAG {
            (second.as_ref(), fourth.as_ref())
        } else {
            (fourth.as_ref(), second.as_ref())
        };

        Ok(Some(Self::new(
            AssetSource::from_arg(words),
            AssetSource::from_arg(picture),
        )))
    }

    /// Like [`GameConfig::from_legacy_args`], for raw process arguments
    ///
    /// Arguments that are not valid UTF-8 are never the classic form; they are
    /// left for the regular parser to report.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Usage`] when the classic form has fewer than four
    /// arguments.
    pub fn from_legacy_os_args(args: &[OsString]) -> Result<Option<Self>, GameError> {
        let Some(args) = args
            .iter()
            .map(OsString::as_os_str)
            .map(OsStr::to_str)
            .collect::<Option<Vec<&str>>>()
        else {
            return Ok(None);
        };
        Self::from_legacy_args(&args)
    }
}

fn is_legacy_flag(arg: &str) -> bool {
    arg == LEGACY_WORDS_FLAG || arg == LEGACY_PICTURE_FLAG
}

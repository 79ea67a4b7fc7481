//! Picture grid and the mask renderer
//!
//! The picture is revealed with a repeating pattern: `unguessed` mask characters,
//! then one real character, across the whole grid. Line breaks pass through and
//! do not advance the pattern, so a row boundary never resets it.

use std::fmt;

/// Placeholder shown for a hidden picture cell
pub const MASK_CHAR: char = '.';

/// Immutable ASCII-art picture, rows separated by `'\n'`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    text: String,
}

/// A rendering of a [`Grid`] at a given number of unguessed letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    text: String,
    masked: usize,
}

impl Grid {
    /// Wrap picture text as-is
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build a grid from rows, terminating every row (the last one included) with `'\n'`
    ///
    /// # Examples
    /// ```
    /// use picture_reveal::core::Grid;
    ///
    /// let grid = Grid::from_lines(["ab", "cd"]);
    /// assert_eq!(grid.as_str(), "ab\ncd\n");
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for line in lines {
            text.push_str(line.as_ref());
            text.push('\n');
        }
        Self { text }
    }

    /// Get the picture as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of picture cells, i.e. characters other than line breaks
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.text.chars().filter(|&c| c != '\n').count()
    }

    /// Render the grid with `unguessed` masked cells before every revealed cell
    ///
    /// With `unguessed == 0` the picture is shown unchanged.
    ///
    /// # Examples
    /// ```
    /// use picture_reveal::core::Grid;
    ///
    /// let grid = Grid::new("ab\ncd");
    /// assert_eq!(grid.render(1).as_str(), ".b\n.d");
    /// assert_eq!(grid.render(0).as_str(), "ab\ncd");
    /// ```
    #[must_use]
    pub fn render(&self, unguessed: usize) -> Frame {
        let mut out = String::with_capacity(self.text.len());
        let mut gap = 0;
        let mut masked = 0;

        for ch in self.text.chars() {
            if ch == '\n' {
                out.push('\n');
            } else if gap < unguessed {
                out.push(MASK_CHAR);
                gap += 1;
                masked += 1;
            } else {
                out.push(ch);
                gap = 0;
            }
        }

        Frame { text: out, masked }
    }
}

impl Frame {
    /// Get the rendered text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of cells hidden behind [`MASK_CHAR`]
    ///
    /// Picture cells that happen to be `.` are not counted.
    #[inline]
    #[must_use]
    pub const fn masked_count(&self) -> usize {
        self.masked
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

//! Header transformation and text statistics
//!
//! The persisted file only gets the short header (name, length, timestamp).
//! The full [`TextStats`] are reported to the caller and never written.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Width of the `=` line closing the header
pub const SEPARATOR_WIDTH: usize = 50;

/// Timestamp format embedded in the header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Summary statistics of a text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStats {
    pub line_count: usize,
    pub word_count: usize,
    pub char_count: usize,
    pub avg_words_per_line: f64,
}

/// Unicode whitespace plus the ASCII information separators (FS, GS, RS, US)
fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

impl TextStats {
    /// Compute statistics for `text`
    ///
    /// Lines are split on `\n`, so a trailing newline counts a final empty
    /// line and `line_count` is never zero.
    pub fn from_text(text: &str) -> Self {
        let line_count = text.split('\n').count();
        let word_count = text
            .split(is_word_separator)
            .filter(|word| !word.is_empty())
            .count();
        let char_count = text.chars().count();

        Self {
            line_count,
            word_count,
            char_count,
            avg_words_per_line: word_count as f64 / line_count as f64,
        }
    }

    /// Average words per line with one decimal digit
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.avg_words_per_line)
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File Statistics:")?;
        writeln!(f, "   Lines: {}", self.line_count)?;
        writeln!(f, "   Words: {}", self.word_count)?;
        writeln!(f, "   Characters: {}", self.char_count)?;
        write!(f, "   Average words per line: {}", self.average_display())
    }
}

/// Output of [`transform`]
#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    /// Header followed by the original text
    pub modified_text: String,
    pub stats: TextStats,
}

/// Build the header block for `source_name`
pub fn header(source_name: &str, char_count: usize, now: NaiveDateTime) -> String {
    format!(
        "# Modified version of: {source_name}\n\
         # Original length: {char_count} characters\n\
         # Modification timestamp: {}\n\
         {}\n\n",
        now.format(TIMESTAMP_FORMAT),
        "=".repeat(SEPARATOR_WIDTH)
    )
}

/// Prepend the metadata header to `text` and compute its statistics
///
/// Deterministic for a given `now`.
pub fn transform(text: &str, source_name: &str, now: NaiveDateTime) -> TransformResult {
    let stats = TextStats::from_text(text);
    let mut modified_text = header(source_name, stats.char_count, now);
    modified_text.push_str(text);

    TransformResult {
        modified_text,
        stats,
    }
}

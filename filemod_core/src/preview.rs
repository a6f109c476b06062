//! Line-numbered, truncated previews of text

use crate::PREVIEW_WIDTH;
use std::fmt;

/// Marker appended to lines cut at the preview width
pub const ELLIPSIS: &str = "...";

const RULE_WIDTH: usize = 50;

/// One previewed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    /// 1-based line number
    pub number: usize,
    pub text: String,
    pub truncated: bool,
}

/// The first lines of a text plus how many were left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub lines: Vec<PreviewLine>,
    pub omitted: usize,
}

impl Preview {
    pub fn has_omitted(&self) -> bool {
        self.omitted > 0
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File Preview (showing first {} lines):", self.lines.len())?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for line in &self.lines {
            writeln!(f, "{:3}: {}", line.number, line.text)?;
        }
        if self.has_omitted() {
            writeln!(f, "      ... and {} more lines", self.omitted)?;
        }
        write!(f, "{}", "-".repeat(RULE_WIDTH))
    }
}

/// Preview the first `max_lines` lines of `text` at the default width
pub fn preview(text: &str, max_lines: usize) -> Preview {
    preview_with_width(text, max_lines, PREVIEW_WIDTH)
}

/// Preview the first `max_lines` lines, cutting each at `width` characters
pub fn preview_with_width(text: &str, max_lines: usize, width: usize) -> Preview {
    let mut lines = Vec::new();
    let mut total = 0;

    for (index, line) in text.split('\n').enumerate() {
        total += 1;
        if index >= max_lines {
            continue;
        }

        let truncated = line.chars().count() > width;
        let text = if truncated {
            let mut cut: String = line.chars().take(width).collect();
            cut.push_str(ELLIPSIS);
            cut
        } else {
            line.to_string()
        };

        lines.push(PreviewLine {
            number: index + 1,
            text,
            truncated,
        });
    }

    Preview {
        omitted: total - lines.len(),
        lines,
    }
}

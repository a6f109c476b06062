//! Caller-facing facade over the pipeline stages
//!
//! [`FileManager`] holds only the policy [`Limits`]; every call re-checks the
//! filesystem, so one manager can serve any number of independent files.

use crate::encoding::TextEncoding;
use crate::error::{NamingError, Result, ValidationError, WriteError};
use crate::preview::{Preview, preview_with_width};
use crate::reader::{self, Content};
use crate::transform::{self, TextStats, TransformResult};
use crate::validation::{self, ValidatedFile};
use crate::{Limits, naming, writer};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Extensions the tool expects to see; others are allowed but unusual
pub const TYPICAL_TEXT_EXTENSIONS: [&str; 4] = ["txt", "py", "md", "csv"];

/// Whether `path` ends in one of [`TYPICAL_TEXT_EXTENSIONS`] (case-insensitive)
pub fn is_typical_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TYPICAL_TEXT_EXTENSIONS
                .iter()
                .any(|typical| typical.eq_ignore_ascii_case(ext))
        })
}

/// Outcome of running every stage on one file
#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub encoding: TextEncoding,
    pub size_bytes: u64,
    pub stats: TextStats,
}

/// Validation, reading, transformation and writing of text files
#[derive(Debug, Clone, Default)]
pub struct FileManager {
    limits: Limits,
}

impl FileManager {
    /// Create a manager with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }

    /// Run the pre-flight checks on `path`
    pub fn validate(&self, path: impl AsRef<Path>) -> std::result::Result<ValidatedFile, ValidationError> {
        validation::validate(path.as_ref(), &self.limits)
    }

    /// Validate `path`, then decode it
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Content> {
        let validated = self.validate(path)?;
        Ok(reader::read(&validated)?)
    }

    /// Decode a file validated earlier by the caller
    pub fn read_validated(&self, file: &ValidatedFile) -> Result<Content> {
        Ok(reader::read(file)?)
    }

    /// Header + statistics for `content`, stamped with `now`
    pub fn transform(&self, content: &Content, now: NaiveDateTime) -> TransformResult {
        transform::transform(content.text(), &content.source_name(), now)
    }

    /// Free output path derived from `original`
    pub fn next_available_path(
        &self,
        original: impl AsRef<Path>,
    ) -> std::result::Result<PathBuf, NamingError> {
        naming::next_available_path(original.as_ref(), self.limits.max_naming_attempts)
    }

    pub fn write(
        &self,
        path: impl AsRef<Path>,
        text: &str,
    ) -> std::result::Result<(), WriteError> {
        writer::write(path.as_ref(), text)
    }

    /// Preview `text` at the configured width
    pub fn preview(&self, text: &str, max_lines: usize) -> Preview {
        preview_with_width(text, max_lines, self.limits.preview_width)
    }

    /// Run every stage on `path` without interaction
    pub fn process(&self, path: impl AsRef<Path>, now: NaiveDateTime) -> Result<ProcessReport> {
        let path = path.as_ref();
        let validated = self.validate(path)?;
        let content = self.read_validated(&validated)?;
        let transformed = self.transform(&content, now);
        let output = self.next_available_path(path)?;
        self.write(&output, &transformed.modified_text)?;

        Ok(ProcessReport {
            source: path.to_path_buf(),
            output,
            encoding: content.encoding(),
            size_bytes: validated.size(),
            stats: transformed.stats,
        })
    }
}

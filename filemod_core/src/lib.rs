//! filemod Core Library
//!
//! File validation and content transformation pipeline: validate an input
//! path, decode it with a fixed encoding fallback list, prepend a metadata
//! header, and write the result to a non-colliding output path.

pub mod encoding;
pub mod error;
pub mod manager;
pub mod naming;
pub mod preview;
pub mod reader;
pub mod transform;
pub mod validation;
pub mod writer;

// Re-export main types
pub use encoding::{DECODE_ORDER, TextEncoding};
pub use error::{Error, NamingError, ReadError, Result, ValidationError, WriteError};
pub use manager::{FileManager, ProcessReport, TYPICAL_TEXT_EXTENSIONS, is_typical_text_extension};
pub use naming::next_available_path;
pub use preview::{Preview, PreviewLine, preview};
pub use reader::{Content, read};
pub use transform::{TextStats, TransformResult, transform};
pub use validation::{ValidatedFile, validate};
pub use writer::write;

/// Largest input accepted by validation (10 MiB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Characters kept per preview line before the ellipsis marker
pub const PREVIEW_WIDTH: usize = 80;

/// Lines shown by a preview when the caller does not ask otherwise
pub const DEFAULT_PREVIEW_LINES: usize = 10;

/// Numbered output candidates tried before giving up
pub const MAX_NAMING_ATTEMPTS: u32 = 10_000;

/// Policy constants shared by the pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_file_size: u64,
    pub preview_width: usize,
    pub max_naming_attempts: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
            preview_width: PREVIEW_WIDTH,
            max_naming_attempts: MAX_NAMING_ATTEMPTS,
        }
    }
}

impl Limits {
    /// Create small limits so tests can hit every ceiling cheaply
    pub fn test() -> Self {
        Self {
            max_file_size: 1024,
            preview_width: 20,
            max_naming_attempts: 3,
        }
    }
}

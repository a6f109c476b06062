//! Output naming error types

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to derive a free output path
#[derive(Error, Debug)]
pub enum NamingError {
    /// Every numbered candidate up to the ceiling already exists
    #[error(
        "No free output name for '{}' after {attempts} numbered candidates",
        .original.display()
    )]
    NamingExhausted { original: PathBuf, attempts: u32 },
}

impl NamingError {
    /// Create a naming exhausted error
    pub fn exhausted(original: &Path, attempts: u32) -> Self {
        Self::NamingExhausted {
            original: original.to_path_buf(),
            attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_error() {
        let error = NamingError::exhausted(Path::new("notes.txt"), 10_000);
        assert!(error.to_string().contains("notes.txt"));
        assert!(error.to_string().contains("10000"));
    }
}

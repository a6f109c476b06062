//! Validation related error types

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Pre-flight validation failures, in the order the checks run
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Nothing exists at the path
    #[error("File '{}' does not exist.", .path.display())]
    NotFound { path: PathBuf },

    /// The path exists but is a directory or special file
    #[error("'{}' is not a file (it might be a directory).", .path.display())]
    NotAFile { path: PathBuf },

    /// The current process may not read the file
    #[error("File '{}' exists but cannot be read (permission denied).", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The file has zero bytes
    #[error("File '{}' is empty.", .path.display())]
    Empty { path: PathBuf },

    /// The file exceeds the configured size ceiling
    #[error("File '{}' is too large ({:.1}MB).", .path.display(), megabytes(.size))]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// Probing the file size failed after the earlier checks passed
    #[error("Cannot access file '{}' properties.", .path.display())]
    AccessError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn megabytes(bytes: &u64) -> f64 {
    *bytes as f64 / (1024.0 * 1024.0)
}

impl ValidationError {
    /// Create a not found error
    pub fn not_found(path: &Path) -> Self {
        Self::NotFound {
            path: path.to_path_buf(),
        }
    }

    /// Create a not-a-file error
    pub fn not_a_file(path: &Path) -> Self {
        Self::NotAFile {
            path: path.to_path_buf(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: &Path) -> Self {
        Self::PermissionDenied {
            path: path.to_path_buf(),
        }
    }

    /// Create an empty file error
    pub fn empty(path: &Path) -> Self {
        Self::Empty {
            path: path.to_path_buf(),
        }
    }

    /// Create a too large error
    pub fn too_large(path: &Path, size: u64, limit: u64) -> Self {
        Self::TooLarge {
            path: path.to_path_buf(),
            size,
            limit,
        }
    }

    /// Create an access error wrapping the failed size re-check
    pub fn access(path: &Path, source: std::io::Error) -> Self {
        Self::AccessError {
            path: path.to_path_buf(),
            source,
        }
    }
}

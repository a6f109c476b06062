//! I/O related error types for reading and writing files

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while opening or decoding an input file
#[derive(Error, Debug)]
pub enum ReadError {
    /// The OS refused to open the file for reading
    #[error("Permission denied when reading '{}'.", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other OS level failure
    #[error("OS error when reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the candidate encodings could decode the whole file
    #[error("Cannot read '{}' - unsupported file encoding.", .path.display())]
    UnsupportedEncoding { path: PathBuf },
}

impl ReadError {
    /// Map a standard I/O error raised while reading `path`
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
                source,
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Create an unsupported encoding error
    pub fn unsupported_encoding(path: &Path) -> Self {
        Self::UnsupportedEncoding {
            path: path.to_path_buf(),
        }
    }
}

/// Failure while persisting transformed text
#[derive(Error, Debug)]
pub enum WriteError {
    /// The OS refused to create or write the output file
    #[error("Permission denied when writing to '{}'", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Disk full, path too long, target already exists, and similar
    #[error("OS error when writing to '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    /// Map a standard I/O error raised while writing `path`
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
                source,
            },
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Underlying OS error kind
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            Self::PermissionDenied { source, .. } | Self::Io { source, .. } => source.kind(),
        }
    }
}

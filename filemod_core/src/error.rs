//! Error types for the filemod core library
//!
//! Each pipeline stage owns a dedicated error enum. The top-level [`Error`]
//! wraps them so callers that compose several stages can use `?` throughout.

use thiserror::Error;

pub mod io;
pub mod naming;
pub mod validation;

pub use self::io::{ReadError, WriteError};
pub use self::naming::NamingError;
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the filemod core library
///
/// Errors are categorized by the stage that produced them:
/// - Validation errors: pre-flight checks on the input path
/// - Read errors: opening or decoding the input file
/// - Naming errors: deriving the output path
/// - Write errors: persisting the transformed text
#[derive(Error, Debug)]
pub enum Error {
    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Read related errors
    #[error(transparent)]
    Read(#[from] ReadError),

    /// Output naming errors
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// Write related errors
    #[error(transparent)]
    Write(#[from] WriteError),
}

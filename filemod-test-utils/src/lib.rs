//! Test utilities for filemod
//!
//! [`TestFileBuilder`] materialises input fixtures inside a temporary
//! directory that is removed when the builder is dropped.

pub mod builders;

// Re-export commonly used types
pub use builders::TestFileBuilder;

//! Builders for test fixtures

pub mod test_data;

pub use test_data::TestFileBuilder;

//! Persisting transformed text

use crate::error::WriteError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Write `text` as UTF-8 to a new file at `path`
///
/// The file must not exist yet; losing a race against another writer
/// surfaces as [`WriteError::Io`] with kind `AlreadyExists`. A failed write
/// may leave partial bytes behind.
pub fn write(path: &Path, text: &str) -> Result<(), WriteError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| WriteError::from_io(path, source))?;

    file.write_all(text.as_bytes())
        .map_err(|source| WriteError::from_io(path, source))?;

    log::info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

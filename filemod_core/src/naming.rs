//! Output path derivation
//!
//! `notes.txt` becomes `notes_modified.txt`, then `notes_modified_1.txt`,
//! `notes_modified_2.txt`, ... until a name is free. Candidates stay in the
//! directory of the original.

use crate::error::NamingError;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix inserted between the stem and the extension
pub const MODIFIED_SUFFIX: &str = "_modified";

/// Build the candidate for `counter` (`None` is the unnumbered first choice)
pub fn candidate_path(original: &Path, counter: Option<u32>) -> PathBuf {
    let file_name = original.file_name().unwrap_or(original.as_os_str());
    let (stem, extension) = split_extension(file_name);

    let mut name = stem;
    name.push(MODIFIED_SUFFIX);
    if let Some(counter) = counter {
        name.push(format!("_{counter}"));
    }
    if let Some(extension) = extension {
        name.push(".");
        name.push(extension);
    }

    original.with_file_name(name)
}

/// First candidate that does not currently exist
///
/// Calling this twice without creating the result yields the same path.
pub fn next_available_path(original: &Path, max_attempts: u32) -> Result<PathBuf, NamingError> {
    let first = candidate_path(original, None);
    if !exists(&first) {
        return Ok(first);
    }

    for counter in 1..=max_attempts {
        let candidate = candidate_path(original, Some(counter));
        if !exists(&candidate) {
            return Ok(candidate);
        }
    }

    log::warn!(
        "Gave up naming output for {} after {max_attempts} candidates",
        original.display()
    );
    Err(NamingError::exhausted(original, max_attempts))
}

// Broken symlinks count as taken
fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Split a file name at its last dot, ignoring dots that lead the name
fn split_extension(file_name: &OsStr) -> (OsString, Option<&OsStr>) {
    let path = Path::new(file_name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(extension)) if !is_all_dots(stem) => (stem.to_os_string(), Some(extension)),
        _ => (file_name.to_os_string(), None),
    }
}

fn is_all_dots(stem: &OsStr) -> bool {
    stem.to_str().is_some_and(|s| s.chars().all(|c| c == '.'))
}

//! Pre-flight validation of input paths
//!
//! Checks run in a fixed order and stop at the first failure. Nothing is
//! cached: every call stats the filesystem again.

use crate::Limits;
use crate::error::ValidationError;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A path that passed every validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFile {
    path: PathBuf,
    size: u64,
}

impl ValidatedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size in bytes observed during validation
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl fmt::Display for ValidatedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File '{}' is valid and ready to read.",
            self.path.display()
        )
    }
}

/// Validate that `path` names a readable, non-empty regular file within `limits`
///
/// The file is never opened for reading content.
pub fn validate(path: &Path, limits: &Limits) -> Result<ValidatedFile, ValidationError> {
    validate_with(path, limits, |path| fs::metadata(path).map(|metadata| metadata.len()))
}

/// `validate` with the size re-check supplied by the caller
fn validate_with(
    path: &Path,
    limits: &Limits,
    current_size: impl Fn(&Path) -> io::Result<u64>,
) -> Result<ValidatedFile, ValidationError> {
    let metadata = fs::metadata(path).map_err(|_| ValidationError::not_found(path))?;

    if !metadata.is_file() {
        return Err(ValidationError::not_a_file(path));
    }

    if !is_readable(path) {
        return Err(ValidationError::permission_denied(path));
    }

    // Re-check: the file may have changed since the first stat
    let size = current_size(path).map_err(|source| ValidationError::access(path, source))?;

    if size == 0 {
        return Err(ValidationError::empty(path));
    }
    if size > limits.max_file_size {
        return Err(ValidationError::too_large(path, size, limits.max_file_size));
    }

    log::debug!("Validated {} ({size} bytes)", path.display());

    Ok(ValidatedFile {
        path: path.to_path_buf(),
        size,
    })
}

#[cfg(unix)]
fn is_readable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    match CString::new(path.as_os_str().as_bytes()) {
        // SAFETY: `c_path` is a valid NUL-terminated string for the duration of the call
        Ok(c_path) => unsafe { libc::access(c_path.as_ptr(), libc::R_OK) == 0 },
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_readable(path: &Path) -> bool {
    fs::File::open(path).is_ok()
}

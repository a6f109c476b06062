//! Reading validated files as text

use crate::encoding::{TextEncoding, decode_with_fallback};
use crate::error::ReadError;
use crate::validation::ValidatedFile;
use std::fs;
use std::path::{Path, PathBuf};

/// Decoded text of a validated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    path: PathBuf,
    text: String,
    encoding: TextEncoding,
}

impl Content {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Encoding that successfully decoded the file
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Number of characters (Unicode scalar values) in the text
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Name recorded in the transform header
    pub fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    /// Message describing the successful read
    pub fn summary(&self) -> String {
        if self.encoding.is_primary() {
            format!(
                "Successfully read '{}' ({} characters)",
                self.path.display(),
                self.char_count()
            )
        } else {
            format!(
                "Successfully read '{}' with {} encoding ({} characters)",
                self.path.display(),
                self.encoding,
                self.char_count()
            )
        }
    }
}

/// Read and decode a file that already passed validation
pub fn read(file: &ValidatedFile) -> Result<Content, ReadError> {
    let path = file.path();
    let bytes = fs::read(path).map_err(|source| ReadError::from_io(path, source))?;

    let (text, encoding) =
        decode_with_fallback(&bytes).ok_or_else(|| ReadError::unsupported_encoding(path))?;
    let text = normalize_newlines(text);

    if !encoding.is_primary() {
        log::debug!("Decoded {} using fallback {encoding}", path.display());
    }

    Ok(Content {
        path: path.to_path_buf(),
        text,
        encoding,
    })
}

/// Translate `\r\n` and lone `\r` line endings to `\n`
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

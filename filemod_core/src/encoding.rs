//! Text encodings tried when decoding an input file
//!
//! Decoding is a sequential trial over [`DECODE_ORDER`], not detection. An
//! attempt either decodes the whole buffer or fails outright.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Encodings the reader knows how to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextEncoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "latin-1")]
    Latin1,
    #[serde(rename = "cp1252")]
    Windows1252,
    #[serde(rename = "iso-8859-1")]
    Iso8859_1,
}

/// Primary encoding first, then the fallbacks in trial order
///
/// Latin-1 maps every byte to a character, so the entries after it only
/// matter if that mapping ever becomes strict.
pub const DECODE_ORDER: [TextEncoding; 4] = [
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
    TextEncoding::Iso8859_1,
];

impl TextEncoding {
    /// Short name used in user messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin-1",
            Self::Windows1252 => "cp1252",
            Self::Iso8859_1 => "iso-8859-1",
        }
    }

    pub fn is_primary(&self) -> bool {
        *self == Self::Utf8
    }

    /// Decode the entire buffer, or `None` if any byte sequence is invalid
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Self::Latin1 | Self::Iso8859_1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Windows1252 => encoding_rs::WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Try every encoding in [`DECODE_ORDER`] and return the first full decode
pub fn decode_with_fallback(bytes: &[u8]) -> Option<(String, TextEncoding)> {
    for encoding in DECODE_ORDER {
        match encoding.decode(bytes) {
            Some(text) => return Some((text, encoding)),
            None => log::debug!("{encoding} decode failed, trying next encoding"),
        }
    }
    None
}

//! Text encoding resolution for raw transcript bytes.
//!
//! Exports come from phones and desktop clients with different defaults, so
//! the bytes are decoded with the first encoding from an ordered candidate
//! list that accepts the whole input. There is no lossy fallback: either one
//! candidate decodes everything or the input is rejected.
//!
//! # Example
//!
//! ```rust
//! use chatlens::encoding::{Encoding, resolve};
//!
//! let (text, encoding) = resolve("caf\u{e9}".as_bytes(), Encoding::default_order())?;
//! assert_eq!(text, "café");
//! assert_eq!(encoding, Encoding::Utf8);
//!
//! // Latin-1 bytes are not valid UTF-8
//! let (text, encoding) = resolve(b"caf\xe9", Encoding::default_order())?;
//! assert_eq!(text, "café");
//! assert_eq!(encoding, Encoding::Windows1252);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ChatlensError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Windows-1252 code points for bytes `0x80..=0x9F`.
/// `None` marks the five bytes the code page leaves undefined.
const WINDOWS_1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

/// A candidate text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// Plain UTF-8. Declines input that starts with a byte-order mark so the
    /// BOM-aware variant can strip it.
    Utf8,
    /// UTF-8 with a leading byte-order mark, which is removed.
    Utf8Bom,
    /// Windows code page 1252. Rejects its five undefined bytes.
    Windows1252,
    /// ISO-8859-1. Every byte maps to the code point of the same value, so
    /// this candidate never fails.
    Latin1,
}

impl Encoding {
    /// The candidate order used when nothing else is configured.
    pub fn default_order() -> &'static [Encoding] {
        &[
            Encoding::Utf8,
            Encoding::Utf8Bom,
            Encoding::Windows1252,
            Encoding::Latin1,
        ]
    }

    /// Human-readable encoding name.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf8Bom => "UTF-8 (BOM)",
            Encoding::Windows1252 => "Windows-1252",
            Encoding::Latin1 => "ISO-8859-1",
        }
    }

    /// Decodes the whole input, or returns `None` if any byte is rejected.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => {
                if bytes.starts_with(UTF8_BOM) {
                    return None;
                }
                std::str::from_utf8(bytes).ok().map(str::to_owned)
            }
            Encoding::Utf8Bom => {
                let rest = bytes.strip_prefix(UTF8_BOM)?;
                std::str::from_utf8(rest).ok().map(str::to_owned)
            }
            Encoding::Windows1252 => bytes
                .iter()
                .map(|&b| match b {
                    0x80..=0x9F => WINDOWS_1252_HIGH[usize::from(b - 0x80)],
                    _ => Some(char::from(b)),
                })
                .collect(),
            Encoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes `bytes` with the first candidate that accepts all of them.
///
/// Returns the decoded text together with the encoding that produced it.
pub fn resolve(bytes: &[u8], candidates: &[Encoding]) -> Result<(String, Encoding), ChatlensError> {
    for &encoding in candidates {
        if let Some(text) = encoding.decode(bytes) {
            debug!(encoding = encoding.name(), bytes = bytes.len(), "decoded transcript");
            return Ok((text, encoding));
        }
        debug!(encoding = encoding.name(), "candidate encoding rejected input");
    }

    Err(ChatlensError::decode_failure(
        candidates.iter().map(|e| e.name()).collect(),
    ))
}

//! Per-message feature extraction.
//!
//! Every function here looks at a single message and nothing else, so
//! records can be processed in any order or in parallel.
//!
//! # Example
//!
//! ```rust
//! use chatlens::core::features::{clean_text, extract_glyphs, is_media, word_count};
//!
//! assert_eq!(clean_text("See https://x.io at 10, OK?"), "see  at  ok");
//! assert_eq!(extract_glyphs("gg 👍👍 🔥"), vec!['👍', '👍', '🔥']);
//! assert!(is_media("<Media omitted>"));
//! assert_eq!(word_count("a b  c"), 3);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::models::FeaturedRecord;
use crate::MessageRecord;

/// Attachment placeholder in English exports (matched case-sensitively).
pub const MEDIA_PLACEHOLDER_EN: &str = "<Media omitted>";
/// Attachment placeholder in Spanish exports (matched case-insensitively).
pub const MEDIA_PLACEHOLDER_ES: &str = "multimedia omitido";

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static URLS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(^|\s)http\S+").unwrap());
// Regex `\w` also admits marks and joiners, so the kept set is spelled out
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}\s]").unwrap());
static GLYPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Extended_Pictographic}\p{Emoji_Modifier}\p{Regional_Indicator}]$").unwrap()
});

/// Strips digits, links and everything that is not a letter, number or
/// whitespace, then lower-cases.
///
/// Underscores, variation selectors, keycap marks and zero-width joiners
/// are all removed.
///
/// Whitespace is left in place, so word boundaries survive.
pub fn clean_text(message: &str) -> String {
    let text = DIGITS.replace_all(message, "");
    let text = URLS.replace_all(&text, "${1}");
    let text = PUNCTUATION.replace_all(&text, "");
    text.to_lowercase()
}

/// Returns `true` if `c` is a pictographic (emoji-class) character.
///
/// Skin-tone modifiers and regional indicators count on their own, so a
/// flag contributes two glyphs.
///
/// Total: characters that are not positively known to be pictographic,
/// including emoji joiners and variation selectors, are `false`.
pub fn is_glyph(c: char) -> bool {
    let mut buf = [0u8; 4];
    GLYPH.is_match(c.encode_utf8(&mut buf))
}

/// Collects every glyph in `message`, in order, keeping duplicates.
pub fn extract_glyphs(message: &str) -> Vec<char> {
    message.chars().filter(|&c| is_glyph(c)).collect()
}

/// Message length in Unicode scalar values.
pub fn char_count(message: &str) -> usize {
    message.chars().count()
}

/// Number of whitespace-separated tokens.
pub fn word_count(message: &str) -> usize {
    message.split_whitespace().count()
}

/// Returns `true` if the message is an omitted-attachment placeholder.
pub fn is_media(message: &str) -> bool {
    message.contains(MEDIA_PLACEHOLDER_EN)
        || message.to_lowercase().contains(MEDIA_PLACEHOLDER_ES)
}

/// Attaches all derived features to a record.
pub fn extract(record: MessageRecord) -> FeaturedRecord {
    let (weekday, year, month) = FeaturedRecord::calendar(record.date);
    let text = record.message.as_str();

    FeaturedRecord {
        weekday,
        hour: record.hour(),
        year,
        month,
        clean_text: clean_text(text),
        glyphs: extract_glyphs(text),
        char_count: char_count(text),
        word_count: word_count(text),
        is_media: is_media(text),
        record,
    }
}

/// Extracts features for every record, preserving order.
///
/// With `parallel` set (and the `parallel` feature enabled) the work is
/// spread over the rayon thread pool.
pub fn extract_all(records: Vec<MessageRecord>, parallel: bool) -> Vec<FeaturedRecord> {
    if parallel {
        return extract_parallel(records);
    }
    records.into_iter().map(extract).collect()
}

#[cfg(feature = "parallel")]
fn extract_parallel(records: Vec<MessageRecord>) -> Vec<FeaturedRecord> {
    use rayon::prelude::*;

    records.into_par_iter().map(extract).collect()
}

#[cfg(not(feature = "parallel"))]
fn extract_parallel(records: Vec<MessageRecord>) -> Vec<FeaturedRecord> {
    records.into_iter().map(extract).collect()
}

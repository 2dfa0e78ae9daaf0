//! Unified error types for chatlens.
//!
//! The pipeline has exactly three fatal outcomes for a transcript
//! ([`ChatlensError::DecodeFailure`], [`ChatlensError::NoMessagesFound`] and
//! [`ChatlensError::NoValidRecords`]). Everything else that goes wrong with
//! individual lines is recovered locally and only shows up in the
//! [`PipelineCounts`](crate::pipeline::PipelineCounts).
//!
//! The remaining variants cover the I/O and serialization done around the
//! pipeline (reading a file, writing a report).

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::core::Corpus;
///
/// fn my_function() -> Result<Corpus> {
///     Ok(Corpus::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// None of the candidate encodings could decode the whole input.
    ///
    /// No partial decoding is attempted.
    #[error("Could not decode transcript (tried: {})", tried.join(", "))]
    DecodeFailure {
        /// Names of the encodings that were attempted, in order
        tried: Vec<&'static str>,
    },

    /// Not a single line matched any of the known message grammars.
    #[error("No chat messages found in {total_lines} lines")]
    NoMessagesFound {
        /// Number of lines in the transcript
        total_lines: usize,
    },

    /// Lines matched a grammar, but none carried a valid calendar date.
    #[error("{matched_lines} message lines matched, but none had a valid date")]
    NoValidRecords {
        /// Number of lines that matched a grammar
        matched_lines: usize,
    },

    /// Analyzer configuration is unusable.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration field
        field: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ChatlensError {
    /// Creates a decode failure listing the attempted encodings.
    pub fn decode_failure(tried: Vec<&'static str>) -> Self {
        ChatlensError::DecodeFailure { tried }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Returns `true` if no candidate encoding could decode the input.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, ChatlensError::DecodeFailure { .. })
    }

    /// Returns `true` if no line matched a message grammar.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatlensError::NoMessagesFound { .. })
    }

    /// Returns `true` if lines matched but every date was invalid.
    pub fn is_no_valid_records(&self) -> bool {
        matches!(self, ChatlensError::NoValidRecords { .. })
    }

    /// Returns `true` for any of the three conditions that reject a transcript.
    ///
    /// Front ends map all of these to a single "invalid or unsupported
    /// transcript" message.
    pub fn is_rejected_transcript(&self) -> bool {
        self.is_decode_failure() || self.is_no_messages() || self.is_no_valid_records()
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }
}

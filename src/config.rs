//! Configuration for the analysis pipeline.
//!
//! [`AnalyzerConfig`] is a plain serde struct with builder methods, so it can
//! be constructed in code or loaded from any serde format.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::AnalyzerConfig;
//! use chatlens::pipeline::Analyzer;
//!
//! let config = AnalyzerConfig::new()
//!     .with_top_words(25)
//!     .with_parallel(false);
//!
//! let analyzer = Analyzer::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::encoding::Encoding;
use crate::error::ChatlensError;

/// Settings for [`Analyzer`](crate::pipeline::Analyzer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Encodings to try, in order (default: UTF-8, UTF-8 with BOM,
    /// Windows-1252, ISO-8859-1)
    pub encodings: Vec<Encoding>,

    /// Length of the word frequency table (default: 15)
    pub top_words: usize,

    /// Length of the glyph frequency table (default: 10)
    pub top_glyphs: usize,

    /// Senders shown in reports (default: 10). The full ranking is always
    /// available in the distributions.
    pub top_senders: usize,

    /// Extract features on the rayon thread pool (default: true)
    pub parallel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            encodings: Encoding::default_order().to_vec(),
            top_words: 15,
            top_glyphs: 10,
            top_senders: 10,
            parallel: true,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the candidate encodings.
    #[must_use]
    pub fn with_encodings(mut self, encodings: impl Into<Vec<Encoding>>) -> Self {
        self.encodings = encodings.into();
        self
    }

    /// Sets the word table length.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the glyph table length.
    #[must_use]
    pub fn with_top_glyphs(mut self, n: usize) -> Self {
        self.top_glyphs = n;
        self
    }

    /// Sets how many senders reports show.
    #[must_use]
    pub fn with_top_senders(mut self, n: usize) -> Self {
        self.top_senders = n;
        self
    }

    /// Enables or disables parallel feature extraction.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Checks that the configuration can run a pipeline.
    pub fn validate(&self) -> Result<(), ChatlensError> {
        if self.encodings.is_empty() {
            return Err(ChatlensError::invalid_config(
                "encodings",
                "at least one candidate encoding is required",
            ));
        }
        Ok(())
    }
}

//! # Chatlens
//!
//! A Rust library for turning an exported WhatsApp-style chat transcript into
//! a per-message feature table and corpus-level statistics.
//!
//! ## Overview
//!
//! A transcript goes through five stages, each consuming only the output of
//! the previous one:
//!
//! 1. **Decode** the raw bytes with the first candidate encoding that accepts
//!    them ([`encoding`])
//! 2. **Classify** each line against four timestamp grammars ([`parsing`])
//! 3. **Normalize** matched lines into dated records ([`core::normalizer`])
//! 4. **Extract** derived features per message ([`core::features`])
//! 5. **Aggregate** the corpus into statistics and ranked tables
//!    ([`core::aggregate`])
//!
//! Lines that match no grammar (continuations, system notices) are dropped.
//! The transcript as a whole is rejected only when it cannot be decoded, when
//! no line matches, or when no matched line carries a valid date.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "\
//! 01/02/2023, 09:15 - Ana: Hola 😀
//! 01/02/2023, 09:16 - Luis: <Media omitted>
//! 02/02/2023, 21:00 - Ana: 123 abc";
//!
//!     let analysis = Analyzer::new().analyze_bytes(transcript.as_bytes())?;
//!
//!     assert_eq!(analysis.stats.total_messages, 3);
//!     assert_eq!(analysis.stats.top_sender, "Ana");
//!     assert_eq!(analysis.stats.period(), "01/02/2023 - 02/02/2023");
//!     assert_eq!(analysis.stats.total_glyphs, 1);
//!
//!     println!("{}", to_text(&analysis, 10));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`pipeline`] - [`Analyzer`], [`Analysis`] and [`PipelineCounts`](pipeline::PipelineCounts)
//! - [`encoding`] - [`Encoding`](encoding::Encoding) candidates and [`resolve`](encoding::resolve)
//! - [`parsing`] - [`Grammar`](parsing::Grammar) and [`LineClassifier`](parsing::LineClassifier)
//! - [`core`] - Normalization, features, aggregation and report writers
//! - [`config`] - [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod encoding;
pub mod error;
pub mod format;
pub mod message;
pub mod parsing;
pub mod pipeline;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::MessageRecord;
pub use pipeline::{Analysis, Analyzer, analyze_bytes};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::MessageRecord;

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Pipeline
    pub use crate::pipeline::{Analysis, Analyzer, PipelineCounts, analyze_bytes};

    // Configuration
    pub use crate::config::AnalyzerConfig;
    pub use crate::encoding::Encoding;

    // Stages
    pub use crate::parsing::{Grammar, LineClassifier};
    pub use crate::core::{
        AggregateStats, Corpus, Distributions, FeaturedRecord, FrequencyTable, extract,
        normalize,
    };

    // Output
    pub use crate::core::output::{to_text, write_text};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}

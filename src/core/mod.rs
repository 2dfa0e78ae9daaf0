//! Core processing logic for chatlens.
//!
//! This module contains:
//! - [`normalizer`] - Classified lines to typed records
//! - [`features`] - Per-message derived features
//! - [`models`] - Featured records and the corpus
//! - [`aggregate`] - Statistics and frequency tables
//! - [`output`] - Report writers (text, JSON, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{AggregateStats, Corpus, extract, MessageRecord};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
//! let corpus: Corpus = vec![
//!     MessageRecord::new(date, "Ana", "hi"),
//!     MessageRecord::new(date, "Bob", "hello 👍"),
//! ]
//! .into_iter()
//! .map(extract)
//! .collect();
//!
//! let stats = AggregateStats::compute(&corpus).unwrap();
//! assert_eq!(stats.total_senders, 2);
//! assert_eq!(stats.total_glyphs, 1);
//! ```

pub mod aggregate;
pub mod features;
pub mod models;
pub mod normalizer;
pub mod output;

pub use aggregate::{AggregateStats, Distributions, FrequencyTable, aggregate};
pub use features::{extract, extract_all};
pub use models::{Corpus, FeaturedRecord};
pub use normalizer::{normalize, normalize_all};

// Re-export MessageRecord from the crate root
pub use crate::MessageRecord;

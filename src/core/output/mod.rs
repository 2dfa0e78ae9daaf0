//! Report writers.
//!
//! This module renders an [`Analysis`](crate::pipeline::Analysis) for people
//! or downstream tools:
//! - [`to_text`] - aligned plain-text report of statistics and tables
//! - [`write_json`] / [`to_json`] - statistics, tables and counts as one JSON object - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - the featured corpus, one row per message - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{to_csv, to_json, to_text};
//! use chatlens::pipeline::Analyzer;
//!
//! let analysis = Analyzer::new().analyze_str("1/2/23, 9:00 - Ana: hi 👋")?;
//!
//! let report = to_text(&analysis, 10);
//! assert!(report.contains("Ana"));
//!
//! let json = to_json(&analysis, 10)?;
//! assert!(json.contains("\"total_mensajes\": 1"));
//!
//! let csv = to_csv(&analysis.corpus)?;
//! assert!(csv.starts_with("date;time;sender"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};

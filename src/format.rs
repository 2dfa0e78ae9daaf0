//! Report format selection.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::pipeline::Analyzer;
//!
//! let analysis = Analyzer::new().analyze_str("1/2/23, 9:00 - Ana: hi")?;
//! let json = to_format_string(&analysis, OutputFormat::Json, 10)?;
//!
//! // Or detect the format from an output file name
//! let format = OutputFormat::from_path("report.csv")?;
//! assert_eq!(format, OutputFormat::Csv);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;
use crate::pipeline::Analysis;

/// Output format for analysis reports.
///
/// - [`Text`](OutputFormat::Text) - human-readable summary and tables
/// - [`Json`](OutputFormat::Json) - statistics, tables and counts for programs
/// - [`Csv`](OutputFormat::Csv) - one row per featured message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain-text report (default)
    #[default]
    Text,

    /// JSON report
    Json,

    /// Featured corpus as semicolon-delimited CSV
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatlensError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        ext.parse()
            .map_err(|message| ChatlensError::invalid_config("format", message))
    }

    /// Name of the cargo feature this format needs, if any.
    fn required_feature(self) -> Option<&'static str> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Json => Some("json-output"),
            OutputFormat::Csv => Some("csv-output"),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn missing_feature(format: OutputFormat) -> ChatlensError {
    ChatlensError::invalid_config(
        "format",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.required_feature().unwrap_or_default()
        ),
    )
}

/// Writes the report to a file in the specified format.
///
/// `top_senders` limits the sender table in text and JSON reports.
#[allow(unused_variables)]
pub fn write_to_format(
    analysis: &Analysis,
    path: &Path,
    format: OutputFormat,
    top_senders: usize,
) -> Result<(), ChatlensError> {
    match format {
        OutputFormat::Text => crate::core::output::write_text(analysis, path, top_senders),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(analysis, path, top_senders),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(&analysis.corpus, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders the report as a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    analysis: &Analysis,
    format: OutputFormat,
    top_senders: usize,
) -> Result<String, ChatlensError> {
    match format {
        OutputFormat::Text => Ok(crate::core::output::to_text(analysis, top_senders)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(analysis, top_senders),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(&analysis.corpus),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

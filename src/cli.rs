//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - Report format options

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::AnalyzerConfig;

/// Analyze an exported chat transcript: who talks, when, and with which
/// words and emoji.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --format json -o report.json
    chatlens chat.txt -f csv -o messages.csv
    chatlens chat.txt --top-words 30 --top-glyphs 5 -v")]
pub struct Args {
    /// Path to the exported transcript
    pub input: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Number of words in the word table
    #[arg(long, value_name = "N", default_value_t = 15)]
    pub top_words: usize,

    /// Number of emoji in the emoji table
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_glyphs: usize,

    /// Number of senders shown in the sender table
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_senders: usize,

    /// Extract features on a single thread
    #[arg(long)]
    pub no_parallel: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the analyzer configuration these arguments describe.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::new()
            .with_top_words(self.top_words)
            .with_top_glyphs(self.top_glyphs)
            .with_top_senders(self.top_senders)
            .with_parallel(!self.no_parallel)
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ReportFormat {
    /// Plain-text summary and tables (default)
    #[default]
    Text,

    /// Statistics, tables and counts as JSON
    Json,

    /// One CSV row per message with its derived features
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<ReportFormat> for crate::format::OutputFormat {
    fn from(format: ReportFormat) -> crate::format::OutputFormat {
        match format {
            ReportFormat::Text => crate::format::OutputFormat::Text,
            ReportFormat::Json => crate::format::OutputFormat::Json,
            ReportFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}

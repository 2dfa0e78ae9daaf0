//! The full analysis pipeline: raw bytes to corpus and statistics.
//!
//! ```text
//! bytes -> decoded text -> classified lines -> records -> featured records -> aggregates
//! ```
//!
//! Each stage only consumes the output of the previous one. Any stage failure
//! ends the run for that transcript; lines dropped along the way are only
//! visible in [`PipelineCounts`].
//!
//! # Example
//!
//! ```rust
//! use chatlens::pipeline::Analyzer;
//!
//! let transcript = "1/2/23, 9:00 - Ana: hi\n1/2/23, 9:05 - Bob: hello 👍\nnot a message line";
//! let analysis = Analyzer::new().analyze_bytes(transcript.as_bytes())?;
//!
//! assert_eq!(analysis.corpus.len(), 2);
//! assert_eq!(analysis.stats.total_messages, 2);
//! assert_eq!(analysis.counts.total_lines, 3);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::core::{AggregateStats, Corpus, Distributions, aggregate, extract_all, normalize_all};
use crate::encoding::{self, Encoding};
use crate::error::ChatlensError;
use crate::parsing::LineClassifier;

/// How many lines survived each stage.
///
/// Always `retained_records <= matched_lines <= total_lines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineCounts {
    /// Physical lines in the decoded transcript.
    pub total_lines: usize,
    /// Lines that matched a grammar.
    pub matched_lines: usize,
    /// Records that also had a valid date.
    pub retained_records: usize,
    /// Encoding the bytes were decoded with; `None` for text input.
    pub encoding: Option<Encoding>,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub corpus: Corpus,
    pub stats: AggregateStats,
    pub distributions: Distributions,
    pub counts: PipelineCounts,
}

/// Runs transcripts through the pipeline.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
    classifier: LineClassifier,
}

impl Analyzer {
    /// Creates an analyzer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            classifier: LineClassifier::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes a transcript held in memory as raw bytes.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<Analysis, ChatlensError> {
        self.config.validate()?;
        let (text, encoding) = encoding::resolve(bytes, &self.config.encodings)?;
        self.run(&text, Some(encoding))
    }

    /// Analyzes text that is already decoded.
    pub fn analyze_str(&self, text: &str) -> Result<Analysis, ChatlensError> {
        self.config.validate()?;
        self.run(text, None)
    }

    /// Reads a whole file and analyzes it.
    pub fn analyze_path(&self, path: &Path) -> Result<Analysis, ChatlensError> {
        let bytes = fs::read(path)?;
        self.analyze_bytes(&bytes)
    }

    fn run(&self, text: &str, encoding: Option<Encoding>) -> Result<Analysis, ChatlensError> {
        let classification = self.classifier.classify(text)?;
        let records = normalize_all(&classification.lines)?;

        let counts = PipelineCounts {
            total_lines: classification.total_lines,
            matched_lines: classification.matched_lines(),
            retained_records: records.len(),
            encoding,
        };

        let corpus = Corpus::new(extract_all(records, self.config.parallel));
        let (stats, distributions) =
            aggregate(&corpus, &self.config).ok_or(ChatlensError::NoValidRecords {
                matched_lines: counts.matched_lines,
            })?;

        info!(
            total_lines = counts.total_lines,
            matched_lines = counts.matched_lines,
            retained_records = counts.retained_records,
            encoding = encoding.map_or("n/a", Encoding::name),
            "transcript analyzed"
        );

        Ok(Analysis {
            corpus,
            stats,
            distributions,
            counts,
        })
    }
}

/// Analyzes `bytes` with the default configuration.
pub fn analyze_bytes(bytes: &[u8]) -> Result<Analysis, ChatlensError> {
    Analyzer::new().analyze_bytes(bytes)
}

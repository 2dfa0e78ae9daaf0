//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::aggregate::{AggregateStats, Distributions};
use crate::error::ChatlensError;
use crate::pipeline::{Analysis, PipelineCounts};

/// Report layout: statistics, tables and stage counts. The corpus itself is
/// left out; use the CSV writer for per-message rows.
#[derive(Serialize)]
struct JsonReport<'a> {
    stats: &'a AggregateStats,
    distributions: Distributions,
    counts: &'a PipelineCounts,
}

impl<'a> JsonReport<'a> {
    fn from_analysis(analysis: &'a Analysis, top_senders: usize) -> Self {
        let mut distributions = analysis.distributions.clone();
        distributions.senders.truncate(top_senders);
        Self {
            stats: &analysis.stats,
            distributions,
            counts: &analysis.counts,
        }
    }
}

/// Writes the report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "stats": {"total_mensajes": 2, "total_usuarios": 2, ...},
///   "distributions": {"senders": [["Ana", 1], ...], ...},
///   "counts": {"total_lines": 3, "matched_lines": 2, ...}
/// }
/// ```
pub fn write_json(
    analysis: &Analysis,
    output_path: &Path,
    top_senders: usize,
) -> Result<(), ChatlensError> {
    let json = to_json(analysis, top_senders)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
///
/// Same format as [`write_json`].
pub fn to_json(analysis: &Analysis, top_senders: usize) -> Result<String, ChatlensError> {
    Ok(serde_json::to_string_pretty(&JsonReport::from_analysis(
        analysis,
        top_senders,
    ))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Analyzer;
    use tempfile::NamedTempFile;

    fn analysis() -> Analysis {
        Analyzer::new()
            .analyze_str("1/2/23, 9:00 - Ana: hi\n1/2/23, 9:05 - Bob: hello 👍\n2/2/23, 9:06 - Cy: yo")
            .unwrap()
    }

    #[test]
    fn test_to_json_structure() {
        let json = to_json(&analysis(), 10).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["stats"]["total_mensajes"], 3);
        assert_eq!(value["stats"]["usuario_activo"], "Ana");
        assert_eq!(value["counts"]["matched_lines"], 3);
        assert_eq!(value["counts"]["encoding"], serde_json::Value::Null);
        assert_eq!(value["distributions"]["glyphs"][0][0], "👍");
        assert_eq!(value["distributions"]["daily"][0][0], "2023-02-01");
        assert_eq!(value["distributions"]["weekdays"][0][0], "Monday");
        assert!(value.get("corpus").is_none());
    }

    #[test]
    fn test_top_senders_truncation() {
        let json = to_json(&analysis(), 1).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["distributions"]["senders"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_write_json_file() {
        let temp_file = NamedTempFile::new().unwrap();
        write_json(&analysis(), temp_file.path(), 10).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("\"periodo\": \"01/02/2023 - 02/02/2023\""));
    }
}

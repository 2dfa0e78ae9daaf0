//! CSV output writer for the featured corpus.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::core::models::{Corpus, FeaturedRecord};
use crate::error::ChatlensError;

const HEADER: [&str; 12] = [
    "date",
    "time",
    "sender",
    "message",
    "weekday",
    "hour",
    "year",
    "month",
    "char_count",
    "word_count",
    "glyphs",
    "is_media",
];

/// Writes the corpus to a CSV file with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `date`, `time`, `sender`, `message`, `weekday`, `hour`,
///   `year`, `month`, `char_count`, `word_count`, `glyphs`, `is_media`
/// - `time` is empty for records without a parsed time
/// - `glyphs` is the glyph sequence concatenated, e.g. `👍👍🔥`
pub fn write_csv(corpus: &Corpus, output_path: &Path) -> Result<(), ChatlensError> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_rows(&mut writer, corpus)?;
    writer.flush()?;
    Ok(())
}

/// Converts the corpus to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(corpus: &Corpus) -> Result<String, ChatlensError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_rows(&mut writer, corpus)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatlensError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ChatlensError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn write_rows<W: io::Write>(writer: &mut csv::Writer<W>, corpus: &Corpus) -> Result<(), ChatlensError> {
    writer.write_record(HEADER)?;
    for record in corpus {
        writer.write_record(build_record(record))?;
    }
    Ok(())
}

fn build_record(record: &FeaturedRecord) -> [String; 12] {
    [
        record.date().format("%Y-%m-%d").to_string(),
        record
            .record
            .time
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default(),
        record.sender().to_string(),
        record.message().to_string(),
        record.weekday_name().to_string(),
        record.hour.to_string(),
        record.year.to_string(),
        record.month.to_string(),
        record.char_count.to_string(),
        record.word_count.to_string(),
        record.glyphs.iter().collect(),
        record.is_media.to_string(),
    ]
}

//! Turns classified lines into typed [`MessageRecord`]s.
//!
//! Dates are read day-first with a 2- or 4-digit year. A line whose date
//! does not parse is dropped; a line whose time does not parse is kept with
//! no time of day.

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::MessageRecord;
use crate::error::ChatlensError;
use crate::parsing::ClassifiedLine;

const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

/// Parses a day-first `D/M/YY` or `D/M/YYYY` date.
///
/// Two-digit years use chrono's `%y` century window: `00`..=`69` land in
/// the 2000s and `70`..=`99` in the 1900s.
///
/// ```rust
/// use chatlens::core::normalizer::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("1/2/23"), NaiveDate::from_ymd_opt(2023, 2, 1));
/// assert_eq!(parse_date("31/12/1999"), NaiveDate::from_ymd_opt(1999, 12, 31));
/// assert_eq!(parse_date("1/13/23"), None);
/// ```
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let year = date_str.rsplit('/').next()?;
    let format = match year.len() {
        2 => "%d/%m/%y",
        4 => "%d/%m/%Y",
        _ => return None,
    };
    NaiveDate::parse_from_str(date_str, format).ok()
}

/// Parses a 24-hour `H:MM` or `H:MM:SS` time.
pub fn parse_time(time_str: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time_str, format).ok())
}

/// Normalizes one classified line, or `None` if its date is invalid.
pub fn normalize(line: &ClassifiedLine<'_>) -> Option<MessageRecord> {
    let date = parse_date(line.date)?;
    let mut record = MessageRecord::new(date, line.sender, line.message);
    record.time = parse_time(line.time);
    Some(record)
}

/// Normalizes every classified line, dropping the ones with invalid dates.
///
/// Fails with [`ChatlensError::NoValidRecords`] if nothing survives.
pub fn normalize_all(lines: &[ClassifiedLine<'_>]) -> Result<Vec<MessageRecord>, ChatlensError> {
    let records: Vec<MessageRecord> = lines.iter().filter_map(normalize).collect();

    debug!(
        matched_lines = lines.len(),
        retained = records.len(),
        untimed = records.iter().filter(|r| r.time.is_none()).count(),
        "normalized records"
    );

    if records.is_empty() {
        return Err(ChatlensError::NoValidRecords {
            matched_lines: lines.len(),
        });
    }

    Ok(records)
}

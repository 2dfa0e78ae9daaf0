//! Featured records and the corpus they form.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use serde::{Serialize, Serializer};

use crate::MessageRecord;

/// Weekdays in the order distribution tables use.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name, e.g. `"Monday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

fn serialize_weekday<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*day))
}

/// A [`MessageRecord`] with its derived features attached.
///
/// Every field past `record` is a pure function of `record`; see
/// [`features::extract`](crate::core::features::extract).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedRecord {
    #[serde(flatten)]
    pub record: MessageRecord,
    #[serde(serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    /// Hour of day, 0 when the record has no time.
    pub hour: u32,
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
    /// Lower-cased text without digits, links or punctuation. Only used for
    /// word statistics.
    pub clean_text: String,
    /// Emoji-class characters in order of appearance, duplicates kept.
    pub glyphs: Vec<char>,
    pub char_count: usize,
    pub word_count: usize,
    /// Whether the message is an omitted-attachment placeholder.
    pub is_media: bool,
}

impl FeaturedRecord {
    pub fn date(&self) -> NaiveDate {
        self.record.date
    }

    pub fn sender(&self) -> &str {
        &self.record.sender
    }

    pub fn message(&self) -> &str {
        &self.record.message
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Calendar fields derived from the record's date.
    pub(crate) fn calendar(date: NaiveDate) -> (Weekday, i32, u32) {
        (date.weekday(), date.year(), date.month())
    }
}

/// All featured records of one transcript, in transcript order.
///
/// A corpus is built once per analysis and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    records: Vec<FeaturedRecord>,
}

impl Corpus {
    pub fn new(records: Vec<FeaturedRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FeaturedRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeaturedRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<FeaturedRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a FeaturedRecord;
    type IntoIter = std::slice::Iter<'a, FeaturedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<FeaturedRecord> for Corpus {
    fn from_iter<I: IntoIterator<Item = FeaturedRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_order_starts_monday() {
        let names: Vec<_> = WEEK.iter().map(|&d| weekday_name(d)).collect();
        assert_eq!(names[0], "Monday");
        assert_eq!(names[6], "Sunday");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "");
        assert_eq!(month_name(0), "");
    }

    #[test]
    fn test_calendar_fields() {
        // 1 February 2023 was a Wednesday
        let date = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
        assert_eq!(FeaturedRecord::calendar(date), (Weekday::Wed, 2023, 2));
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::default();
        assert!(corpus.is_empty());
        assert_eq!(corpus.iter().count(), 0);
    }
}

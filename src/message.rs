//! Typed message record produced by the normalizer.
//!
//! A [`MessageRecord`] is what a classified transcript line becomes once its
//! date and time have been parsed. The date is always valid (lines with an
//! unparseable date never become records); the time may be missing.
//!
//! # Examples
//!
//! ```
//! use chatlens::MessageRecord;
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let date = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
//! let msg = MessageRecord::new(date, "Ana", "hi")
//!     .with_time(NaiveTime::from_hms_opt(9, 5, 0).unwrap());
//!
//! assert_eq!(msg.sender(), "Ana");
//! assert_eq!(msg.hour(), 9);
//!
//! // Without a time the hour defaults to midnight
//! let untimed = MessageRecord::new(date, "Bob", "");
//! assert_eq!(untimed.hour(), 0);
//! ```

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// One chat message with a parsed calendar date.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `date` | `NaiveDate` | Day the message was sent |
/// | `time` | `Option<NaiveTime>` | Time of day, if it parsed |
/// | `sender` | `String` | Sender as written in the export |
/// | `message` | `String` | Raw message text, possibly empty |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Day the message was sent.
    pub date: NaiveDate,

    /// Time of day the message was sent.
    ///
    /// `None` when the export's time field did not parse as a 24-hour time.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub time: Option<NaiveTime>,

    /// Sender name or phone number, exactly as exported.
    pub sender: String,

    /// Raw message text.
    pub message: String,
}

impl MessageRecord {
    /// Creates a record without a time of day.
    pub fn new(date: NaiveDate, sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            date,
            time: None,
            sender: sender.into(),
            message: message.into(),
        }
    }

    /// Sets the time of day.
    #[must_use]
    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Returns the sender.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the raw message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Hour of day (0-23). Records without a time report hour 0.
    pub fn hour(&self) -> u32 {
        self.time.map_or(0, |t| t.hour())
    }

    /// Returns `true` if the message text is empty.
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

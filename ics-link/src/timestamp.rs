//! Date and date-time parsing for event boundaries.
//!
//! Naive inputs carry no offset and are read as UTC, the clock of the
//! function runtime.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use shared::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M %p",
    "%Y-%m-%d %I:%M:%S %p",
];

/// Start or end of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    /// All-day: a calendar date without time of day
    Date(NaiveDate),
    /// Timed: an instant
    DateTime(DateTime<Utc>),
}

impl EventTime {
    /// Parse `text` as a date when `all_day`, otherwise as a date-time.
    pub fn parse(text: &str, all_day: bool) -> Result<Self> {
        if all_day {
            parse_date(text).map(EventTime::Date)
        } else {
            parse_date_time(text).map(EventTime::DateTime)
        }
    }
}

/// Parse a calendar date. A full date-time is accepted and truncated to its date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .or_else(|_| parse_date_time(text).map(|dt| dt.date_naive()))
}

/// Parse an instant. A bare date is read as midnight.
pub fn parse_date_time(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Ok(naive.and_utc());
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::InvalidDate(text.to_string()))
}

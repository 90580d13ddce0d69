//! Recurrence resolution from the `repeats` and `customRepeatFrequency` parameters.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use shared::{Error, Result};

/// RFC 5545 FREQ values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            Frequency::Secondly => "SECONDLY",
            Frequency::Minutely => "MINUTELY",
            Frequency::Hourly => "HOURLY",
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }
}

impl FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SECONDLY" => Ok(Frequency::Secondly),
            "MINUTELY" => Ok(Frequency::Minutely),
            "HOURLY" => Ok(Frequency::Hourly),
            "DAILY" => Ok(Frequency::Daily),
            "WEEKLY" => Ok(Frequency::Weekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            "YEARLY" => Ok(Frequency::Yearly),
            _ => Err(Error::InvalidFrequency(s.to_string())),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ics_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    pub interval: Option<NonZeroU64>,
}

impl RecurrenceRule {
    /// Render the RRULE property value.
    pub fn to_rrule(&self) -> String {
        match self.interval {
            Some(interval) => format!("FREQ={};INTERVAL={}", self.frequency, interval),
            None => format!("FREQ={}", self.frequency),
        }
    }
}

/// Resolve the event's recurrence.
///
/// A non-empty `custom_frequency` (`"<interval>-<FREQ>"`) wins over `repeats`.
/// An interval that is not a positive number is dropped rather than rejected,
/// and a missing frequency means the event does not repeat. A frequency token
/// that is present but unknown is an error.
pub fn parse_frequency(
    repeats: Option<&str>,
    custom_frequency: Option<&str>,
) -> Result<Option<RecurrenceRule>> {
    let (freq, interval) = match custom_frequency.filter(|c| !c.is_empty()) {
        Some(custom) => {
            let mut parts = custom.split('-');
            let interval = parts.next().and_then(parse_leading_int);
            (parts.next(), interval)
        }
        None => (repeats, None),
    };

    match freq.filter(|f| !f.is_empty()) {
        Some(freq) => Ok(Some(RecurrenceRule {
            frequency: freq.parse()?,
            interval,
        })),
        None => Ok(None),
    }
}

/// Leading base-10 digits of `text`, ignoring leading whitespace.
///
/// Values beyond `u64::MAX` saturate so an oversized interval stays oversized.
fn parse_leading_int(text: &str) -> Option<NonZeroU64> {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let digits = &text[..end];
    if digits.is_empty() {
        return None;
    }
    match digits.parse::<u64>() {
        Ok(n) => NonZeroU64::new(n),
        Err(_) => Some(NonZeroU64::MAX),
    }
}

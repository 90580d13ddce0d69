//! The single event described by a request.

use shared::Result;

use crate::params::EventParams;
use crate::recurrence::{parse_frequency, RecurrenceRule};
use crate::timestamp::EventTime;
use crate::venue::Venue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub start: EventTime,
    pub end: EventTime,
    pub all_day: bool,
    pub summary: String,
    pub venue: Venue,
    pub description: String,
    pub recurrence: Option<RecurrenceRule>,
}

impl CalendarEvent {
    pub fn from_params(params: EventParams) -> Result<Self> {
        let recurrence = parse_frequency(
            params.repeats.as_deref(),
            params.custom_repeat_frequency.as_deref(),
        )?;

        Ok(Self {
            start: EventTime::parse(&params.start, params.all_day)?,
            end: EventTime::parse(&params.end, params.all_day)?,
            all_day: params.all_day,
            summary: params.title,
            venue: Venue::from_where(&params.venue),
            description: params.description,
            recurrence,
        })
    }
}

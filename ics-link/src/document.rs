//! Calendar document builder backed by the `icalendar` crate.

use chrono::Utc;
use icalendar::{Calendar, Component, EventLike, Property};

use crate::event::CalendarEvent;
use crate::timestamp::EventTime;

/// A calendar under construction. Each step takes the builder by value.
pub struct CalendarDocument {
    calendar: Calendar,
}

impl CalendarDocument {
    pub fn new(name: &str) -> Self {
        let mut calendar = Calendar::new();
        calendar.name(name);
        calendar.append_property(Property::new("METHOD", "REQUEST"));
        Self { calendar }
    }

    pub fn add_event(mut self, event: &CalendarEvent, uid: &str) -> Self {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(uid);
        let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        ics_event.add_property("DTSTAMP", &dtstamp);
        ics_event.summary(&event.summary);

        set_time(&mut ics_event, true, &event.start);
        set_time(&mut ics_event, false, &event.end);

        if !event.description.is_empty() {
            ics_event.description(&event.description);
        }

        // An empty location is left out entirely
        if let Some(url) = event.venue.url() {
            ics_event.add_property("URL", url);
        } else if let Some(location) = event.venue.location().filter(|l| !l.is_empty()) {
            ics_event.location(location);
        }

        if let Some(rule) = &event.recurrence {
            ics_event.add_property("RRULE", &rule.to_rrule());
        }

        self.calendar.push(ics_event.done());
        self
    }

    pub fn serialize(mut self) -> String {
        self.calendar.done().to_string()
    }
}

fn set_time(ics_event: &mut icalendar::Event, is_start: bool, time: &EventTime) {
    match (is_start, *time) {
        (true, EventTime::Date(date)) => ics_event.starts(date),
        (true, EventTime::DateTime(dt)) => ics_event.starts(dt),
        (false, EventTime::Date(date)) => ics_event.ends(date),
        (false, EventTime::DateTime(dt)) => ics_event.ends(dt),
    };
}

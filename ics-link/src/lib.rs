//! Calendar link function.
//!
//! Turns the query string of a link such as
//! `/?start=2024-06-10T14:00&end=2024-06-10T15:00&title=Sync` into a
//! downloadable one-event iCalendar file.

pub mod document;
pub mod event;
pub mod handler;
pub mod params;
pub mod recurrence;
pub mod timestamp;
pub mod venue;

pub use document::CalendarDocument;
pub use event::CalendarEvent;
pub use handler::handle;
pub use params::EventParams;

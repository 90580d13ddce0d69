//! Request handler: query string in, calendar file out.

use lambda_http::{Body, Error, Request, RequestExt, Response};
use shared::http::{calendar_response, error_response};
use shared::Config;
use tracing::{info, warn};
use uuid::Uuid;

use crate::document::CalendarDocument;
use crate::event::CalendarEvent;
use crate::params::EventParams;

/// Handle one request.
///
/// Only the root path is served. Problems with the request are answered with
/// a plain-text message; the returned `Err` is reserved for responses that
/// cannot be built at all.
pub fn handle(config: &Config, event: &Request) -> Result<Response<Body>, Error> {
    let path = event.uri().path();
    if !path.is_empty() && path != "/" {
        info!(path, "Path not handled");
        return Ok(error_response(&shared::Error::NotHandled, config.strict_status)?);
    }

    let query = event.query_string_parameters();
    let lookup = |key: &str| query.first(key).map(str::to_string);

    match build_calendar(config, lookup) {
        Ok((uid, title, document)) => {
            info!(uid = %uid, title = %title, "Generated calendar file");
            Ok(calendar_response(&title, document)?)
        }
        Err(e) => {
            warn!(error = %e, "Rejected calendar request");
            Ok(error_response(&e, config.strict_status)?)
        }
    }
}

/// Build the serialized calendar, returning it with the event UID and title.
fn build_calendar<F>(config: &Config, lookup: F) -> shared::Result<(Uuid, String, String)>
where
    F: Fn(&str) -> Option<String>,
{
    let params = EventParams::from_query(config.contract, lookup)?;
    let event = CalendarEvent::from_params(params)?;

    let uid = Uuid::new_v4();
    let document = CalendarDocument::new(&config.calendar_name)
        .add_event(&event, &uid.to_string())
        .serialize();

    Ok((uid, event.summary, document))
}

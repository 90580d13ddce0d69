//! HTTP helpers for the calendar link function.

use lambda_http::{http, Body, Response};

use crate::error::Error;

pub const TEXT_CONTENT_TYPE: &str = "text/plain;charset=UTF-8";
pub const CALENDAR_CONTENT_TYPE: &str = "text/calendar;charset=UTF-8";

/// Create a plain-text response with the given status code.
pub fn text_response(status: u16, body: impl Into<String>) -> Result<Response<Body>, http::Error> {
    Response::builder()
        .status(status)
        .header("content-type", TEXT_CONTENT_TYPE)
        .body(Body::from(body.into()))
}

/// Create a response for an error.
///
/// The body is the error's message. Unless `strict` is set the status stays
/// 200, which is what existing links built against this endpoint expect.
pub fn error_response(error: &Error, strict: bool) -> Result<Response<Body>, http::Error> {
    let status = if strict { error.status_code() } else { 200 };
    text_response(status, error.to_string())
}

/// Create a calendar file download response.
///
/// `filename_stem` is used verbatim; `.ics` is appended.
pub fn calendar_response(
    filename_stem: &str,
    document: String,
) -> Result<Response<Body>, http::Error> {
    Response::builder()
        .status(200)
        .header("content-type", CALENDAR_CONTENT_TYPE)
        .header(
            "content-disposition",
            format!("attachment; filename=\"{}.ics\"", filename_stem),
        )
        .body(Body::from(document))
}

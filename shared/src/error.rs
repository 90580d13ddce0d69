//! Error types for the calendar link function.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a request into a calendar file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required query parameter was absent or empty
    #[error("Missing required parameters")]
    MissingParameters,

    /// The request path is not served by this function
    #[error("Not yet handled")]
    NotHandled,

    /// A date or date-time parameter could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A recurrence frequency token is not a known frequency
    #[error("Invalid repeat frequency: {0}")]
    InvalidFrequency(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::MissingParameters | Error::InvalidDate(_) | Error::InvalidFrequency(_) => 400,
            Error::NotHandled => 404,
            _ => 500,
        }
    }
}

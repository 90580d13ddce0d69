//! Shared library for the calendar link function.
//!
//! Holds the error type and configuration used by the function, plus its HTTP response builders.

pub mod config;
pub mod error;
pub mod http;

pub use config::{Config, RequestContract};
pub use error::{Error, Result};

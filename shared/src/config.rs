//! Configuration management for the calendar link function.

use std::env;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Which set of query parameters describes the event's start and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestContract {
    /// `start`, `end` and an explicit `allDay=true` flag
    #[default]
    Combined,
    /// `startDate`, `endDate`, `startTime`, `endTime`; all-day when a time is missing
    Split,
}

impl FromStr for RequestContract {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "combined" => Ok(RequestContract::Combined),
            "split" => Ok(RequestContract::Split),
            other => Err(Error::Config(format!(
                "REQUEST_CONTRACT must be 'combined' or 'split', got '{}'",
                other
            ))),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name written to the generated calendar (X-WR-CALNAME)
    pub calendar_name: String,
    /// Query parameter contract in force
    pub contract: RequestContract,
    /// Answer errors with their 4xx status instead of 200
    pub strict_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calendar_name: "calendar".to_string(),
            contract: RequestContract::Combined,
            strict_status: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let contract = match lookup("REQUEST_CONTRACT") {
            Some(value) => value.parse()?,
            None => defaults.contract,
        };

        let strict_status = match lookup("STRICT_STATUS") {
            Some(value) => parse_flag("STRICT_STATUS", &value)?,
            None => defaults.strict_status,
        };

        Ok(Self {
            calendar_name: lookup("CALENDAR_NAME")
                .filter(|name| !name.is_empty())
                .unwrap_or(defaults.calendar_name),
            contract,
            strict_status,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(Error::Config(format!("{} must be a boolean, got '{}'", key, other))),
    }
}

//! Where an event takes place: a link or a free-text location.

use url::Url;

/// Returns true when `text` parses as an absolute URL.
pub fn is_url(text: &str) -> bool {
    Url::parse(text).is_ok()
}

/// The `where` parameter, routed to either the URL or the LOCATION property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Venue {
    Url(String),
    Location(String),
}

impl Venue {
    pub fn from_where(text: &str) -> Self {
        if is_url(text) {
            Venue::Url(text.to_string())
        } else {
            Venue::Location(text.to_string())
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Venue::Url(url) => Some(url.as_str()),
            Venue::Location(_) => None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Venue::Location(location) => Some(location.as_str()),
            Venue::Url(_) => None,
        }
    }
}

//! Query string extraction for both request contracts.

use shared::{Error, RequestContract, Result};

/// Event fields read from the query string, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventParams {
    /// Start date, or date and time joined by a space
    pub start: String,
    pub end: String,
    pub all_day: bool,
    pub title: String,
    pub description: String,
    /// Raw `where` value, a URL or a location
    pub venue: String,
    pub repeats: Option<String>,
    pub custom_repeat_frequency: Option<String>,
}

impl EventParams {
    /// Read parameters through `lookup`, which returns the first value for a key.
    ///
    /// Empty values count as absent.
    pub fn from_query<F>(contract: RequestContract, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let (start, end, all_day) = match contract {
            RequestContract::Combined => {
                let all_day = lookup("allDay").as_deref() == Some("true");
                (get("start"), get("end"), all_day)
            }
            RequestContract::Split => {
                let start_date = get("startDate");
                let end_date = get("endDate");
                match (get("startTime"), get("endTime")) {
                    (Some(start_time), Some(end_time)) => (
                        start_date.map(|date| format!("{} {}", date, start_time)),
                        end_date.map(|date| format!("{} {}", date, end_time)),
                        false,
                    ),
                    _ => (start_date, end_date, true),
                }
            }
        };

        let (Some(start), Some(end), Some(title)) = (start, end, get("title")) else {
            return Err(Error::MissingParameters);
        };

        Ok(Self {
            start,
            end,
            all_day,
            title,
            description: get("description").unwrap_or_default(),
            venue: get("where").unwrap_or_default(),
            repeats: get("repeats"),
            custom_repeat_frequency: get("customRepeatFrequency"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn read(contract: RequestContract, pairs: &[(&str, &str)]) -> Result<EventParams> {
        let query: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EventParams::from_query(contract, |key| query.get(key).cloned())
    }

    #[test]
    fn test_combined_contract() {
        let params = read(
            RequestContract::Combined,
            &[
                ("start", "2024-05-01T10:00"),
                ("end", "2024-05-01T11:00"),
                ("title", "Standup"),
                ("where", "Room 4"),
                ("repeats", "DAILY"),
            ],
        )
        .unwrap();

        assert_eq!(params.start, "2024-05-01T10:00");
        assert_eq!(params.end, "2024-05-01T11:00");
        assert!(!params.all_day);
        assert_eq!(params.title, "Standup");
        assert_eq!(params.description, "");
        assert_eq!(params.venue, "Room 4");
        assert_eq!(params.repeats.as_deref(), Some("DAILY"));
        assert_eq!(params.custom_repeat_frequency, None);
    }

    #[test]
    fn test_combined_all_day_flag_must_be_true() {
        let base = [("start", "2024-05-01"), ("end", "2024-05-02"), ("title", "Trip")];

        let mut pairs = base.to_vec();
        pairs.push(("allDay", "true"));
        assert!(read(RequestContract::Combined, &pairs).unwrap().all_day);

        let mut pairs = base.to_vec();
        pairs.push(("allDay", "TRUE"));
        assert!(!read(RequestContract::Combined, &pairs).unwrap().all_day);

        assert!(!read(RequestContract::Combined, &base).unwrap().all_day);
    }

    #[test]
    fn test_combined_missing_fields() {
        let missing_title = [("start", "2024-05-01"), ("end", "2024-05-02")];
        assert_eq!(
            read(RequestContract::Combined, &missing_title),
            Err(Error::MissingParameters)
        );

        let empty_end = [("start", "2024-05-01"), ("end", ""), ("title", "Trip")];
        assert_eq!(
            read(RequestContract::Combined, &empty_end),
            Err(Error::MissingParameters)
        );

        // The other contract's names do not count.
        let split_names = [("startDate", "2024-05-01"), ("endDate", "2024-05-02"), ("title", "Trip")];
        assert_eq!(
            read(RequestContract::Combined, &split_names),
            Err(Error::MissingParameters)
        );
    }

    #[test]
    fn test_split_contract_joins_date_and_time() {
        let params = read(
            RequestContract::Split,
            &[
                ("startDate", "2024-05-01"),
                ("startTime", "10:00"),
                ("endDate", "2024-05-01"),
                ("endTime", "11:30"),
                ("title", "Review"),
            ],
        )
        .unwrap();

        assert_eq!(params.start, "2024-05-01 10:00");
        assert_eq!(params.end, "2024-05-01 11:30");
        assert!(!params.all_day);
    }

    #[test]
    fn test_split_contract_infers_all_day() {
        let params = read(
            RequestContract::Split,
            &[
                ("startDate", "2024-05-01"),
                ("startTime", "10:00"),
                ("endDate", "2024-05-03"),
                ("title", "Conference"),
                ("allDay", "false"),
            ],
        )
        .unwrap();

        assert!(params.all_day);
        assert_eq!(params.start, "2024-05-01");
        assert_eq!(params.end, "2024-05-03");
    }

    #[test]
    fn test_split_contract_missing_fields() {
        let combined_names = [("start", "2024-05-01"), ("end", "2024-05-02"), ("title", "Trip")];
        assert_eq!(
            read(RequestContract::Split, &combined_names),
            Err(Error::MissingParameters)
        );
    }
}

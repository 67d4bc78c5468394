use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DateParseError {
    #[error("invalid date, expected YYYY-MM-DD: {0}")]
    InvalidDate(String),
    #[error("invalid time, expected HH:MM: {0}")]
    InvalidTime(String),
    #[error("invalid datetime, expected YYYY-MM-DDTHH:MM:SSZ: {0}")]
    InvalidDateTime(String),
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| DateParseError::InvalidDate(raw.to_string()))
}

/// Parse a `HH:MM` time of day.
pub fn parse_time(raw: &str) -> Result<NaiveTime, DateParseError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| DateParseError::InvalidTime(raw.to_string()))
}

/// Parse a `YYYY-MM-DDTHH:MM:SSZ` timestamp into UTC.
pub fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, DateParseError> {
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%SZ")
        .map(|naive| naive.and_utc())
        .map_err(|_| DateParseError::InvalidDateTime(raw.to_string()))
}

//! Calendar dates on experience and education entries
//!
//! Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (browsers send either);
//! only the date part is kept.

use chrono::{DateTime, NaiveDate};
use kernel::error::app_error::{AppError, AppResult};

fn parse(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// A date that must be present
pub fn required(raw: Option<&str>, label: &str) -> AppResult<NaiveDate> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Err(AppError::bad_request(format!("{label} date is required"))),
        Some(s) => parse(s).ok_or_else(|| AppError::bad_request(format!("{label} date is invalid"))),
    }
}

/// A date that may be omitted; present but unparseable is still an error
pub fn optional(raw: Option<&str>, label: &str) -> AppResult<Option<NaiveDate>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => parse(s)
            .map(Some)
            .ok_or_else(|| AppError::bad_request(format!("{label} date is invalid"))),
    }
}

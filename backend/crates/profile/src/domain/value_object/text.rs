//! Free-text profile fields
//!
//! Blank input counts as absent, so `""` never overwrites a stored value.

use kernel::error::app_error::{AppError, AppResult};

/// Trimmed value, or `None` when absent or blank
pub fn optional(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Trimmed non-blank value, or a validation error carrying `message`
pub fn required(raw: Option<String>, message: &'static str) -> AppResult<String> {
    optional(raw).ok_or_else(|| AppError::bad_request(message))
}

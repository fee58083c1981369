//! Post / Comment Text Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum body length (in characters)
pub const POST_TEXT_MAX_LENGTH: usize = 10_000;

/// Non-blank text of a post or comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostText(String);

impl PostText {
    pub fn new(raw: Option<String>) -> AppResult<Self> {
        let text = raw.as_deref().map(str::trim).unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::bad_request("Text is required"));
        }

        if text.chars().count() > POST_TEXT_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Text must be at most {} characters",
                POST_TEXT_MAX_LENGTH
            )));
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_rejected() {
        for raw in [None, Some(String::new()), Some(" \n ".into())] {
            assert_eq!(PostText::new(raw).unwrap_err().message(), "Text is required");
        }
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(PostText::new(Some("  hi ".into())).unwrap().as_str(), "hi");
    }

    #[test]
    fn test_too_long() {
        let raw = "x".repeat(POST_TEXT_MAX_LENGTH + 1);
        assert!(PostText::new(Some(raw)).is_err());
    }
}

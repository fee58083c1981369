//! User Name Value Object
//!
//! アカウントの表示名。投稿者名やプロフィールの所有者名としてそのまま表示される。
//!
//! ## 設計方針
//! - 一意性は要求しない（ログイン識別子はメールアドレス）
//! - Unicode を許可し、NFC 正規化のみ行う（見た目を変えない）
//!
//! ## 不変条件
//! - 前後の空白を除いて 1 文字以上
//! - 最大 [`USER_NAME_MAX_LENGTH`] 文字
//! - 制御文字を含まない

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for a display name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 100;

/// Display name value object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new display name with validation
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = raw.as_ref().trim().nfc().collect();

        if normalized.is_empty() {
            return Err(AppError::bad_request("Name is required"));
        }

        if normalized.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if normalized.chars().any(char::is_control) {
            return Err(AppError::bad_request("Name contains invalid characters"));
        }

        Ok(Self(normalized))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_keeps_case() {
        let name = UserName::new("  Alice Smith ").unwrap();
        assert_eq!(name.as_str(), "Alice Smith");
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(UserName::new("").unwrap_err().message(), "Name is required");
        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn test_unicode_allowed() {
        assert!(UserName::new("山田 太郎").is_ok());
    }

    #[test]
    fn test_too_long_rejected() {
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_control_characters_rejected() {
        assert!(UserName::new("bad\u{0000}name").is_err());
    }
}

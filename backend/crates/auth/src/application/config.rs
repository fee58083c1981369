//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared by `Arc`; nothing reads the environment after that.

use std::sync::Arc;
use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::token::{TokenCodec, TokenError};
use thiserror::Error;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No signing secret; the server must not start
    #[error("JWT secret is not configured")]
    MissingSecret,
}

impl From<TokenError> for ConfigError {
    fn from(_: TokenError) -> Self {
        ConfigError::MissingSecret
    }
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Signs and verifies session tokens
    pub token_codec: Arc<TokenCodec>,
    /// Token lifetime
    pub token_ttl: Duration,
    /// Whether to set the Secure cookie attribute
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Attempts per step when deleting an account
    pub purge_attempts: u32,
    /// Base delay between attempts (multiplied by the attempt number)
    pub purge_retry_delay: Duration,
}

impl AuthConfig {
    /// 100 hours
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(360_000);

    /// Create config from the server signing secret
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
        Ok(Self::with_codec(TokenCodec::new(secret)?))
    }

    /// Create config with a random signing secret (for development and tests)
    pub fn with_random_secret() -> Self {
        Self::with_codec(TokenCodec::random())
    }

    /// Create config for development (insecure cookie, fast retries)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            purge_retry_delay: Duration::from_millis(10),
            ..Self::with_random_secret()
        }
    }

    fn with_codec(codec: TokenCodec) -> Self {
        Self {
            session_cookie_name: "token".to_string(),
            token_codec: Arc::new(codec),
            token_ttl: Self::DEFAULT_TOKEN_TTL,
            cookie_secure: false,
            cookie_same_site: SameSite::Strict,
            password_pepper: None,
            purge_attempts: 3,
            purge_retry_delay: Duration::from_millis(200),
        }
    }

    fn cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            ..CookieConfig::default()
        }
    }

    /// Set-Cookie value carrying a session token
    pub fn session_cookie(&self, token: &str) -> String {
        self.cookie().build_set_cookie(token)
    }

    /// Set-Cookie value that overwrites and expires the session cookie
    pub fn clear_session_cookie(&self) -> String {
        self.cookie().build_delete_cookie()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_is_fatal() {
        assert!(matches!(AuthConfig::new(""), Err(ConfigError::MissingSecret)));
        assert!(AuthConfig::new("s3cret").is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = AuthConfig::with_random_secret();
        assert_eq!(config.session_cookie_name, "token");
        assert_eq!(config.token_ttl, Duration::from_secs(360_000));
        assert_eq!(config.cookie_same_site, SameSite::Strict);
    }

    #[test]
    fn test_cookies_share_attributes() {
        let config = AuthConfig {
            cookie_secure: true,
            ..AuthConfig::with_random_secret()
        };

        let set = config.session_cookie("abc");
        let clear = config.clear_session_cookie();
        for attr in ["HttpOnly", "Secure", "SameSite=Strict", "Path=/"] {
            assert!(set.contains(attr), "{attr} missing from {set}");
            assert!(clear.contains(attr), "{attr} missing from {clear}");
        }
        assert!(set.starts_with("token=abc"));
        assert!(clear.starts_with("token=null"));
        assert!(clear.contains("Max-Age=0"));
    }
}

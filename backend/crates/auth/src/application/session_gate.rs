//! Session Gate
//!
//! Resolves the caller of a protected route from the session cookie.
//! Stateless: only the token is consulted, never the credential store.

use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::Utc;
use platform::cookie::{CookieLookup, lookup_cookie};

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Authenticated caller of a gated request
///
/// Only the gate constructs this; handlers receive it through the
/// extractor in `presentation::gate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    id: UserId,
}

impl Identity {
    pub fn id(&self) -> UserId {
        self.id
    }
}

/// Gate shared by every router that has protected routes
#[derive(Debug, Clone)]
pub struct SessionGate {
    config: Arc<AuthConfig>,
}

impl SessionGate {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Check the request headers against the current time
    pub fn check(&self, headers: &HeaderMap) -> AuthResult<Identity> {
        self.check_at(headers, Utc::now().timestamp())
    }

    /// Check the request headers as of `now` (unix seconds)
    pub fn check_at(&self, headers: &HeaderMap, now: i64) -> AuthResult<Identity> {
        let token = match lookup_cookie(headers, &self.config.session_cookie_name) {
            CookieLookup::NoCookies => return Err(AuthError::NoCookies),
            CookieLookup::Missing => return Err(AuthError::NoToken),
            CookieLookup::Found(token) => token,
        };

        match session_token::verify_at(&self.config, &token, now) {
            Ok(id) => Ok(Identity { id }),
            Err(e) => {
                tracing::warn!(reason = %e, "Rejected session token");
                Err(AuthError::InvalidToken)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};

    fn gate() -> (SessionGate, Arc<AuthConfig>) {
        let config = Arc::new(AuthConfig::with_random_secret());
        (SessionGate::new(config.clone()), config)
    }

    fn cookies(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_no_cookie_header() {
        let (gate, _) = gate();
        assert!(matches!(
            gate.check(&HeaderMap::new()),
            Err(AuthError::NoCookies)
        ));
    }

    #[test]
    fn test_cookies_without_token() {
        let (gate, _) = gate();
        assert!(matches!(
            gate.check(&cookies("theme=dark")),
            Err(AuthError::NoToken)
        ));
    }

    #[test]
    fn test_cleared_cookie_is_invalid() {
        let (gate, _) = gate();
        assert!(matches!(
            gate.check(&cookies("token=null")),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_valid_token_yields_identity() {
        let (gate, config) = gate();
        let user_id = UserId::new();
        let token = session_token::issue(&config, user_id).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; token={token}")).unwrap(),
        );

        assert_eq!(gate.check(&headers).unwrap().id(), user_id);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let (gate, config) = gate();
        let token = session_token::issue(&config, UserId::new()).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("token={token}")).unwrap(),
        );

        let later = Utc::now().timestamp() + config.token_ttl.as_secs() as i64 + 1;
        assert!(matches!(
            gate.check_at(&headers, later),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_token_from_other_secret_is_invalid() {
        let (gate, _) = gate();
        let foreign = AuthConfig::with_random_secret();
        let token = session_token::issue(&foreign, UserId::new()).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("token={token}")).unwrap(),
        );

        assert!(matches!(gate.check(&headers), Err(AuthError::InvalidToken)));
    }
}

//! Logout Use Case
//!
//! Sessions are stateless, so logging out only tells the client to drop
//! its cookie. A token copied elsewhere stays valid until it expires.

use std::sync::Arc;

use crate::application::config::AuthConfig;

/// Logout use case
pub struct LogoutUseCase {
    config: Arc<AuthConfig>,
}

impl LogoutUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Returns the Set-Cookie value that clears the session cookie
    pub fn execute(&self) -> String {
        tracing::info!("User logged out");
        self.config.clear_session_cookie()
    }
}

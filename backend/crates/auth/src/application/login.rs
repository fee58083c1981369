//! Login Use Case
//!
//! Verifies email and password and issues a session token.

use std::sync::Arc;

use kernel::error::field::FieldErrors;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    UserId,
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub user_id: UserId,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let mut errors = FieldErrors::new();
        let email = errors.check("email", Email::new(&input.email));
        if input.password.is_empty() {
            errors.push("password", "Password is required");
        }
        let Some(email) = email.filter(|_| errors.is_empty()) else {
            return Err(AuthError::Validation(errors.into_vec()));
        };

        let user = self.user_repo.find_by_email(&email).await?;

        // Unknown email still pays for a full hash comparison
        let stored = user.as_ref().map(|u| u.password.clone());
        let raw = RawPassword::for_verification(input.password);
        let pepper = self.config.password_pepper.clone();
        let password_valid = tokio::task::spawn_blocking(move || match stored {
            Some(hash) => hash.verify(&raw, pepper.as_deref()),
            None => UserPassword::verify_absent(&raw, pepper.as_deref()),
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {}", e)))?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let token = session_token::issue(&self.config, user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            user_id: user.user_id,
            token,
        })
    }
}

//! Register Use Case
//!
//! Creates a new account and issues its first session token.

use std::sync::Arc;

use kernel::error::field::FieldErrors;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    UserId,
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: UserId,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate every field before touching the store
        let mut errors = FieldErrors::new();
        let name = errors.check("name", UserName::new(&input.name));
        let email = errors.check("email", Email::new(&input.email));
        let password = errors.check("password", RawPassword::new(input.password));

        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(AuthError::Validation(errors.into_vec()));
        };

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::AlreadyExists);
        }

        let pepper = self.config.password_pepper.clone();
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&password, pepper.as_deref())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {}", e)))??;

        let user = User::new(name, email, password_hash);
        self.user_repo.create(&user).await?;

        let token = session_token::issue(&self.config, user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id,
            token,
        })
    }
}

//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{UserId, email::Email};
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new account
    ///
    /// Fails with `AuthError::AlreadyExists` when the email is taken, even if
    /// a concurrent registration won the race after our lookup.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find account by exact email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Delete account; `false` if it was already gone
    async fn delete(&self, user_id: &UserId) -> AuthResult<bool>;
}

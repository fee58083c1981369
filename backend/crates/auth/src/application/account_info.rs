//! Account Info Use Case

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Loads the caller's own account
pub struct AccountInfoUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> AccountInfoUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// A valid token for a deleted account yields `UserNotFound`
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

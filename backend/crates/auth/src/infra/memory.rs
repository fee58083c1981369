//! In-memory credential store
//!
//! Same contract as the PostgreSQL store; used by tests and local runs
//! without a database.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, email::Email};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        // Check and insert under one write lock so the email stays unique
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::AlreadyExists);
        }
        users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<bool> {
        Ok(self.users.write().await.remove(user_id).is_some())
    }
}

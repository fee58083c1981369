//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    UserId, email::Email, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                name,
                email,
                password_hash,
                avatar,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.password.as_phc_string())
        .bind(user.avatar.as_deref())
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(AuthError::AlreadyExists),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, name, email, password_hash, avatar, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, name, email, password_hash, avatar, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    avatar: Option<String>,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password = UserPassword::from_phc_string(self.password_hash)?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            name: UserName::from_db(self.name),
            email: Email::from_db(self.email),
            password,
            avatar: self.avatar,
            created_at: self.created_at,
        })
    }
}

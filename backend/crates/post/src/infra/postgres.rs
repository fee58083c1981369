//! PostgreSQL Repository Implementation
//!
//! Likes and comments are JSONB arrays on the post row.

use chrono::{DateTime, Utc};
use kernel::error::app_error::AppResult;
use kernel::owner::OwnedResourceStore;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::post::{Comment, Like, Post};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::{PostId, UserId};
use crate::error::{PostError, PostResult};

#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                user_id,
                text,
                name,
                avatar,
                likes,
                comments,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.user_id.as_uuid())
        .bind(&post.text)
        .bind(&post.name)
        .bind(post.avatar.as_deref())
        .bind(Json(&post.likes))
        .bind(Json(&post.comments))
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, user_id, text, name, avatar, likes, comments, created_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn list_newest_first(&self) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, user_id, text, name, avatar, likes, comments, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn update(&self, post: &Post) -> PostResult<()> {
        let updated = sqlx::query(
            r#"
            UPDATE posts
            SET likes = $2, comments = $3
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(Json(&post.likes))
        .bind(Json(&post.comments))
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(PostError::PostNotFound);
        }
        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<bool> {
        let deleted = sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn delete_by_user(&self, user_id: &UserId) -> PostResult<u64> {
        let deleted = sqlx::query("DELETE FROM posts WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

impl OwnedResourceStore for PgPostRepository {
    fn resource_name(&self) -> &'static str {
        "posts"
    }

    async fn delete_all_by_owner(&self, owner: &UserId) -> AppResult<u64> {
        self.delete_by_user(owner).await.map_err(|e| e.to_app_error())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    user_id: Uuid,
    text: String,
    name: String,
    avatar: Option<String>,
    likes: Json<Vec<Like>>,
    comments: Json<Vec<Comment>>,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            user_id: UserId::from_uuid(self.user_id),
            text: self.text,
            name: self.name,
            avatar: self.avatar,
            likes: self.likes.0,
            comments: self.comments.0,
            created_at: self.created_at,
        }
    }
}

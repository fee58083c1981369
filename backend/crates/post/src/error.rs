//! Post Error Types
//!
//! Post-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, field::FieldError, kind::ErrorKind};
use thiserror::Error;

/// Post-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

#[derive(Debug, Error)]
pub enum PostError {
    /// One or more request fields failed validation
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Post not found")]
    PostNotFound,

    #[error("Comment does not exist")]
    CommentNotFound,

    /// Caller does not own the post or comment
    #[error("User not authorized")]
    NotAuthorized,

    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Post has not yet been liked")]
    NotLiked,

    /// Failure while reading account data
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostError::Validation(_) | PostError::AlreadyLiked | PostError::NotLiked => {
                StatusCode::BAD_REQUEST
            }
            PostError::NotAuthorized => StatusCode::UNAUTHORIZED,
            PostError::PostNotFound | PostError::CommentNotFound => StatusCode::NOT_FOUND,
            PostError::Auth(e) => e.status_code(),
            PostError::Database(_) | PostError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::Validation(_) | PostError::AlreadyLiked | PostError::NotLiked => {
                ErrorKind::BadRequest
            }
            PostError::NotAuthorized => ErrorKind::Unauthorized,
            PostError::PostNotFound | PostError::CommentNotFound => ErrorKind::NotFound,
            PostError::Auth(e) => e.kind(),
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code carried in the response body
    pub fn code(&self) -> &'static str {
        match self {
            PostError::Validation(_) => "VALIDATION_FAILED",
            PostError::PostNotFound => "POST_NOT_FOUND",
            PostError::CommentNotFound => "COMMENT_NOT_FOUND",
            PostError::NotAuthorized => "NOT_AUTHORIZED",
            PostError::AlreadyLiked => "ALREADY_LIKED",
            PostError::NotLiked => "NOT_LIKED",
            PostError::Auth(e) => e.code(),
            PostError::Database(_) | PostError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            PostError::Validation(errors) => AppError::validation(errors.clone()),
            PostError::Auth(e) => e.to_app_error(),
            _ => AppError::new(self.kind(), self.to_string()).with_code(self.code()),
        }
    }

    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Post database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Post internal error");
            }
            PostError::NotAuthorized => {
                tracing::warn!("Rejected change to another user's post or comment");
            }
            PostError::Auth(e) => {
                tracing::debug!(error = %e, "Author lookup failed");
            }
            _ => {
                tracing::debug!(error = %self, "Post error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for PostError {
    fn from(err: AppError) -> Self {
        PostError::Internal(err.to_string())
    }
}

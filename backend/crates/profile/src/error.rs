//! Profile Error Types
//!
//! Profile-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, field::FieldError, kind::ErrorKind};
use thiserror::Error;

/// Profile-specific result type alias
pub type ProfileResult<T> = Result<T, ProfileError>;

#[derive(Debug, Error)]
pub enum ProfileError {
    /// One or more request fields failed validation
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Experience not found")]
    ExperienceNotFound,

    #[error("Education not found")]
    EducationNotFound,

    /// Unknown or invalid GitHub account
    #[error("No GitHub profile found")]
    GithubNotFound,

    /// GitHub could not be reached or answered garbage
    #[error("GitHub request failed: {0}")]
    Upstream(String),

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

impl ProfileError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProfileError::Auth(e) => e.status_code(),
            _ => StatusCode::from_u16(self.kind().status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::Validation(_) => ErrorKind::BadRequest,
            ProfileError::ProfileNotFound
            | ProfileError::ExperienceNotFound
            | ProfileError::EducationNotFound
            | ProfileError::GithubNotFound => ErrorKind::NotFound,
            ProfileError::Upstream(_) => ErrorKind::BadGateway,
            ProfileError::Auth(e) => e.kind(),
            ProfileError::Database(_) | ProfileError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Machine-readable code carried in the response body
    pub fn code(&self) -> &'static str {
        match self {
            ProfileError::Validation(_) => "VALIDATION_FAILED",
            ProfileError::ProfileNotFound => "PROFILE_NOT_FOUND",
            ProfileError::ExperienceNotFound => "EXPERIENCE_NOT_FOUND",
            ProfileError::EducationNotFound => "EDUCATION_NOT_FOUND",
            ProfileError::GithubNotFound => "GITHUB_NOT_FOUND",
            ProfileError::Upstream(_) => "UPSTREAM_ERROR",
            ProfileError::Auth(e) => e.code(),
            ProfileError::Database(_) | ProfileError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ProfileError::Validation(errors) => AppError::validation(errors.clone()),
            ProfileError::Auth(e) => e.to_app_error(),
            _ => AppError::new(self.kind(), self.to_string()).with_code(self.code()),
        }
    }

    fn log(&self) {
        match self {
            ProfileError::Database(e) => {
                tracing::error!(error = %e, "Profile database error");
            }
            ProfileError::Upstream(msg) => {
                tracing::warn!(error = %msg, "GitHub lookup failed");
            }
            ProfileError::Internal(msg) => {
                tracing::error!(message = %msg, "Profile internal error");
            }
            ProfileError::Auth(e) => {
                tracing::error!(error = %e, "Owner lookup failed");
            }
            _ => {
                tracing::debug!(error = %self, "Profile error");
            }
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ProfileError {
    fn from(err: AppError) -> Self {
        ProfileError::Internal(err.to_string())
    }
}

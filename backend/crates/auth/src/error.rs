//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, field::FieldError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more request fields failed validation
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Email already registered
    #[error("User already exists")]
    AlreadyExists,

    /// Unknown email or wrong password (deliberately not distinguished)
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// Gated request carried no cookies at all
    #[error("No cookies provided.")]
    NoCookies,

    /// Cookies present but no session token among them
    #[error("No token, authorization denied.")]
    NoToken,

    /// Token failed signature or expiry checks
    #[error("Invalid token.")]
    InvalidToken,

    /// Account record not found
    #[error("User not found")]
    UserNotFound,

    /// Account deletion stopped part way
    #[error("Account deletion incomplete at step {step}: {reason}")]
    CascadeIncomplete { step: &'static str, reason: String },

    /// Token could not be issued
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) | AuthError::AlreadyExists => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::NoCookies
            | AuthError::NoToken
            | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::CascadeIncomplete { .. }
            | AuthError::Token(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::AlreadyExists => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::NoCookies
            | AuthError::NoToken
            | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::CascadeIncomplete { .. }
            | AuthError::Token(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code carried in the response body
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::Validation(_) => "VALIDATION_FAILED",
            AuthError::AlreadyExists => "ALREADY_EXISTS",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::NoCookies => "NO_COOKIES",
            AuthError::NoToken => "NO_TOKEN",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::CascadeIncomplete { .. } => "ACCOUNT_DELETE_INCOMPLETE",
            AuthError::Token(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Validation(errors) => AppError::validation(errors.clone()),
            _ => AppError::new(self.kind(), self.to_string()).with_code(self.code()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Token issuance failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::CascadeIncomplete { step, reason } => {
                tracing::error!(step, reason = %reason, "Account deletion left partial state");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

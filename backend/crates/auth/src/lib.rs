//! Accounts and authentication
//!
//! Clean Architecture structure:
//! - `domain/` - Accounts, value objects, repository traits
//! - `application/` - Register/login/logout, the session gate, account deletion
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, the `Identity` extractor
//!
//! ## Security Model
//! - Passwords hashed with Argon2id off the async executor
//! - Stateless sessions: an HS256 token in an HttpOnly, SameSite=Strict cookie
//! - A single "Invalid Credentials" answer for unknown email and wrong password

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::{AuthConfig, ConfigError};
pub use application::session_gate::{Identity, SessionGate};
pub use domain::entity::user::{User, UserSummary};
pub use domain::repository::UserRepository;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemoryUserRepository, postgres::PgUserRepository};
pub use presentation::router::accounts_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

//! Posts, likes and comments
//!
//! Clean Architecture structure:
//! - `domain/` - Post with embedded likes and comments, store trait
//! - `application/` - Post, like and comment use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router (every route gated)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use domain::entity::post::Post;
pub use domain::repository::PostRepository;
pub use error::{PostError, PostResult};
pub use infra::{MemoryPostRepository, PgPostRepository};
pub use presentation::router::posts_router;

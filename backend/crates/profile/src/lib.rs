//! Developer profiles
//!
//! Clean Architecture structure:
//! - `domain/` - Profile with embedded experience and education, value objects, store traits
//! - `application/` - Profile queries, create-or-update, entry add/remove, GitHub listing
//! - `infra/` - PostgreSQL and in-memory stores, the GitHub REST client
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use domain::entity::profile::Profile;
pub use domain::repository::{ProfileRepository, RepoDirectory};
pub use error::{ProfileError, ProfileResult};
pub use infra::{
    GithubConfig, GithubRepoDirectory, MemoryProfileRepository, PgProfileRepository,
    StaticRepoDirectory,
};
pub use presentation::router::profiles_router;

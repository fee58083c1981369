//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{education::Education, experience::Experience, profile::Profile, repo::RepoSummary};
pub use repository::{ProfileRepository, RepoDirectory};

//! Infrastructure Layer
//!
//! Database implementations and the GitHub client.

pub mod github;
pub mod memory;
pub mod postgres;

pub use github::{GithubConfig, GithubRepoDirectory};
pub use memory::{MemoryProfileRepository, StaticRepoDirectory};
pub use postgres::PgProfileRepository;

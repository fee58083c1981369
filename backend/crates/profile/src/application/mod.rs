//! Application Layer
//!
//! Use cases for profiles and their embedded entries.

pub mod education;
pub mod experience;
pub mod github_repos;
pub mod queries;
pub mod upsert_profile;

// Re-exports
pub use education::{AddEducationInput, AddEducationUseCase, RemoveEducationUseCase};
pub use experience::{AddExperienceInput, AddExperienceUseCase, RemoveExperienceUseCase};
pub use github_repos::GithubReposUseCase;
pub use queries::{
    GetProfileByUserUseCase, GetOwnProfileUseCase, ListProfilesUseCase, ProfileView,
};
pub use upsert_profile::{UpsertProfileInput, UpsertProfileUseCase};

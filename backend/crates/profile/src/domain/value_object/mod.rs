//! Value Object Module

pub mod date;
pub mod github_username;
pub mod skills;
pub mod text;

pub use kernel::id::{EducationId, ExperienceId, ProfileId, UserId};

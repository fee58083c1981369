//! Repository Traits
//!
//! Interfaces for data persistence and the external repository listing.

use crate::domain::entity::{profile::Profile, repo::RepoSummary};
use crate::domain::value_object::{UserId, github_username::GithubUsername};
use crate::error::ProfileResult;

/// Profile store, keyed by owner
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Find the profile owned by `user_id`
    async fn find_by_user(&self, user_id: &UserId) -> ProfileResult<Option<Profile>>;

    /// Every profile, oldest first
    async fn list(&self) -> ProfileResult<Vec<Profile>>;

    /// Insert or replace the owner's profile as a whole
    async fn save(&self, profile: &Profile) -> ProfileResult<()>;

    /// Delete the owner's profile; returns the number removed (0 or 1)
    async fn delete_by_user(&self, user_id: &UserId) -> ProfileResult<u64>;
}

/// Public source repositories of a code-hosting account
#[trait_variant::make(RepoDirectory: Send)]
pub trait LocalRepoDirectory {
    /// Recently created public repositories, or `None` if the account
    /// does not exist upstream
    async fn recent_repos(
        &self,
        username: &GithubUsername,
    ) -> ProfileResult<Option<Vec<RepoSummary>>>;
}

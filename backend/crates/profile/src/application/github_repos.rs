//! GitHub repositories shown on a profile

use std::sync::Arc;

use crate::domain::entity::repo::RepoSummary;
use crate::domain::repository::RepoDirectory;
use crate::domain::value_object::github_username::GithubUsername;
use crate::error::{ProfileError, ProfileResult};

/// Number of repositories shown
pub const REPO_LIMIT: usize = 5;

pub struct GithubReposUseCase<G>
where
    G: RepoDirectory,
{
    directory: Arc<G>,
}

impl<G> GithubReposUseCase<G>
where
    G: RepoDirectory,
{
    pub fn new(directory: Arc<G>) -> Self {
        Self { directory }
    }

    /// Oldest first, at most [`REPO_LIMIT`]
    pub async fn execute(&self, raw_username: &str) -> ProfileResult<Vec<RepoSummary>> {
        let username = GithubUsername::parse(raw_username).ok_or(ProfileError::GithubNotFound)?;

        let mut repos = self
            .directory
            .recent_repos(&username)
            .await?
            .ok_or(ProfileError::GithubNotFound)?;

        repos.sort_by_key(|r| r.created_at);
        repos.truncate(REPO_LIMIT);

        Ok(repos)
    }
}

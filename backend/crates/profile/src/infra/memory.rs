//! In-memory stores for tests and local runs without a database

use std::collections::HashMap;
use std::sync::Arc;

use kernel::error::app_error::AppResult;
use kernel::owner::OwnedResourceStore;
use tokio::sync::RwLock;

use crate::domain::entity::{profile::Profile, repo::RepoSummary};
use crate::domain::repository::{ProfileRepository, RepoDirectory};
use crate::domain::value_object::{UserId, github_username::GithubUsername};
use crate::error::ProfileResult;

#[derive(Clone, Default)]
pub struct MemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<UserId, Profile>>>,
}

impl MemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }
}

impl ProfileRepository for MemoryProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> ProfileResult<Option<Profile>> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn list(&self) -> ProfileResult<Vec<Profile>> {
        let mut profiles: Vec<_> = self.profiles.read().await.values().cloned().collect();
        profiles.sort_by_key(|p| p.created_at);
        Ok(profiles)
    }

    async fn save(&self, profile: &Profile) -> ProfileResult<()> {
        self.profiles
            .write()
            .await
            .insert(profile.user_id, profile.clone());
        Ok(())
    }

    async fn delete_by_user(&self, user_id: &UserId) -> ProfileResult<u64> {
        Ok(self.profiles.write().await.remove(user_id).map_or(0, |_| 1))
    }
}

impl OwnedResourceStore for MemoryProfileRepository {
    fn resource_name(&self) -> &'static str {
        "profile"
    }

    async fn delete_all_by_owner(&self, owner: &UserId) -> AppResult<u64> {
        self.delete_by_user(owner).await.map_err(|e| e.to_app_error())
    }
}

/// Fixed repository listings keyed by username
#[derive(Clone, Default)]
pub struct StaticRepoDirectory {
    accounts: Arc<HashMap<String, Vec<RepoSummary>>>,
}

impl StaticRepoDirectory {
    pub fn new(accounts: HashMap<String, Vec<RepoSummary>>) -> Self {
        Self {
            accounts: Arc::new(accounts),
        }
    }
}

impl RepoDirectory for StaticRepoDirectory {
    async fn recent_repos(
        &self,
        username: &GithubUsername,
    ) -> ProfileResult<Option<Vec<RepoSummary>>> {
        Ok(self.accounts.get(username.as_str()).cloned())
    }
}

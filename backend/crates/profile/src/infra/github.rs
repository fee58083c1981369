//! GitHub REST client

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entity::repo::RepoSummary;
use crate::domain::repository::RepoDirectory;
use crate::domain::value_object::github_username::GithubUsername;
use crate::error::{ProfileError, ProfileResult};

const USER_AGENT: &str = concat!("linkdev-api/", env!("CARGO_PKG_VERSION"));

/// GitHub API access settings
#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub api_base: String,
    /// OAuth app credentials; raise the rate limit when set
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub timeout: Duration,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            client_id: None,
            client_secret: None,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Clone)]
pub struct GithubRepoDirectory {
    client: reqwest::Client,
    config: Arc<GithubConfig>,
}

impl GithubRepoDirectory {
    pub fn new(config: GithubConfig) -> ProfileResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProfileError::Internal(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    fn repos_url(&self, username: &GithubUsername) -> String {
        format!(
            "{}/users/{}/repos",
            self.config.api_base.trim_end_matches('/'),
            username
        )
    }
}

impl RepoDirectory for GithubRepoDirectory {
    async fn recent_repos(
        &self,
        username: &GithubUsername,
    ) -> ProfileResult<Option<Vec<RepoSummary>>> {
        let mut request = self
            .client
            .get(self.repos_url(username))
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .query(&[("per_page", "5"), ("sort", "created"), ("direction", "asc")]);

        if let (Some(id), Some(secret)) = (&self.config.client_id, &self.config.client_secret) {
            request = request.basic_auth(id, Some(secret));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProfileError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            tracing::debug!(
                username = %username,
                status = %response.status(),
                "GitHub returned no repositories"
            );
            return Ok(None);
        }

        let repos = response
            .json::<Vec<RepoSummary>>()
            .await
            .map_err(|e| ProfileError::Upstream(e.to_string()))?;

        Ok(Some(repos))
    }
}

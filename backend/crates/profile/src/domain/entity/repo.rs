//! Public repository listed on a profile
//!
//! Field names follow the GitHub REST API so that its JSON deserializes
//! directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub created_at: DateTime<Utc>,
}

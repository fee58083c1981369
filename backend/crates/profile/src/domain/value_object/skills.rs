//! Skills Value Object
//!
//! Clients send skills either as a JSON list or as one comma-separated
//! string (`"Rust, SQL,  Go"`). Both end up as the same trimmed list.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Skills as they arrive in a request body
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Text(String),
}

/// Non-empty list of skills
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skills(Vec<String>);

impl Skills {
    pub fn new(input: Option<SkillsInput>) -> AppResult<Self> {
        let items: Vec<String> = match input {
            Some(SkillsInput::List(list)) => list,
            Some(SkillsInput::Text(text)) => text.split(',').map(str::to_string).collect(),
            None => Vec::new(),
        };

        let skills: Vec<String> = items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if skills.is_empty() {
            return Err(AppError::bad_request("Skills is required"));
        }

        Ok(Self(skills))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(skills: Vec<String>) -> Self {
        Self(skills)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

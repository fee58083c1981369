//! Experience Entity
//!
//! One job on a profile. Stored embedded in the profile document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::ExperienceId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

//! Education Entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::EducationId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: EducationId,
    pub school: String,
    pub degree: String,
    #[serde(rename = "fieldofstudy")]
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

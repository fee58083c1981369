//! Profile Entity
//!
//! A user's public developer profile. At most one per user; the owner id
//! is the lookup key everywhere. Experience and education entries live
//! inside the profile and are always read and written with it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{education::Education, experience::Experience};
use crate::domain::value_object::{EducationId, ExperienceId, ProfileId, UserId, skills::Skills};

/// Social links, replaced as a whole on every profile update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// Validated fields of a create-or-update request
#[derive(Debug, Clone)]
pub struct ProfileFields {
    pub status: String,
    pub skills: Skills,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: Social,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub profile_id: ProfileId,
    pub user_id: UserId,
    pub status: String,
    pub skills: Skills,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: Social,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user_id: UserId, fields: ProfileFields) -> Self {
        Self {
            profile_id: ProfileId::new(),
            user_id,
            status: fields.status,
            skills: fields.skills,
            company: fields.company,
            website: fields.website,
            location: fields.location,
            bio: fields.bio,
            github_username: fields.github_username,
            social: fields.social,
            experience: Vec::new(),
            education: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Overwrite the fields the request provided; keep the rest
    pub fn apply(&mut self, fields: ProfileFields) {
        self.status = fields.status;
        self.skills = fields.skills;
        if fields.company.is_some() {
            self.company = fields.company;
        }
        if fields.website.is_some() {
            self.website = fields.website;
        }
        if fields.location.is_some() {
            self.location = fields.location;
        }
        if fields.bio.is_some() {
            self.bio = fields.bio;
        }
        if fields.github_username.is_some() {
            self.github_username = fields.github_username;
        }
        self.social = fields.social;
    }

    /// Newest entry first
    pub fn add_experience(&mut self, experience: Experience) {
        self.experience.insert(0, experience);
    }

    /// `false` if no entry has that id
    pub fn remove_experience(&mut self, id: &ExperienceId) -> bool {
        let before = self.experience.len();
        self.experience.retain(|e| &e.id != id);
        self.experience.len() != before
    }

    /// Newest entry first
    pub fn add_education(&mut self, education: Education) {
        self.education.insert(0, education);
    }

    /// `false` if no entry has that id
    pub fn remove_education(&mut self, id: &EducationId) -> bool {
        let before = self.education.len();
        self.education.retain(|e| &e.id != id);
        self.education.len() != before
    }
}

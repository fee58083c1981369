//! API DTOs (Data Transfer Objects)

use auth::UserSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{AddEducationInput, AddExperienceInput, ProfileView, UpsertProfileInput};
use crate::domain::entity::{
    education::Education, experience::Experience, profile::Social,
};
use crate::domain::value_object::{ProfileId, skills::SkillsInput};

// ============================================================================
// Requests
// ============================================================================

/// Create-or-update profile request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileRequest {
    pub status: Option<String>,
    pub skills: Option<SkillsInput>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "githubusername")]
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl From<ProfileRequest> for UpsertProfileInput {
    fn from(req: ProfileRequest) -> Self {
        Self {
            status: req.status,
            skills: req.skills,
            company: req.company,
            website: req.website,
            location: req.location,
            bio: req.bio,
            github_username: req.github_username,
            youtube: req.youtube,
            twitter: req.twitter,
            facebook: req.facebook,
            linkedin: req.linkedin,
            instagram: req.instagram,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<ExperienceRequest> for AddExperienceInput {
    fn from(req: ExperienceRequest) -> Self {
        Self {
            title: req.title,
            company: req.company,
            location: req.location,
            from: req.from,
            to: req.to,
            current: req.current,
            description: req.description,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EducationRequest {
    pub school: Option<String>,
    pub degree: Option<String>,
    #[serde(rename = "fieldofstudy")]
    pub field_of_study: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<EducationRequest> for AddEducationInput {
    fn from(req: EducationRequest) -> Self {
        Self {
            school: req.school,
            degree: req.degree,
            field_of_study: req.field_of_study,
            from: req.from,
            to: req.to,
            current: req.current,
            description: req.description,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Profile with its owner's public summary
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: ProfileId,
    pub user: Option<UserSummary>,
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "githubusername")]
    pub github_username: Option<String>,
    pub social: Social,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

impl From<ProfileView> for ProfileResponse {
    fn from(view: ProfileView) -> Self {
        let p = view.profile;
        Self {
            id: p.profile_id,
            user: view.owner,
            status: p.status,
            skills: p.skills.as_slice().to_vec(),
            company: p.company,
            website: p.website,
            location: p.location,
            bio: p.bio,
            github_username: p.github_username,
            social: p.social,
            experience: p.experience,
            education: p.education,
            date: p.created_at,
        }
    }
}

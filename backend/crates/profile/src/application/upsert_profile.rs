//! Create-or-update Profile Use Case

use std::sync::Arc;

use auth::UserRepository;
use kernel::error::field::FieldErrors;

use crate::application::queries::ProfileView;
use crate::domain::entity::profile::{Profile, ProfileFields, Social};
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::{
    UserId,
    skills::{Skills, SkillsInput},
    text,
};
use crate::error::{ProfileError, ProfileResult};

/// Raw request fields; blank strings count as absent
#[derive(Debug, Default)]
pub struct UpsertProfileInput {
    pub status: Option<String>,
    pub skills: Option<SkillsInput>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl UpsertProfileInput {
    fn validate(self) -> ProfileResult<ProfileFields> {
        let mut errors = FieldErrors::new();
        let status = errors.check("status", text::required(self.status, "Status is required"));
        let skills = errors.check("skills", Skills::new(self.skills));

        let (Some(status), Some(skills)) = (status, skills) else {
            return Err(ProfileError::Validation(errors.into_vec()));
        };

        Ok(ProfileFields {
            status,
            skills,
            company: text::optional(self.company),
            website: text::optional(self.website),
            location: text::optional(self.location),
            bio: text::optional(self.bio),
            github_username: text::optional(self.github_username),
            social: Social {
                youtube: text::optional(self.youtube),
                twitter: text::optional(self.twitter),
                facebook: text::optional(self.facebook),
                linkedin: text::optional(self.linkedin),
                instagram: text::optional(self.instagram),
            },
        })
    }
}

pub struct UpsertProfileUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    profiles: Arc<P>,
    users: Arc<U>,
}

impl<P, U> UpsertProfileUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    pub fn new(profiles: Arc<P>, users: Arc<U>) -> Self {
        Self { profiles, users }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        input: UpsertProfileInput,
    ) -> ProfileResult<ProfileView> {
        let fields = input.validate()?;

        let profile = match self.profiles.find_by_user(user_id).await? {
            Some(mut existing) => {
                existing.apply(fields);
                tracing::info!(user_id = %user_id, "Profile updated");
                existing
            }
            None => {
                tracing::info!(user_id = %user_id, "Profile created");
                Profile::new(*user_id, fields)
            }
        };

        self.profiles.save(&profile).await?;

        ProfileView::load(self.users.as_ref(), profile).await
    }
}

//! Experience entries

use std::sync::Arc;

use auth::UserRepository;
use kernel::error::field::FieldErrors;

use crate::application::queries::ProfileView;
use crate::domain::entity::experience::Experience;
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::{ExperienceId, UserId, date, text};
use crate::error::{ProfileError, ProfileResult};

#[derive(Debug, Default)]
pub struct AddExperienceInput {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

impl AddExperienceInput {
    fn validate(self) -> ProfileResult<Experience> {
        let mut errors = FieldErrors::new();
        let title = errors.check("title", text::required(self.title, "Title is required"));
        let company = errors.check("company", text::required(self.company, "Company is required"));
        let from = errors.check("from", date::required(self.from.as_deref(), "From"));
        let to = errors.check("to", date::optional(self.to.as_deref(), "To"));

        let (Some(title), Some(company), Some(from), Some(to)) = (title, company, from, to) else {
            return Err(ProfileError::Validation(errors.into_vec()));
        };

        Ok(Experience {
            id: ExperienceId::new(),
            title,
            company,
            location: text::optional(self.location),
            from,
            to,
            current: self.current,
            description: text::optional(self.description),
        })
    }
}

pub struct AddExperienceUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    profiles: Arc<P>,
    users: Arc<U>,
}

impl<P, U> AddExperienceUseCase<P, U>
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
        input: AddExperienceInput,
    ) -> ProfileResult<ProfileView> {
        let experience = input.validate()?;

        let mut profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;

        profile.add_experience(experience);
        self.profiles.save(&profile).await?;

        ProfileView::load(self.users.as_ref(), profile).await
    }
}

pub struct RemoveExperienceUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    profiles: Arc<P>,
    users: Arc<U>,
}

impl<P, U> RemoveExperienceUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    pub fn new(profiles: Arc<P>, users: Arc<U>) -> Self {
        Self { profiles, users }
    }

    pub async fn execute(&self, user_id: &UserId, raw_exp_id: &str) -> ProfileResult<ProfileView> {
        let exp_id: ExperienceId = raw_exp_id
            .parse()
            .map_err(|_| ProfileError::ExperienceNotFound)?;

        let mut profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;

        if !profile.remove_experience(&exp_id) {
            return Err(ProfileError::ExperienceNotFound);
        }
        self.profiles.save(&profile).await?;

        ProfileView::load(self.users.as_ref(), profile).await
    }
}

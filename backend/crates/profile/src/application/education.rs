//! Education entries

use std::sync::Arc;

use auth::UserRepository;
use kernel::error::field::FieldErrors;

use crate::application::queries::ProfileView;
use crate::domain::entity::education::Education;
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::{EducationId, UserId, date, text};
use crate::error::{ProfileError, ProfileResult};

#[derive(Debug, Default)]
pub struct AddEducationInput {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

impl AddEducationInput {
    fn validate(self) -> ProfileResult<Education> {
        let mut errors = FieldErrors::new();
        let school = errors.check("school", text::required(self.school, "School is required"));
        let degree = errors.check("degree", text::required(self.degree, "Degree is required"));
        let field_of_study = errors.check(
            "fieldofstudy",
            text::required(self.field_of_study, "Field of study is required"),
        );
        let from = errors.check("from", date::required(self.from.as_deref(), "From"));
        let to = errors.check("to", date::optional(self.to.as_deref(), "To"));

        let (Some(school), Some(degree), Some(field_of_study), Some(from), Some(to)) =
            (school, degree, field_of_study, from, to)
        else {
            return Err(ProfileError::Validation(errors.into_vec()));
        };

        Ok(Education {
            id: EducationId::new(),
            school,
            degree,
            field_of_study,
            from,
            to,
            current: self.current,
            description: text::optional(self.description),
        })
    }
}

pub struct AddEducationUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    profiles: Arc<P>,
    users: Arc<U>,
}

impl<P, U> AddEducationUseCase<P, U>
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
        input: AddEducationInput,
    ) -> ProfileResult<ProfileView> {
        let education = input.validate()?;

        let mut profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;

        profile.add_education(education);
        self.profiles.save(&profile).await?;

        ProfileView::load(self.users.as_ref(), profile).await
    }
}

pub struct RemoveEducationUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    profiles: Arc<P>,
    users: Arc<U>,
}

impl<P, U> RemoveEducationUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    pub fn new(profiles: Arc<P>, users: Arc<U>) -> Self {
        Self { profiles, users }
    }

    pub async fn execute(&self, user_id: &UserId, raw_edu_id: &str) -> ProfileResult<ProfileView> {
        let edu_id: EducationId = raw_edu_id
            .parse()
            .map_err(|_| ProfileError::EducationNotFound)?;

        let mut profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;

        if !profile.remove_education(&edu_id) {
            return Err(ProfileError::EducationNotFound);
        }
        self.profiles.save(&profile).await?;

        ProfileView::load(self.users.as_ref(), profile).await
    }
}

//! Profile queries
//!
//! Every profile is returned together with its owner's public summary.

use std::sync::Arc;

use auth::{UserRepository, UserSummary};

use crate::domain::entity::profile::Profile;
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::UserId;
use crate::error::{ProfileError, ProfileResult};

/// Profile plus owner; `owner` is `None` only for a profile whose account
/// deletion stopped part way
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: Profile,
    pub owner: Option<UserSummary>,
}

impl ProfileView {
    pub(crate) async fn load<U: UserRepository>(users: &U, profile: Profile) -> ProfileResult<Self> {
        let owner = users
            .find_by_id(&profile.user_id)
            .await?
            .map(|u| u.summary());
        Ok(Self { profile, owner })
    }
}

/// Caller's own profile
pub struct GetOwnProfileUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    profiles: Arc<P>,
    users: Arc<U>,
}

impl<P, U> GetOwnProfileUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    pub fn new(profiles: Arc<P>, users: Arc<U>) -> Self {
        Self { profiles, users }
    }

    pub async fn execute(&self, user_id: &UserId) -> ProfileResult<ProfileView> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;

        ProfileView::load(self.users.as_ref(), profile).await
    }
}

/// Public lookup by owner id
///
/// The id comes straight from the URL; anything that is not a valid id
/// is reported the same way as an unknown one.
pub struct GetProfileByUserUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    inner: GetOwnProfileUseCase<P, U>,
}

impl<P, U> GetProfileByUserUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    pub fn new(profiles: Arc<P>, users: Arc<U>) -> Self {
        Self {
            inner: GetOwnProfileUseCase::new(profiles, users),
        }
    }

    pub async fn execute(&self, raw_user_id: &str) -> ProfileResult<ProfileView> {
        let user_id: UserId = raw_user_id
            .parse()
            .map_err(|_| ProfileError::ProfileNotFound)?;

        self.inner.execute(&user_id).await
    }
}

/// Every profile
pub struct ListProfilesUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    profiles: Arc<P>,
    users: Arc<U>,
}

impl<P, U> ListProfilesUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    pub fn new(profiles: Arc<P>, users: Arc<U>) -> Self {
        Self { profiles, users }
    }

    pub async fn execute(&self) -> ProfileResult<Vec<ProfileView>> {
        let profiles = self.profiles.list().await?;

        let mut views = Vec::with_capacity(profiles.len());
        for profile in profiles {
            views.push(ProfileView::load(self.users.as_ref(), profile).await?);
        }
        Ok(views)
    }
}

//! HTTP Handlers

use auth::{Identity, SessionGate, UserRepository};
use axum::Json;
use axum::extract::{FromRef, Path, State};
use kernel::extract::JsonBody;
use std::sync::Arc;

use crate::application::{
    AddEducationUseCase, AddExperienceUseCase, GetOwnProfileUseCase, GetProfileByUserUseCase,
    GithubReposUseCase, ListProfilesUseCase, RemoveEducationUseCase, RemoveExperienceUseCase,
    UpsertProfileUseCase,
};
use crate::domain::entity::repo::RepoSummary;
use crate::domain::repository::{ProfileRepository, RepoDirectory};
use crate::error::ProfileResult;
use crate::presentation::dto::{
    EducationRequest, ExperienceRequest, ProfileRequest, ProfileResponse,
};

/// Shared state for profile handlers
#[derive(Clone)]
pub struct ProfilesAppState<P, U, G>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    pub profiles: Arc<P>,
    pub users: Arc<U>,
    pub repos: Arc<G>,
    pub gate: SessionGate,
}

impl<P, U, G> FromRef<ProfilesAppState<P, U, G>> for SessionGate
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &ProfilesAppState<P, U, G>) -> Self {
        state.gate.clone()
    }
}

// ============================================================================
// Profiles
// ============================================================================

/// GET /api/profiles/me
pub async fn own_profile<P, U, G>(
    State(state): State<ProfilesAppState<P, U, G>>,
    identity: Identity,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    let view = GetOwnProfileUseCase::new(state.profiles.clone(), state.users.clone())
        .execute(&identity.id())
        .await?;

    Ok(Json(view.into()))
}

/// POST /api/profiles
pub async fn upsert_profile<P, U, G>(
    State(state): State<ProfilesAppState<P, U, G>>,
    identity: Identity,
    JsonBody(req): JsonBody<ProfileRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    let view = UpsertProfileUseCase::new(state.profiles.clone(), state.users.clone())
        .execute(&identity.id(), req.into())
        .await?;

    Ok(Json(view.into()))
}

/// GET /api/profiles
pub async fn list_profiles<P, U, G>(
    State(state): State<ProfilesAppState<P, U, G>>,
) -> ProfileResult<Json<Vec<ProfileResponse>>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    let views = ListProfilesUseCase::new(state.profiles.clone(), state.users.clone())
        .execute()
        .await?;

    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// GET /api/profiles/user/{user_id}
pub async fn profile_by_user<P, U, G>(
    State(state): State<ProfilesAppState<P, U, G>>,
    Path(user_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    let view = GetProfileByUserUseCase::new(state.profiles.clone(), state.users.clone())
        .execute(&user_id)
        .await?;

    Ok(Json(view.into()))
}

// ============================================================================
// Experience / Education
// ============================================================================

/// PUT /api/profiles/experience
pub async fn add_experience<P, U, G>(
    State(state): State<ProfilesAppState<P, U, G>>,
    identity: Identity,
    JsonBody(req): JsonBody<ExperienceRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    let view = AddExperienceUseCase::new(state.profiles.clone(), state.users.clone())
        .execute(&identity.id(), req.into())
        .await?;

    Ok(Json(view.into()))
}

/// DELETE /api/profiles/experience/{exp_id}
pub async fn remove_experience<P, U, G>(
    State(state): State<ProfilesAppState<P, U, G>>,
    identity: Identity,
    Path(exp_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    let view = RemoveExperienceUseCase::new(state.profiles.clone(), state.users.clone())
        .execute(&identity.id(), &exp_id)
        .await?;

    Ok(Json(view.into()))
}

/// PUT /api/profiles/education
pub async fn add_education<P, U, G>(
    State(state): State<ProfilesAppState<P, U, G>>,
    identity: Identity,
    JsonBody(req): JsonBody<EducationRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    let view = AddEducationUseCase::new(state.profiles.clone(), state.users.clone())
        .execute(&identity.id(), req.into())
        .await?;

    Ok(Json(view.into()))
}

/// DELETE /api/profiles/education/{edu_id}
pub async fn remove_education<P, U, G>(
    State(state): State<ProfilesAppState<P, U, G>>,
    identity: Identity,
    Path(edu_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    let view = RemoveEducationUseCase::new(state.profiles.clone(), state.users.clone())
        .execute(&identity.id(), &edu_id)
        .await?;

    Ok(Json(view.into()))
}

// ============================================================================
// GitHub
// ============================================================================

/// GET /api/profiles/github/{username}
pub async fn github_repos<P, U, G>(
    State(state): State<ProfilesAppState<P, U, G>>,
    Path(username): Path<String>,
) -> ProfileResult<Json<Vec<RepoSummary>>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    let repos = GithubReposUseCase::new(state.repos.clone())
        .execute(&username)
        .await?;

    Ok(Json(repos))
}

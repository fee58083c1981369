//! Profiles Router

use auth::{SessionGate, UserRepository};
use axum::{
    Router,
    routing::{delete, get, put},
};
use std::sync::Arc;

use crate::domain::repository::{ProfileRepository, RepoDirectory};
use crate::presentation::handlers::{self, ProfilesAppState};

/// Create the profiles router for any repository implementation
pub fn profiles_router<P, U, G>(profiles: P, users: U, repos: G, gate: SessionGate) -> Router
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    let state = ProfilesAppState {
        profiles: Arc::new(profiles),
        users: Arc::new(users),
        repos: Arc::new(repos),
        gate,
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_profiles::<P, U, G>).post(handlers::upsert_profile::<P, U, G>),
        )
        .route("/me", get(handlers::own_profile::<P, U, G>))
        .route("/user/{user_id}", get(handlers::profile_by_user::<P, U, G>))
        .route("/experience", put(handlers::add_experience::<P, U, G>))
        .route(
            "/experience/{exp_id}",
            delete(handlers::remove_experience::<P, U, G>),
        )
        .route("/education", put(handlers::add_education::<P, U, G>))
        .route(
            "/education/{edu_id}",
            delete(handlers::remove_education::<P, U, G>),
        )
        .route("/github/{username}", get(handlers::github_repos::<P, U, G>))
        .with_state(state)
}

//! Accounts Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use kernel::owner::OwnedResourceStore;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session_gate::SessionGate;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AccountsAppState};

/// Create the accounts router for any repository implementation
///
/// `profiles` and `posts` are the stores purged when an account is deleted.
pub fn accounts_router<U, P, Q>(users: U, profiles: P, posts: Q, config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: OwnedResourceStore + Clone + Send + Sync + 'static,
    Q: OwnedResourceStore + Clone + Send + Sync + 'static,
{
    let state = AccountsAppState {
        users: Arc::new(users),
        profiles: Arc::new(profiles),
        posts: Arc::new(posts),
        gate: SessionGate::new(config.clone()),
        config,
    };

    Router::new()
        .route("/register", post(handlers::register::<U, P, Q>))
        .route("/login", post(handlers::login::<U, P, Q>))
        .route("/logout", post(handlers::logout::<U, P, Q>))
        .route("/info", get(handlers::account_info::<U, P, Q>))
        .route("/", delete(handlers::delete_account::<U, P, Q>))
        .with_state(state)
}

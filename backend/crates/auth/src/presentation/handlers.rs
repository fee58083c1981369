//! HTTP Handlers

use axum::Json;
use axum::extract::{FromRef, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::extract::JsonBody;
use kernel::owner::OwnedResourceStore;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AccountInfoUseCase, DeleteAccountUseCase, Identity, LoginInput, LoginUseCase, LogoutUseCase,
    RegisterInput, RegisterUseCase, SessionGate,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AccountResponse, LoginRequest, MessageResponse, RegisterRequest, TokenResponse,
};

/// Shared state for account handlers
///
/// Holds the owner-scoped stores of the other contexts so that account
/// deletion can purge them.
#[derive(Clone)]
pub struct AccountsAppState<U, P, Q>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: OwnedResourceStore + Clone + Send + Sync + 'static,
    Q: OwnedResourceStore + Clone + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub profiles: Arc<P>,
    pub posts: Arc<Q>,
    pub config: Arc<AuthConfig>,
    pub gate: SessionGate,
}

impl<U, P, Q> FromRef<AccountsAppState<U, P, Q>> for SessionGate
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: OwnedResourceStore + Clone + Send + Sync + 'static,
    Q: OwnedResourceStore + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &AccountsAppState<U, P, Q>) -> Self {
        state.gate.clone()
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/accounts/register
pub async fn register<U, P, Q>(
    State(state): State<AccountsAppState<U, P, Q>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: OwnedResourceStore + Clone + Send + Sync + 'static,
    Q: OwnedResourceStore + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.users.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state.config.session_cookie(&output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(TokenResponse {
            token: output.token,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/accounts/login
pub async fn login<U, P, Q>(
    State(state): State<AccountsAppState<U, P, Q>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: OwnedResourceStore + Clone + Send + Sync + 'static,
    Q: OwnedResourceStore + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.users.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state.config.session_cookie(&output.token);

    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)]))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/accounts/logout
///
/// Not gated: clearing a cookie is harmless whether or not it was valid.
pub async fn logout<U, P, Q>(State(state): State<AccountsAppState<U, P, Q>>) -> impl IntoResponse
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: OwnedResourceStore + Clone + Send + Sync + 'static,
    Q: OwnedResourceStore + Clone + Send + Sync + 'static,
{
    let cookie = LogoutUseCase::new(state.config.clone()).execute();

    (StatusCode::OK, [(header::SET_COOKIE, cookie)])
}

// ============================================================================
// Account info
// ============================================================================

/// GET /api/accounts/info
pub async fn account_info<U, P, Q>(
    State(state): State<AccountsAppState<U, P, Q>>,
    identity: Identity,
) -> AuthResult<Json<AccountResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: OwnedResourceStore + Clone + Send + Sync + 'static,
    Q: OwnedResourceStore + Clone + Send + Sync + 'static,
{
    let user = AccountInfoUseCase::new(state.users.clone())
        .execute(&identity.id())
        .await?;

    Ok(Json(user.into()))
}

// ============================================================================
// Delete account
// ============================================================================

/// DELETE /api/accounts
pub async fn delete_account<U, P, Q>(
    State(state): State<AccountsAppState<U, P, Q>>,
    identity: Identity,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: OwnedResourceStore + Clone + Send + Sync + 'static,
    Q: OwnedResourceStore + Clone + Send + Sync + 'static,
{
    let use_case = DeleteAccountUseCase::new(
        state.users.clone(),
        state.profiles.clone(),
        state.posts.clone(),
        state.config.clone(),
    );

    use_case.execute(&identity.id()).await?;

    let cookie = state.config.clear_session_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            msg: "User deleted",
        }),
    ))
}

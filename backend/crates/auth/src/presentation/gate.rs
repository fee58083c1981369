//! `Identity` extractor
//!
//! Any handler that takes an [`Identity`] argument is gated: the request is
//! rejected with 401 before the handler runs unless the session cookie
//! carries a valid token. Works with any router state that can hand out a
//! [`SessionGate`] via `FromRef`.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::application::session_gate::{Identity, SessionGate};
use crate::error::AuthError;

impl<S> FromRequestParts<S> for Identity
where
    SessionGate: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        SessionGate::from_ref(state).check(&parts.headers)
    }
}

//! Router composition

use std::sync::Arc;

use auth::{AuthConfig, SessionGate, UserRepository, accounts_router};
use axum::http::{HeaderValue, Method, header};
use axum::{Router, routing::get};
use kernel::owner::OwnedResourceStore;
use post::{PostRepository, posts_router};
use profile::{ProfileRepository, RepoDirectory, profiles_router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the full API from its stores
///
/// The profile and post stores are handed to the accounts router too, so
/// that deleting an account can purge them.
pub fn build_router<U, P, Q, G>(
    users: U,
    profiles: P,
    posts: Q,
    repos: G,
    auth_config: Arc<AuthConfig>,
    client_origins: &[String],
) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: ProfileRepository + OwnedResourceStore + Clone + Send + Sync + 'static,
    Q: PostRepository + OwnedResourceStore + Clone + Send + Sync + 'static,
    G: RepoDirectory + Clone + Send + Sync + 'static,
{
    let gate = SessionGate::new(auth_config.clone());

    Router::new()
        .route("/", get(|| async { "API Running" }))
        .nest(
            "/api/accounts",
            accounts_router(users.clone(), profiles.clone(), posts.clone(), auth_config),
        )
        .nest(
            "/api/profiles",
            profiles_router(profiles, users.clone(), repos, gate.clone()),
        )
        .nest("/api/posts", posts_router(posts, users, gate))
        .layer(TraceLayer::new_for_http())
        .layer(cors(client_origins))
}

fn cors(client_origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = client_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}

//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod app;
mod config;


use std::net::SocketAddr;
use std::sync::Arc;

use auth::PgUserRepository;
use post::PgPostRepository;
use profile::{GithubRepoDirectory, PgProfileRepository};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "linkdev_api=info,auth=info,profile=info,post=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing signing secret stops the process here
    let config = ApiConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(config.database.connect_options()?)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let app = app::build_router(
        PgUserRepository::new(pool.clone()),
        PgProfileRepository::new(pool.clone()),
        PgPostRepository::new(pool),
        GithubRepoDirectory::new(config.github.clone())?,
        Arc::new(config.auth.clone()),
        &config.client_origins,
    );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

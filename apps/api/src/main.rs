mod auth;
mod config;
mod db;
mod errors;
mod models;
mod routes;
mod state;
mod videos;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::users::ensure_seed_users;
use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::videos::scoring::ScoringConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Craft Tracker API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and apply pending migrations
    let db = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&db).await?;

    // Create the fixed accounts if seed passwords were provided
    ensure_seed_users(&db, &config).await?;

    // Build app state; scoring knobs keep their historical defaults
    let state = AppState {
        db,
        config: config.clone(),
        scoring: ScoringConfig::default(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

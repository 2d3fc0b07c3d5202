use sqlx::PgPool;

use crate::config::Config;
use crate::videos::scoring::ScoringConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Scoring knobs (weights, scale, streak threshold, recent window).
    /// Defaults match the historical fixed values; kept here so the engine
    /// is parameterized rather than literal-laden.
    pub scoring: ScoringConfig,
}

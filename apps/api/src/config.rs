use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub port: u16,
    pub rust_log: String,
    /// When set, the fixed admin/editor accounts are created at startup.
    pub seed_admin_password: Option<String>,
    pub seed_editor_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            jwt_secret: require_env("JWT_SECRET")?,
            token_ttl_hours: std::env::var("TOKEN_TTL_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse::<i64>()
                .context("TOKEN_TTL_HOURS must be a whole number of hours")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            seed_admin_password: std::env::var("SEED_ADMIN_PASSWORD").ok(),
            seed_editor_password: std::env::var("SEED_EDITOR_PASSWORD").ok(),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

use anyhow::Result;
use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::config::Config;
use crate::models::user::UserRow;

pub async fn find_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Creates the two fixed accounts (admin, editor) when their passwords are
/// provided via env. Existing rows are left untouched, so rotating a seed
/// password requires deleting the row first.
pub async fn ensure_seed_users(pool: &PgPool, config: &Config) -> Result<()> {
    let seeds = [
        ("admin", "admin", config.seed_admin_password.as_deref()),
        ("editor", "editor", config.seed_editor_password.as_deref()),
    ];
    for (username, role, password) in seeds {
        let Some(password) = password else { continue };
        let inserted = insert_if_absent(pool, username, role, password).await?;
        if inserted {
            info!("Seeded user '{username}'");
        }
    }
    Ok(())
}

async fn insert_if_absent(
    pool: &PgPool,
    username: &str,
    role: &str,
    password: &str,
) -> Result<bool> {
    let password_hash = hash_password(password)?;
    let result = sqlx::query(
        r#"
        INSERT INTO users (id, username, password_hash, role, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (username) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .bind(password_hash)
    .bind(role)
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::video::{VideoRow, VideoSubmission};
use crate::videos::analytics::ScoreRow;
use crate::videos::scoring::Scores;

// Every query here filters on user_id: ownership is enforced at this layer,
// never inside scoring. A row owned by another user is indistinguishable
// from a missing row.

pub async fn list_videos(pool: &PgPool, user_id: Uuid) -> Result<Vec<VideoRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM videos WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get_video(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
) -> Result<Option<VideoRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM videos WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_video(
    pool: &PgPool,
    user_id: Uuid,
    submission: &VideoSubmission,
    scores: Scores,
) -> Result<VideoRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO videos
            (id, user_id, title, playlist, script, sound, experience_inputs,
             distribution_metrics, craft_score, experience_score, delta_score, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&submission.title)
    .bind(submission.playlist.as_str())
    .bind(Json(&submission.script))
    .bind(Json(&submission.sound))
    .bind(Json(&submission.experience_inputs))
    .bind(Json(&submission.distribution_metrics))
    .bind(scores.craft)
    .bind(scores.experience)
    .bind(scores.delta)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Full replace of the mutable fields plus freshly recomputed scores.
/// `created_at` is immutable; only `updated_at` moves.
pub async fn update_video(
    pool: &PgPool,
    user_id: Uuid,
    id: Uuid,
    submission: &VideoSubmission,
    scores: Scores,
) -> Result<Option<VideoRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE videos
        SET title = $1, playlist = $2, script = $3, sound = $4,
            experience_inputs = $5, distribution_metrics = $6,
            craft_score = $7, experience_score = $8, delta_score = $9,
            updated_at = $10
        WHERE id = $11 AND user_id = $12
        RETURNING *
        "#,
    )
    .bind(&submission.title)
    .bind(submission.playlist.as_str())
    .bind(Json(&submission.script))
    .bind(Json(&submission.sound))
    .bind(Json(&submission.experience_inputs))
    .bind(Json(&submission.distribution_metrics))
    .bind(scores.craft)
    .bind(scores.experience)
    .bind(scores.delta)
    .bind(Utc::now())
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_video(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM videos WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Score columns only, newest first, ready to hand to `aggregate` and
/// `current_streak` which both rely on this ordering.
pub async fn fetch_score_rows(pool: &PgPool, user_id: Uuid) -> Result<Vec<ScoreRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT craft_score, experience_score, delta_score
        FROM videos
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::auth::jwt::AuthUser;
use crate::errors::AppError;
use crate::models::video::{VideoRow, VideoSubmission};
use crate::state::AppState;
use crate::videos::analytics::{aggregate, current_streak, AnalyticsSummary};
use crate::videos::scoring::score_entry;
use crate::videos::store;
use crate::videos::validation::validate_submission;

/// GET /api/v1/videos
pub async fn handle_list_videos(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<VideoRow>>, AppError> {
    let videos = store::list_videos(&state.db, user.sub).await?;
    Ok(Json(videos))
}

/// GET /api/v1/videos/:id
pub async fn handle_get_video(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<VideoRow>, AppError> {
    let video = store::get_video(&state.db, user.sub, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {id} not found")))?;
    Ok(Json(video))
}

/// POST /api/v1/videos
pub async fn handle_create_video(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(submission): Json<VideoSubmission>,
) -> Result<(StatusCode, Json<VideoRow>), AppError> {
    validate_submission(&submission).map_err(|problems| AppError::Validation(problems.join("; ")))?;
    let scores = score_entry(
        &submission.script,
        &submission.sound,
        &submission.experience_inputs,
        &state.scoring,
    );
    let video = store::insert_video(&state.db, user.sub, &submission, scores).await?;
    tracing::info!(video_id = %video.id, craft = scores.craft, experience = scores.experience, "video created");
    Ok((StatusCode::CREATED, Json(video)))
}

/// PUT /api/v1/videos/:id
/// Full replace; scores are recomputed from the new inputs, never patched.
pub async fn handle_update_video(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(submission): Json<VideoSubmission>,
) -> Result<Json<VideoRow>, AppError> {
    validate_submission(&submission).map_err(|problems| AppError::Validation(problems.join("; ")))?;
    let scores = score_entry(
        &submission.script,
        &submission.sound,
        &submission.experience_inputs,
        &state.scoring,
    );
    let video = store::update_video(&state.db, user.sub, id, &submission, scores)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {id} not found")))?;
    Ok(Json(video))
}

/// DELETE /api/v1/videos/:id
pub async fn handle_delete_video(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = store::delete_video(&state.db, user.sub, id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Video {id} not found")));
    }
    Ok(Json(json!({ "message": "Video deleted successfully" })))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    #[serde(flatten)]
    pub summary: AnalyticsSummary,
    pub current_streak: usize,
}

/// GET /api/v1/videos/stats/analytics
pub async fn handle_analytics(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let rows = store::fetch_score_rows(&state.db, user.sub).await?;
    let summary = aggregate(&rows, &state.scoring);
    let streak = current_streak(&rows, state.scoring.streak_threshold);
    Ok(Json(AnalyticsResponse {
        summary,
        current_streak: streak,
    }))
}

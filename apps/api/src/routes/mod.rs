pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::state::AppState;
use crate::videos::handlers as videos;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Identity
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/auth/me", get(auth::handle_me))
        // Videos (all user-scoped via the AuthUser extractor)
        .route(
            "/api/v1/videos",
            get(videos::handle_list_videos).post(videos::handle_create_video),
        )
        .route(
            "/api/v1/videos/stats/analytics",
            get(videos::handle_analytics),
        )
        .route(
            "/api/v1/videos/:id",
            get(videos::handle_get_video)
                .put(videos::handle_update_video)
                .delete(videos::handle_delete_video),
        )
        .with_state(state)
}

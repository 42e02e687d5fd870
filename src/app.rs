use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/checkin", post(handlers::post_checkin))
        .route("/api/checkin/remove", post(handlers::post_remove))
        .route("/api/range", post(handlers::post_range))
        .route("/api/fast-start", post(handlers::post_fast_start))
        .route("/api/challenge", post(handlers::post_challenge))
        .route("/api/reset", post(handlers::post_reset))
        .route("/api/export", get(handlers::get_export))
        .route("/api/import", post(handlers::post_import))
        .with_state(state)
}

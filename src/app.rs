use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/github", get(handlers::github))
        .route("/shows", get(handlers::shows))
        .route("/api/activity", get(handlers::get_activity))
        .route("/api/activity/days", get(handlers::get_activity_days))
        .route("/api/activity/commits", get(handlers::get_recent_commits))
        .route("/api/shows", get(handlers::get_shows))
        .with_state(state)
}

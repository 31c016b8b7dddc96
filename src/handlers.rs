use crate::errors::AppError;
use crate::feed::{ActivityFeedModel, FilterSelection, RECENT_COMMITS_LIMIT};
use crate::models::{
    ActivityDaysResponse, ActivityFeedResponse, CommitsQuery, FeedQuery, ShowRecord,
};
use crate::state::AppState;
use crate::ui::{render_activity_page, render_index, render_shows_page};
use crate::view::DisplayState;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::error;

const MAX_COMMITS_LIMIT: usize = 100;

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn github(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Html<String>, AppError> {
    let model = feed_model(&state, &query)?;
    Ok(Html(render_activity_page(&model, &state.display)))
}

pub async fn get_activity(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let model = feed_model(&state, &query)?;
    let response = ActivityFeedResponse {
        selection: model.selection(),
        counts: model.counts(),
        activities: model.filtered(),
    };
    let body = serde_json::to_value(&response).map_err(AppError::internal)?;
    Ok(Json(body))
}

pub async fn get_activity_days(State(state): State<AppState>) -> Json<ActivityDaysResponse> {
    let model = ActivityFeedModel::new(state.activities.clone());
    Json(ActivityDaysResponse {
        days: model.daily_counts(),
    })
}

pub async fn get_recent_commits(
    State(state): State<AppState>,
    Query(query): Query<CommitsQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let limit = query
        .limit
        .unwrap_or(RECENT_COMMITS_LIMIT)
        .min(MAX_COMMITS_LIMIT);
    let model = ActivityFeedModel::new(state.activities.clone());
    let body = serde_json::to_value(model.recent_commits(limit)).map_err(AppError::internal)?;
    Ok(Json(body))
}

pub async fn shows(State(state): State<AppState>) -> Html<String> {
    let view = DisplayState::from_load(state.shows.load().await);
    if let DisplayState::LoadFailure(message) = &view {
        error!("error loading shows: {message}");
    }
    Html(render_shows_page(&view, &state.display))
}

pub async fn get_shows(State(state): State<AppState>) -> Result<Json<Vec<ShowRecord>>, AppError> {
    let shows = state.shows.load().await.inspect_err(|err| {
        error!("error loading shows: {err}");
    })?;
    Ok(Json(shows))
}

fn feed_model(state: &AppState, query: &FeedQuery) -> Result<ActivityFeedModel, AppError> {
    let selection = match query.filter.as_deref() {
        Some(value) if !value.is_empty() => value.parse::<FilterSelection>()?,
        _ => FilterSelection::All,
    };

    let mut model = ActivityFeedModel::new(state.activities.clone());
    model.set_selection(selection);
    Ok(model)
}

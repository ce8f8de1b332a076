use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::activities::core::activity::ActivityRecord;
use crate::shared::inbound::http_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
) -> impl IntoResponse {
    match state.queries.get_activity(&activity_name).await {
        Ok(Some(activity)) => Json(ActivityRecord::from(activity)).into_response(),
        Ok(None) => http_response::error(StatusCode::NOT_FOUND, "Activity not found"),
        Err(e) => http_response::internal_error(&e),
    }
}

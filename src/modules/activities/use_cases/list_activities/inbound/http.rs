use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::modules::activities::core::activity::ActivityRecord;
use crate::shared::inbound::http_response;
use crate::shell::state::AppState;

/// Responds with a JSON object keyed by activity name, in seed order.
pub async fn handle(State(state): State<AppState>) -> Response {
    let activities = match state.queries.list_activities().await {
        Ok(activities) => activities,
        Err(e) => return http_response::internal_error(&e),
    };

    let directory: Result<serde_json::Map<String, serde_json::Value>, _> = activities
        .into_iter()
        .map(|activity| {
            let name = activity.name.clone();
            serde_json::to_value(ActivityRecord::from(activity)).map(|record| (name, record))
        })
        .collect();
    match directory {
        Ok(directory) => Json(directory).into_response(),
        Err(e) => http_response::internal_error(&e),
    }
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::application::errors::ApplicationError;
use crate::shared::inbound::http_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<UnregisterParams>,
) -> impl IntoResponse {
    let command = UnregisterFromActivity {
        activity_name: activity_name.clone(),
        email: params.email.clone(),
    };

    match state.unregister_handler.handle(command).await {
        Ok(_) => http_response::message(format!(
            "Unregistered {} from {}",
            params.email, activity_name
        )),
        // Both an unknown activity and an unknown participant are a 404.
        Err(ApplicationError::Domain(reason)) => {
            tracing::warn!(
                activity = %activity_name,
                email = %params.email,
                %reason,
                "unregister rejected"
            );
            http_response::error(StatusCode::NOT_FOUND, reason.to_string())
        }
        Err(e) => http_response::internal_error(&e),
    }
}

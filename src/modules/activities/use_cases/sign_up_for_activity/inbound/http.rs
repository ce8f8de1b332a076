use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::SignUpError;
use crate::shared::application::errors::ApplicationError;
use crate::shared::inbound::http_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignUpParams>,
) -> impl IntoResponse {
    let command = SignUpForActivity {
        activity_name: activity_name.clone(),
        email: params.email.clone(),
    };

    match state.sign_up_handler.handle(command).await {
        Ok(_) => http_response::message(format!(
            "Signed up {} for {}",
            params.email, activity_name
        )),
        Err(ApplicationError::Domain(reason)) => {
            tracing::warn!(
                activity = %activity_name,
                email = %params.email,
                %reason,
                "signup rejected"
            );
            let status = match reason {
                SignUpError::ActivityNotFound => StatusCode::NOT_FOUND,
                SignUpError::AlreadySignedUp => StatusCode::BAD_REQUEST,
            };
            http_response::error(status, reason.to_string())
        }
        Err(e) => http_response::internal_error(&e),
    }
}

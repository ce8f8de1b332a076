use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn message(text: impl Into<String>) -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: text.into(),
        }),
    )
        .into_response()
}

pub fn error(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn internal_error(cause: &dyn std::fmt::Display) -> Response {
    tracing::error!(error = %cause, "request failed");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

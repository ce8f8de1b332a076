use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

use crate::shared::inbound::http_response;

#[derive(Embed)]
#[folder = "static/"]
struct BrowserClient;

fn asset(path: &str) -> Option<Response> {
    let content = <BrowserClient as Embed>::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response(),
    )
}

/// Landing page of the browser client.
pub async fn index() -> Response {
    asset("index.html")
        .unwrap_or_else(|| http_response::error(StatusCode::NOT_FOUND, "Not Found"))
}

pub async fn serve(Path(path): Path<String>) -> Response {
    asset(path.trim_start_matches('/'))
        .unwrap_or_else(|| http_response::error(StatusCode::NOT_FOUND, "Not Found"))
}

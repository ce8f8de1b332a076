use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::get_activity::inbound::http as get_http;
use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::state::AppState;
use crate::shell::static_assets;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(static_assets::index))
        .route("/static/{*path}", get(static_assets::serve))
        .route("/activities", get(list_http::handle))
        .route("/activities/{name}", get(get_http::handle))
        .route("/activities/{name}/signup", post(sign_up_http::handle))
        .route(
            "/activities/{name}/participants",
            delete(unregister_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Landing page
//!
//! `GET /` is safe without credentials. It reports who the caller appears
//! to be and the event title.

use axum::{Json, Router, extract::State, http::HeaderMap, routing::get};
use serde::Serialize;

use crate::auth::{is_authenticated, resolve_user};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(index))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingView {
    pub display_name: String,
    pub title: String,
}

pub async fn index(State(state): State<ServerState>, headers: HeaderMap) -> Json<LandingView> {
    let mut display_name = "(unknown)".to_string();
    if is_authenticated(&headers, &state.jwt_service, &state.access_list).is_err() {
        display_name = "(unauthenticated)".to_string();
    }
    // any valid token names the caller, organizer or not
    if let Ok(user) = resolve_user(&headers, &state.jwt_service) {
        display_name = if user.display_name.is_empty() {
            "(undefined)".to_string()
        } else {
            user.display_name
        };
    }

    Json(LandingView {
        display_name,
        title: state.event_title(),
    })
}

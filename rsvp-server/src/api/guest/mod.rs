//! Guest wizard endpoints
//!
//! | Path | Method | Body |
//! |------|--------|------|
//! | /rsvp/data | GET | - (returns the caller's RSVP) |
//! | /rsvp/data/adventure | PUT | session (shirt, volunteer, hosting, housing read) |
//! | /rsvp/data/payment | PUT | `Payment` |
//!
//! The caller is identified by a guest token whose subject is the RSVP id.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/rsvp/data", get(handler::current))
        .route("/rsvp/data/adventure", put(handler::adventure))
        .route("/rsvp/data/payment", put(handler::payment))
}

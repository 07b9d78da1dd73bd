//! Admin panel views
//!
//! | Path | Body |
//! |------|------|
//! | /rsvps, /payment, /shirts, /housing, /travel | `{ rsvps, attendees }` |
//! | /declines | `{ declines }` |
//! | /volunteers | `{ volunteers }` |
//! | /food | `{ diets, allergies }` |
//! | /settings | `{ settings }` |
//! | /access | `{ settings, accessSetting }` |
//! | /protected | `Ok!` |
//!
//! Every route sits behind [`require_organizer`](crate::auth::require_organizer).

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::{AccessView, DeclinesView, RsvpListing, SettingsView, VolunteersView};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/rsvps", get(handler::rsvps))
        .route("/payment", get(handler::rsvps))
        .route("/shirts", get(handler::rsvps))
        .route("/housing", get(handler::rsvps))
        .route("/travel", get(handler::rsvps))
        .route("/declines", get(handler::declines))
        .route("/volunteers", get(handler::volunteers))
        .route("/food", get(handler::food))
        .route("/settings", get(handler::settings))
        .route("/access", get(handler::access))
        .route("/protected", get(handler::protected))
}

use axum::{Json, extract::State, http::StatusCode};
use shared::client::{AdventureUpdate, PaymentUpdate};
use shared::models::Rsvp;

use crate::auth::Guest;
use crate::core::ServerState;
use crate::utils::AppResult;

pub async fn current(State(state): State<ServerState>, guest: Guest) -> AppResult<Json<Rsvp>> {
    let rsvp = state.rsvps.get(&guest.rsvp_id).await?;
    Ok(Json(rsvp))
}

pub async fn adventure(
    State(state): State<ServerState>,
    guest: Guest,
    Json(update): Json<AdventureUpdate>,
) -> AppResult<StatusCode> {
    state.rsvps.save_adventure(&guest.rsvp_id, update).await?;
    Ok(StatusCode::OK)
}

pub async fn payment(
    State(state): State<ServerState>,
    guest: Guest,
    Json(payment): Json<PaymentUpdate>,
) -> AppResult<StatusCode> {
    state.rsvps.save_payment(&guest.rsvp_id, payment).await?;
    Ok(StatusCode::OK)
}

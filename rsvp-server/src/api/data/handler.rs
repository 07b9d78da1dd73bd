use axum::{Json, extract::State, http::StatusCode};
use shared::client::{PaymentStatusUpdate, ShirtSizeUpdate, ShirtTypeUpdate};
use shared::models::Setting;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::services::FieldEdit;
use crate::utils::AppResult;

pub async fn payment_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(body): Json<PaymentStatusUpdate>,
) -> AppResult<StatusCode> {
    state
        .rsvps
        .edit_field(&body.id, FieldEdit::PaymentStatus(body.status), &user.id)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn shirt_size(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(body): Json<ShirtSizeUpdate>,
) -> AppResult<StatusCode> {
    state
        .rsvps
        .edit_field(&body.id, FieldEdit::ShirtSize(body.size), &user.id)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn shirt_type(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(body): Json<ShirtTypeUpdate>,
) -> AppResult<StatusCode> {
    state
        .rsvps
        .edit_field(&body.id, FieldEdit::ShirtType(body.shirt_type), &user.id)
        .await?;
    Ok(StatusCode::OK)
}

/// Generic setting write; reloads the settings cache
pub async fn setting(
    State(state): State<ServerState>,
    Json(setting): Json<Setting>,
) -> AppResult<StatusCode> {
    state.settings.set_setting(setting).await?;
    Ok(StatusCode::OK)
}

/// Access-list write; applies the new list to the guard
pub async fn access_list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(setting): Json<Setting>,
) -> AppResult<StatusCode> {
    state.settings.set_access_list(setting, &user.id).await?;
    Ok(StatusCode::OK)
}

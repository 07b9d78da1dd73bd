//! Request extractors for authenticated callers

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, resolve_user};
use crate::auth::guard::GuardRejection;
use crate::core::ServerState;
use crate::security_log;

/// Organizer placed in the request extensions by
/// [`require_organizer`](crate::auth::require_organizer)
impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(AppError::not_authenticated)
    }
}

/// Guest caller. The token's subject is the guest's RSVP id.
#[derive(Debug, Clone)]
pub struct Guest {
    pub rsvp_id: String,
    pub display_name: String,
}

impl FromRequestParts<ServerState> for Guest {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let user = resolve_user(&parts.headers, &state.jwt_service).map_err(|rejection| {
            security_log!(
                "WARN",
                "guest_rejected",
                reason = rejection.reason(),
                uri = parts.uri.path().to_string()
            );
            match rejection {
                GuardRejection::MissingToken => AppError::not_authenticated(),
                GuardRejection::Token(JwtError::ExpiredToken) => AppError::token_expired(),
                _ => AppError::invalid_token("Invalid token"),
            }
        })?;

        if !user.is_guest() {
            security_log!("WARN", "guest_rejected", reason = "not_guest", user_id = user.id);
            return Err(AppError::invalid_token("Guest token required"));
        }

        Ok(Guest {
            rsvp_id: user.id,
            display_name: user.display_name,
        })
    }
}

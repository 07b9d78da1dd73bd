//! Organizer guard
//!
//! A caller is an authenticated organizer when the request carries a valid
//! organizer token whose email or id is on the [`AccessList`].

use axum::response::{IntoResponse, Response};
use http::{HeaderMap, StatusCode, header};
use thiserror::Error;

use super::{AccessList, CurrentUser, JwtError, JwtService};

/// Body of every rejected organizer request
pub const REJECTION_BODY: &str = "Nope.";

/// Why the guard turned a request away
#[derive(Debug, Error)]
pub enum GuardRejection {
    #[error("missing authorization header")]
    MissingToken,

    #[error("malformed authorization header")]
    MalformedHeader,

    #[error(transparent)]
    Token(#[from] JwtError),

    #[error("token is not an organizer token")]
    NotOrganizer,

    #[error("identity is not on the access list")]
    NotOnAccessList,
}

impl GuardRejection {
    /// Short machine-readable reason for security logs
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::MalformedHeader => "malformed_header",
            Self::Token(JwtError::ExpiredToken) => "token_expired",
            Self::Token(_) => "token_invalid",
            Self::NotOrganizer => "not_organizer",
            Self::NotOnAccessList => "not_on_access_list",
        }
    }
}

impl IntoResponse for GuardRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            REJECTION_BODY,
        )
            .into_response()
    }
}

/// Resolve the caller from the `Authorization` header without any role check
pub fn resolve_user(headers: &HeaderMap, jwt: &JwtService) -> Result<CurrentUser, GuardRejection> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or(GuardRejection::MissingToken)?
        .to_str()
        .map_err(|_| GuardRejection::MalformedHeader)?;

    let token = JwtService::extract_from_header(header).ok_or(GuardRejection::MalformedHeader)?;
    let claims = jwt.validate_token(token)?;
    Ok(CurrentUser::from(claims))
}

/// The organizer check used by every admin route
pub fn is_authenticated(
    headers: &HeaderMap,
    jwt: &JwtService,
    access_list: &AccessList,
) -> Result<CurrentUser, GuardRejection> {
    let user = resolve_user(headers, jwt)?;
    if !user.is_organizer() {
        return Err(GuardRejection::NotOrganizer);
    }
    if !access_list.permits(&user) {
        return Err(GuardRejection::NotOnAccessList);
    }
    Ok(user)
}

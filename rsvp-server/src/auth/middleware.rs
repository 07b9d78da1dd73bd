//! Authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth::is_authenticated;
use crate::core::ServerState;
use crate::security_log;

/// Organizer guard for admin routes.
///
/// Runs [`is_authenticated`] against the live access list. On success the
/// [`CurrentUser`](crate::auth::CurrentUser) is inserted into the request
/// extensions; otherwise the request is answered with `401 Nope.` before any
/// handler (and so any store) runs.
///
/// ```ignore
/// Router::new()
///     .route("/rsvps", get(handler::rsvps))
///     .route_layer(middleware::from_fn_with_state(state, require_organizer));
/// ```
pub async fn require_organizer(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Response {
    if req.method() == http::Method::OPTIONS {
        return next.run(req).await;
    }

    match is_authenticated(req.headers(), &state.jwt_service, &state.access_list) {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(rejection) => {
            security_log!(
                "WARN",
                "organizer_rejected",
                reason = rejection.reason(),
                uri = req.uri().path().to_string()
            );
            rejection.into_response()
        }
    }
}

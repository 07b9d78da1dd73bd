use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use http::{HeaderName, HeaderValue, StatusCode};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::auth::require_organizer;
use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request bodies are small JSON documents
const MAX_BODY_BYTES: usize = 256 * 1024;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// All routes, organizer routes behind the guard (no global middleware)
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    let organizer = Router::new()
        .merge(api::views::router())
        .merge(api::data::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_organizer,
        ));

    Router::new()
        // Public
        .merge(api::landing::router())
        .merge(api::health::router())
        // Guest wizard - guest token required
        .merge(api::guest::router())
        // Admin panel - organizer on the access list
        .merge(organizer)
}

/// Fully configured application: routes plus tower-http middleware.
///
/// Used by the HTTP server and by in-process (oneshot) callers.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_millis(state.config.request_timeout_ms),
        ))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
}

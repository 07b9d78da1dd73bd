// rsvp-client/src/client/http_oneshot.rs
// In-process HTTP transport
//
// Requires the "in-process" feature

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::http::{HttpClient, decode_response};
use crate::{ClientError, ClientResult};

/// Calls a Router directly through `tower::ServiceExt::oneshot`
///
/// Used by end-to-end tests and demos that run server and wizard in one
/// process.
///
/// ```ignore
/// let router = rsvp_server::build_app(&state).with_state(state);
/// let client = OneshotHttpClient::new(router);
/// client.set_token(Some(guest_token));
/// let rsvp: Rsvp = client.get("/rsvp/data").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Arc<RwLock<Option<String>>>,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn build_request(&self, method: Method, path: &str, body: Vec<u8>) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = self.token() {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        builder
            .body(Body::from(body))
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {e}")))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {e}")))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {e}")))?;

        decode_response(status, &body)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, Vec::new())?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request(Method::PUT, path, serde_json::to_vec(body)?)?;
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[tokio::test]
    async fn test_oneshot_round_trip() {
        let router = Router::new()
            .route("/echo", get(|headers: http::HeaderMap| async move {
                headers
                    .get(header::AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(|v| format!("\"{v}\""))
                    .unwrap_or_else(|| "null".into())
            }));
        let client = OneshotHttpClient::new(router);

        let anonymous: Option<String> = client.get("/echo").await.unwrap();
        assert_eq!(anonymous, None);

        client.set_token(Some("abc".into()));
        let bearer: Option<String> = client.get("/echo").await.unwrap();
        assert_eq!(bearer.as_deref(), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn test_missing_route_is_not_found() {
        let client = OneshotHttpClient::new(Router::new());
        let err = client.get::<()>("/nowhere").await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }
}

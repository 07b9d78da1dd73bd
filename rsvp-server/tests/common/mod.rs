//! Shared harness: an in-memory server driven through `oneshot`

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use rsvp_server::auth::{JwtConfig, TokenType};
use rsvp_server::{Config, RedbStore, RsvpStore, ServerState, build_app};
use serde_json::Value;
use shared::models::Rsvp;
use tower::ServiceExt;

pub const SECRET: &str = "integration-secret-0123456789abcdef0123";
pub const ORGANIZER_EMAIL: &str = "lead@swing.example";

pub fn test_config() -> Config {
    Config::with_overrides("./target/test-data", 0, JwtConfig::with_secret(SECRET))
}

pub struct TestApp {
    pub state: ServerState,
    pub router: Router,
}

impl TestApp {
    /// Server over an in-memory store holding `rsvps`
    pub async fn with_rsvps(rsvps: Value) -> Self {
        let store = RedbStore::open_in_memory().unwrap();
        let rsvps: Vec<Rsvp> = serde_json::from_value(rsvps).unwrap();
        store.insert_all(&rsvps).await.unwrap();
        let state = ServerState::with_store(test_config(), store).await.unwrap();
        Self::from_state(state)
    }

    pub fn from_state(state: ServerState) -> Self {
        let router = build_app(&state).with_state(state.clone());
        Self { state, router }
    }

    /// Organizer token for `ORGANIZER_EMAIL`, with that email on the access list
    pub fn admitted_organizer(&self) -> String {
        self.state.access_list.set(vec![ORGANIZER_EMAIL.to_string()]);
        self.organizer_token("org-1", Some(ORGANIZER_EMAIL))
    }

    pub fn organizer_token(&self, id: &str, email: Option<&str>) -> String {
        self.state
            .jwt_service
            .generate_token(id, "Lead Organizer", email, TokenType::Organizer)
            .unwrap()
    }

    pub fn guest_token(&self, rsvp_id: &str) -> String {
        self.state
            .jwt_service
            .generate_token(rsvp_id, "Guest", None, TokenType::Guest)
            .unwrap()
    }

    pub async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).unwrap())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    pub async fn get_json(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        let (status, body) = self.send(Method::GET, path, token, None).await;
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    pub async fn put_json(&self, path: &str, token: Option<&str>, body: Value) -> (StatusCode, Vec<u8>) {
        self.send(Method::PUT, path, token, Some(body)).await
    }

    pub async fn stored(&self, id: &str) -> Rsvp {
        self.state.rsvps.get(id).await.unwrap()
    }
}

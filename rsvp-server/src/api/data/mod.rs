//! Admin edits
//!
//! | Path | Method | Body |
//! |------|--------|------|
//! | /data/payment/status | PUT | `{ id, status }` |
//! | /data/shirt/size | PUT | `{ id, size }` |
//! | /data/shirt/type | PUT | `{ id, type }` |
//! | /data/setting | PUT | `Setting` |
//! | /data/setting/access-list | PUT | `Setting` |
//!
//! All respond `200` with an empty body.

mod handler;

use axum::{Router, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/data/payment/status", put(handler::payment_status))
        .route("/data/shirt/size", put(handler::shirt_size))
        .route("/data/shirt/type", put(handler::shirt_type))
        .route("/data/setting", put(handler::setting))
        .route("/data/setting/access-list", put(handler::access_list))
}

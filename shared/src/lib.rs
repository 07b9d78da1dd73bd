//! Shared types for the RSVP workspace
//!
//! Data model, request DTOs and the unified error system used by both the
//! server and the guest client.

pub mod client;
pub mod error;
pub mod models;

// Re-exports
pub use axum::{Json, body};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};

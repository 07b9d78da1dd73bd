//! Utilities
//!
//! - [`AppError`] / [`ApiResponse`] re-exported from `shared::error`
//! - request validation helpers
//! - logging setup

pub mod logger;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

use thiserror::Error;

use crate::auth::JwtError;
use crate::db::StoreError;
use crate::db::seed::SeedError;
use crate::utils::AppError;

/// Startup and serve failures. Request handlers use [`AppError`].
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] JwtError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    #[error("Initialization failed: {0}")]
    Init(#[from] AppError),
}

pub type Result<T> = std::result::Result<T, ServerError>;

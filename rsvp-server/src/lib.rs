//! RSVP Server
//!
//! HTTP service behind the event RSVP wizard and the organizer admin panel.
//!
//! ```text
//! rsvp-server/src/
//! ├── core/        # config, state, server, startup errors
//! ├── auth/        # JWT, access list, organizer guard, extractors
//! ├── db/          # store traits, redb store, seeding
//! ├── aggregate/   # attendance, volunteers, food tallies
//! ├── services/    # field edits, guest writes, settings + cache
//! ├── api/         # handlers per area
//! ├── routes/      # router assembly and middleware
//! └── utils/       # validation, logging
//! ```

pub mod aggregate;
pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod routes;
pub mod services;
pub mod utils;

pub use auth::{AccessList, CurrentUser, JwtService};
pub use core::{Config, Server, ServerError, ServerState};
pub use db::{RedbStore, RsvpStore, SettingsStore, StoreError};
pub use routes::{build_app, build_router};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, then initialize logging (`LOG_DIR` enables file output,
/// `LOG_JSON=true` switches to JSON lines).
pub fn setup_environment() {
    match dotenv::dotenv() {
        Ok(path) => eprintln!("Loaded environment from {}", path.display()),
        Err(_) => eprintln!("No .env file found, using process environment"),
    }

    let log_dir = std::env::var("LOG_DIR").ok();
    let json = std::env::var("LOG_JSON")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);
    init_logger_with_file(None, json, log_dir.as_deref());
}

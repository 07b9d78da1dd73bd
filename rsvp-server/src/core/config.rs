use std::path::PathBuf;

use crate::auth::{JwtConfig, JwtError};

const DEFAULT_EVENT_TITLE: &str = "Swing and Blues Weekend";

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | DATABASE_PATH | `<WORK_DIR>/database/rsvp.redb` | redb file |
/// | EVENT_TITLE | Swing and Blues Weekend | Landing page title |
/// | ADMIN_ACCESS_LIST | (empty) | Organizer list used until one is stored |
/// | SEED_FILE | (none) | JSON array of RSVPs loaded into an empty store |
/// | LOG_DIR | (none) | Enables daily rolling log files |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout |
///
/// JWT settings are read by [`JwtConfig::from_env`].
///
/// ```ignore
/// WORK_DIR=/srv/rsvp HTTP_PORT=8080 cargo run --bin rsvp-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub http_port: u16,
    pub environment: String,
    pub database_path: PathBuf,
    pub event_title: String,
    /// Raw bootstrap value for the organizer access list
    pub admin_access_list: Option<String>,
    pub seed_file: Option<PathBuf>,
    pub log_dir: Option<String>,
    pub request_timeout_ms: u64,
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, JwtError> {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_database_path(&work_dir));

        Ok(Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            database_path,
            event_title: std::env::var("EVENT_TITLE")
                .ok()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EVENT_TITLE.into()),
            admin_access_list: std::env::var("ADMIN_ACCESS_LIST").ok(),
            seed_file: std::env::var("SEED_FILE").ok().map(PathBuf::from),
            log_dir: std::env::var("LOG_DIR").ok(),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            jwt: JwtConfig::from_env()?,
            work_dir,
        })
    }

    /// Build a configuration rooted at `work_dir` without consulting the
    /// environment. Used by tests and embedders.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16, jwt: JwtConfig) -> Self {
        let work_dir = work_dir.into();
        Self {
            http_port,
            environment: "development".into(),
            database_path: default_database_path(&work_dir),
            event_title: DEFAULT_EVENT_TITLE.into(),
            admin_access_list: None,
            seed_file: None,
            log_dir: None,
            request_timeout_ms: 30000,
            jwt,
            work_dir,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn default_database_path(work_dir: &str) -> PathBuf {
    PathBuf::from(work_dir).join("database").join("rsvp.redb")
}

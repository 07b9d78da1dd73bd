//! Client configuration

use std::path::PathBuf;

use crate::client::NetworkHttpClient;
use crate::error::ClientResult;

/// Default location of the locally persisted wizard session
pub const DEFAULT_SESSION_PATH: &str = "rsvp-session.json";

/// Client configuration for talking to the RSVP server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Guest JWT issued with the invite
    pub token: Option<String>,

    /// Where the wizard session is saved between screens
    pub session_path: PathBuf,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            session_path: PathBuf::from(DEFAULT_SESSION_PATH),
            timeout: 30,
        }
    }

    /// Read `RSVP_BASE_URL`, `RSVP_TOKEN` and `RSVP_SESSION_PATH`
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("RSVP_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into()),
        );
        config.token = std::env::var("RSVP_TOKEN").ok().filter(|t| !t.is_empty());
        if let Ok(path) = std::env::var("RSVP_SESSION_PATH") {
            config.session_path = PathBuf::from(path);
        }
        config
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = path.into();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a network client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://rsvp.local/")
            .with_token("t")
            .with_session_path("/tmp/s.json")
            .with_timeout(5);

        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(config.session_path, PathBuf::from("/tmp/s.json"));
        assert_eq!(config.timeout, 5);

        let client = config.build_http_client().unwrap();
        assert_eq!(client.base_url(), "http://rsvp.local");
    }
}

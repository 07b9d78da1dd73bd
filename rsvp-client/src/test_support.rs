//! Scripted transport for unit tests

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Notify;

use crate::client::HttpClient;
use crate::session::MemorySessionStore;
use crate::{ClientError, ClientResult};

/// Holds a PUT open until released
#[derive(Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

/// One recorded PUT
#[derive(Debug, Clone)]
pub struct Put {
    pub path: String,
    pub body: Value,
    /// Local saves seen when the request went out
    pub saves_before: Option<usize>,
}

#[derive(Default)]
pub struct MockClient {
    pub rsvp: Value,
    pub puts: Mutex<Vec<Put>>,
    pub fail_puts: AtomicBool,
    pub gate: Option<Arc<Gate>>,
    pub store: Option<Arc<MemorySessionStore>>,
}

impl MockClient {
    pub fn with_rsvp(rsvp: Value) -> Self {
        Self {
            rsvp,
            ..Default::default()
        }
    }

    pub fn put_paths(&self) -> Vec<String> {
        self.puts.lock().iter().map(|p| p.path.clone()).collect()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn get<T: DeserializeOwned>(&self, _path: &str) -> ClientResult<T> {
        Ok(serde_json::from_value(self.rsvp.clone())?)
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let put = Put {
            path: path.to_string(),
            body: serde_json::to_value(body)?,
            saves_before: self.store.as_ref().map(|s| s.save_count()),
        };
        self.puts.lock().push(put);

        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(ClientError::Internal("503: unavailable".into()));
        }
        Ok(serde_json::from_value(Value::Null)?)
    }
}

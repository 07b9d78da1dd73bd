//! Wizard session
//!
//! The session is the guest's RSVP as the wizard sees it: hydrated from the
//! server, edited screen by screen, and saved locally before every network
//! write.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shared::models::Rsvp;

use crate::ClientResult;

/// Accumulated wizard state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    rsvp: Rsvp,
}

impl Session {
    pub fn new(rsvp: Rsvp) -> Self {
        Self { rsvp }
    }

    pub fn rsvp(&self) -> &Rsvp {
        &self.rsvp
    }

    pub fn rsvp_mut(&mut self) -> &mut Rsvp {
        &mut self.rsvp
    }

    pub fn into_rsvp(self) -> Rsvp {
        self.rsvp
    }

    /// Whether the wizard has marked this RSVP complete (local only)
    pub fn is_submitted(&self) -> bool {
        self.rsvp.meta.as_ref().is_some_and(|m| m.submitted)
    }
}

impl From<Rsvp> for Session {
    fn from(rsvp: Rsvp) -> Self {
        Self::new(rsvp)
    }
}

/// Local persistence for the session. Calls are synchronous.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> ClientResult<Option<Session>>;
    fn save(&self, session: &Session) -> ClientResult<()>;
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn load(&self) -> ClientResult<Option<Session>> {
        (**self).load()
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        (**self).save(session)
    }
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> ClientResult<Option<Session>> {
        match std::fs::read(&self.path) {
            Ok(raw) => Ok(Some(serde_json::from_slice(&raw)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_vec_pretty(session)?;
        std::fs::write(&self.path, raw)?;
        tracing::debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }
}

/// In-memory store; counts saves
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    saved: Mutex<Option<Session>>,
    saves: Mutex<usize>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> ClientResult<Option<Session>> {
        Ok(self.saved.lock().clone())
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        *self.saved.lock() = Some(session.clone());
        *self.saves.lock() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Session {
        serde_json::from_value(json!({
            "id": "r-1",
            "person": {"name": "Ada"},
            "shirt": {"size": "M"},
            "meta": {"submitted": true}
        }))
        .unwrap()
    }

    #[test]
    fn test_session_serializes_as_bare_rsvp() {
        let session = sample();
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["id"], json!("r-1"));
        assert_eq!(value["shirt"]["size"], json!("M"));
        assert!(session.is_submitted());
        assert!(!Session::default().is_submitted());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested/session.json"));

        assert!(store.load().unwrap().is_none());
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not json").unwrap();

        let err = FileSessionStore::new(&path).load().unwrap_err();
        assert!(matches!(err, crate::ClientError::Serialization(_)));
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let store = MemorySessionStore::new();
        store.save(&Session::default()).unwrap();
        store.save(&sample()).unwrap();
        assert_eq!(store.save_count(), 2);
        assert_eq!(store.load().unwrap(), Some(sample()));
    }
}

//! Startup seeding from a JSON file
//!
//! Records normally come from the invite flow. For demos and fresh installs
//! `SEED_FILE` may point at a JSON array of RSVPs, loaded only when the store
//! is empty.

use std::path::Path;

use shared::models::Rsvp;
use thiserror::Error;

use super::{RsvpStore, StoreError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed file is not a JSON array of RSVPs: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Load `path` into `store` if the store holds no RSVPs.
///
/// The file is inserted as one batch: a duplicate id leaves the store empty.
/// Returns the number of records inserted.
pub async fn seed_if_empty(store: &dyn RsvpStore, path: &Path) -> Result<usize, SeedError> {
    if store.count().await? > 0 {
        tracing::debug!(path = %path.display(), "RSVP store not empty, skipping seed");
        return Ok(0);
    }

    let raw = std::fs::read(path)?;
    let rsvps: Vec<Rsvp> = serde_json::from_slice(&raw)?;
    store.insert_all(&rsvps).await?;

    tracing::info!(path = %path.display(), count = rsvps.len(), "Seeded RSVP store");
    Ok(rsvps.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::RedbStore;
    use std::io::Write;

    #[tokio::test]
    async fn test_seed_only_into_empty_store() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"r-1","person":{{"name":"Ada"}}}},{{"id":"r-2","person":{{"isAttending":false}}}}]"#
        )
        .unwrap();

        let store = RedbStore::open_in_memory().unwrap();
        assert_eq!(seed_if_empty(&store, file.path()).await.unwrap(), 2);
        assert_eq!(seed_if_empty(&store, file.path()).await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_malformed_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id":"r-1"}}"#).unwrap();

        let store = RedbStore::open_in_memory().unwrap();
        assert!(matches!(
            seed_if_empty(&store, file.path()).await,
            Err(SeedError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_id_seeds_nothing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"r-1"}},{{"id":"r-2"}},{{"id":"r-1","person":{{"name":"Ada"}}}}]"#
        )
        .unwrap();

        let store = RedbStore::open_in_memory().unwrap();
        assert!(matches!(
            seed_if_empty(&store, file.path()).await,
            Err(SeedError::Store(StoreError::AlreadyExists(id))) if id == "r-1"
        ));
        assert_eq!(store.count().await.unwrap(), 0);
    }
}

//! Persistence layer
//!
//! The RSVP and settings stores are collaborators behind two traits so the
//! handlers and services never see the storage engine. [`RedbStore`] is the
//! embedded implementation used by the binary and the tests.

pub mod seed;
pub mod storage;

use std::collections::BTreeMap;

use async_trait::async_trait;
use shared::AppError;
use shared::models::{Rsvp, Setting};
use thiserror::Error;

pub use storage::RedbStore;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::rsvp_not_found(id),
            StoreError::AlreadyExists(id) => AppError::with_message(
                shared::ErrorCode::AlreadyExists,
                format!("Record {id} already exists"),
            ),
            other => AppError::database(other.to_string()),
        }
    }
}

/// In-place edit applied by [`RsvpStore::modify`]
pub type RsvpEdit = Box<dyn FnOnce(&mut Rsvp) + Send>;

/// Keyed storage for RSVP records
#[async_trait]
pub trait RsvpStore: Send + Sync {
    /// Fetch one record, `NotFound` when the id is unknown
    async fn get(&self, id: &str) -> StoreResult<Rsvp>;

    /// Read, edit and write back one record atomically.
    ///
    /// `NotFound` when the id is unknown; the edit is not run. Returns the
    /// record as written.
    async fn modify(&self, id: &str, edit: RsvpEdit) -> StoreResult<Rsvp>;

    /// Every record, ordered by case-insensitive name (nameless first), then id
    async fn all_by_name(&self) -> StoreResult<Vec<Rsvp>>;

    /// Create records, all or none. Only used for seeding; invitations live
    /// elsewhere.
    async fn insert_all(&self, rsvps: &[Rsvp]) -> StoreResult<()>;

    async fn count(&self) -> StoreResult<usize>;
}

/// Keyed storage for named settings
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Upsert a batch of settings in one transaction
    async fn set(&self, settings: &[Setting]) -> StoreResult<()>;

    async fn get(&self, name: &str) -> StoreResult<Option<Setting>>;

    async fn get_all(&self) -> StoreResult<BTreeMap<String, Setting>>;

    /// Settings flagged visible
    async fn get_all_for_display(&self) -> StoreResult<BTreeMap<String, Setting>> {
        let mut all = self.get_all().await?;
        all.retain(|_, setting| setting.visible);
        Ok(all)
    }
}

/// Ordering used by [`RsvpStore::all_by_name`]
pub fn sort_by_name(rsvps: &mut [Rsvp]) {
    rsvps.sort_by_cached_key(|r| (r.name().to_lowercase(), r.id.clone()));
}

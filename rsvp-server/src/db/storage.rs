//! redb-backed store
//!
//! # Tables
//!
//! | Table | Key | Value |
//! |-------|-----|-------|
//! | `rsvps` | RSVP id | JSON-serialized `Rsvp` |
//! | `settings` | setting name | JSON-serialized `Setting` |
//!
//! Each call is its own transaction. Record edits read and write inside one
//! write transaction, so concurrent edits to a record serialize.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use shared::models::{Rsvp, Setting};

use super::{RsvpEdit, RsvpStore, SettingsStore, StoreError, StoreResult, sort_by_name};

const RSVPS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("rsvps");
const SETTINGS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("settings");

/// RSVP and settings storage in one embedded database
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests, demos)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(RSVPS_TABLE)?;
            let _ = write_txn.open_table(SETTINGS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    fn read_rsvp(&self, id: &str) -> StoreResult<Option<Rsvp>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RSVPS_TABLE)?;
        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    fn modify_rsvp(&self, id: &str, edit: RsvpEdit) -> StoreResult<Rsvp> {
        let write_txn = self.db.begin_write()?;
        let rsvp = {
            let mut table = write_txn.open_table(RSVPS_TABLE)?;
            let mut rsvp: Rsvp = match table.get(id)? {
                Some(value) => serde_json::from_slice(value.value())?,
                None => return Err(StoreError::NotFound(id.to_string())),
            };
            edit(&mut rsvp);
            // the key is the stored id whatever the edit did
            rsvp.id = id.to_string();
            let bytes = serde_json::to_vec(&rsvp)?;
            table.insert(id, bytes.as_slice())?;
            rsvp
        };
        write_txn.commit()?;
        Ok(rsvp)
    }

    /// Dropping the transaction on error aborts the whole batch
    fn insert_rsvps(&self, rsvps: &[Rsvp]) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RSVPS_TABLE)?;
            for rsvp in rsvps {
                if table.get(rsvp.id.as_str())?.is_some() {
                    return Err(StoreError::AlreadyExists(rsvp.id.clone()));
                }
                let bytes = serde_json::to_vec(rsvp)?;
                table.insert(rsvp.id.as_str(), bytes.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[async_trait]
impl RsvpStore for RedbStore {
    async fn get(&self, id: &str) -> StoreResult<Rsvp> {
        self.read_rsvp(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn modify(&self, id: &str, edit: RsvpEdit) -> StoreResult<Rsvp> {
        self.modify_rsvp(id, edit)
    }

    async fn all_by_name(&self) -> StoreResult<Vec<Rsvp>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RSVPS_TABLE)?;

        let mut rsvps = Vec::new();
        for result in table.iter()? {
            let (_, value) = result?;
            rsvps.push(serde_json::from_slice::<Rsvp>(value.value())?);
        }
        sort_by_name(&mut rsvps);
        Ok(rsvps)
    }

    async fn insert_all(&self, rsvps: &[Rsvp]) -> StoreResult<()> {
        self.insert_rsvps(rsvps)
    }

    async fn count(&self) -> StoreResult<usize> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RSVPS_TABLE)?;
        Ok(table.len()? as usize)
    }
}

#[async_trait]
impl SettingsStore for RedbStore {
    async fn set(&self, settings: &[Setting]) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SETTINGS_TABLE)?;
            for setting in settings {
                let bytes = serde_json::to_vec(setting)?;
                table.insert(setting.name.as_str(), bytes.as_slice())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    async fn get(&self, name: &str) -> StoreResult<Option<Setting>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SETTINGS_TABLE)?;
        match table.get(name)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> StoreResult<BTreeMap<String, Setting>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SETTINGS_TABLE)?;

        let mut settings = BTreeMap::new();
        for result in table.iter()? {
            let (key, value) = result?;
            let setting: Setting = serde_json::from_slice(value.value())?;
            settings.insert(key.value().to_string(), setting);
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Person, SettingKind};
    use serde_json::json;

    fn named(id: &str, name: Option<&str>) -> Rsvp {
        let mut rsvp = Rsvp::new(id);
        rsvp.person = name.map(|n| Person {
            name: Some(n.to_string()),
            is_attending: None,
        });
        rsvp
    }

    #[tokio::test]
    async fn test_insert_get_modify() {
        let store = RedbStore::open_in_memory().unwrap();
        let rsvp = named("r-1", Some("Ada"));
        store.insert_all(&[rsvp.clone()]).await.unwrap();

        assert_eq!(RsvpStore::get(&store, "r-1").await.unwrap(), rsvp);

        let written = store
            .modify(
                "r-1",
                Box::new(|r: &mut Rsvp| r.payment_mut().status = Some("paid".into())),
            )
            .await
            .unwrap();
        let stored = RsvpStore::get(&store, "r-1").await.unwrap();
        assert_eq!(stored, written);
        assert_eq!(stored.payment.as_ref().unwrap().status.as_deref(), Some("paid"));
        assert_eq!(stored.name(), "Ada");
    }

    #[tokio::test]
    async fn test_missing_record() {
        let store = RedbStore::open_in_memory().unwrap();

        assert!(matches!(
            RsvpStore::get(&store, "nope").await,
            Err(StoreError::NotFound(id)) if id == "nope"
        ));
        assert!(matches!(
            store.modify("nope", Box::new(|r: &mut Rsvp| r.id = "other".into())).await,
            Err(StoreError::NotFound(_))
        ));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_modify_keeps_key() {
        let store = RedbStore::open_in_memory().unwrap();
        store.insert_all(&[Rsvp::new("r-1")]).await.unwrap();

        let written = store
            .modify("r-1", Box::new(|r: &mut Rsvp| r.id = "r-2".into()))
            .await
            .unwrap();
        assert_eq!(written.id, "r-1");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_modify_loses_nothing() {
        let store = Arc::new(RedbStore::open_in_memory().unwrap());
        store.insert_all(&[Rsvp::new("r-1")]).await.unwrap();

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .modify(
                            "r-1",
                            Box::new(move |r: &mut Rsvp| {
                                r.extra.insert(format!("k{i}"), json!(i));
                            }),
                        )
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = RsvpStore::get(store.as_ref(), "r-1").await.unwrap();
        assert_eq!(stored.extra.len(), 16);
    }

    #[tokio::test]
    async fn test_duplicate_insert_rejected() {
        let store = RedbStore::open_in_memory().unwrap();
        store.insert_all(&[Rsvp::new("r-1")]).await.unwrap();
        assert!(matches!(
            store.insert_all(&[Rsvp::new("r-1")]).await,
            Err(StoreError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_batch_insert_is_all_or_none() {
        let store = RedbStore::open_in_memory().unwrap();
        let err = store
            .insert_all(&[Rsvp::new("r-1"), Rsvp::new("r-2"), Rsvp::new("r-1")])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(id) if id == "r-1"));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_all_by_name_ordering() {
        let store = RedbStore::open_in_memory().unwrap();
        store
            .insert_all(&[
                named("r-3", Some("bob")),
                named("r-1", Some("Carol")),
                named("r-2", None),
                named("r-0", Some("Bob")),
            ])
            .await
            .unwrap();

        let ids: Vec<String> = store
            .all_by_name()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["r-2", "r-0", "r-3", "r-1"]);
    }

    #[tokio::test]
    async fn test_settings_upsert_and_display_filter() {
        let store = RedbStore::open_in_memory().unwrap();
        let mut hidden = Setting::new("secret", json!("x"), SettingKind::Scalar);
        hidden.visible = false;

        store
            .set(&[
                Setting::new("title", json!("Weekend"), SettingKind::Scalar),
                hidden,
            ])
            .await
            .unwrap();
        store
            .set(&[Setting::new("title", json!("Long Weekend"), SettingKind::Scalar)])
            .await
            .unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all["title"].value, json!("Long Weekend"));

        let display = store.get_all_for_display().await.unwrap();
        assert_eq!(display.keys().collect::<Vec<_>>(), vec!["title"]);

        assert!(SettingsStore::get(&store, "missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_backed_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rsvp.redb");
        {
            let store = RedbStore::open(&path).unwrap();
            store.insert_all(&[named("r-1", Some("Ada"))]).await.unwrap();
        }
        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }
}

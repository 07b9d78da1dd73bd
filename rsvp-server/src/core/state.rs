use std::sync::Arc;

use crate::auth::{AccessList, JwtService};
use crate::core::{Config, Result};
use crate::db::{RedbStore, RsvpStore, SettingsStore, seed};
use crate::services::{RsvpService, SettingsCache, SettingsService};

/// Server state: cheap-to-clone handles to every service
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | Immutable configuration |
/// | jwt_service | `Arc<JwtService>` | Token validation |
/// | access_list | AccessList | Live organizer list |
/// | rsvps | RsvpService | RSVP reads and writes |
/// | settings | SettingsService | Settings writes, cache |
///
/// Stores are injected as trait objects so tests can swap them.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub jwt_service: Arc<JwtService>,
    pub access_list: AccessList,
    pub rsvps: RsvpService,
    pub settings: SettingsService,
}

impl ServerState {
    /// Assemble state from explicit stores. Does not touch the stores;
    /// call [`ServerState::warmup`] before serving.
    pub fn new(
        config: Config,
        rsvp_store: Arc<dyn RsvpStore>,
        settings_store: Arc<dyn SettingsStore>,
    ) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let access_list = AccessList::default();
        let settings = SettingsService::new(settings_store, SettingsCache::new(), access_list.clone());

        Self {
            config,
            jwt_service,
            access_list,
            rsvps: RsvpService::new(rsvp_store),
            settings,
        }
    }

    /// State over a single [`RedbStore`], warmed up
    pub async fn with_store(config: Config, store: RedbStore) -> Result<Self> {
        let store = Arc::new(store);
        let state = Self::new(config, store.clone(), store);
        state.warmup().await?;
        Ok(state)
    }

    /// Open the configured database, seed it, load settings and the access list
    pub async fn initialize(config: &Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let store = Arc::new(RedbStore::open(&config.database_path)?);
        tracing::info!(path = %config.database_path.display(), "Database opened");

        if let Some(path) = &config.seed_file {
            seed::seed_if_empty(store.as_ref(), path).await?;
        }

        let state = Self::new(config.clone(), store.clone(), store);
        state.warmup().await?;
        Ok(state)
    }

    /// Load the settings cache and the access list
    pub async fn warmup(&self) -> Result<()> {
        self.settings
            .warmup(self.config.admin_access_list.as_deref())
            .await?;
        Ok(())
    }

    /// Landing page title: `event-title` setting, else `EVENT_TITLE`
    pub fn event_title(&self) -> String {
        self.settings
            .event_title()
            .unwrap_or_else(|| self.config.event_title.clone())
    }
}

//! Settings service
//!
//! Owns the settings store, the process-wide [`SettingsCache`] and the live
//! [`AccessList`]. Generic writes reload the cache; access-list writes apply
//! the new list instead. The two paths stay separate.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use shared::models::{ACCESS_LIST_SETTING, Setting, SettingKind};

use crate::auth::AccessList;
use crate::db::{SettingsStore, StoreResult};
use crate::security_log;
use crate::utils::validation::{
    MAX_SETTING_NAME_LEN, MAX_SETTING_VALUE_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Setting that overrides the configured event title on the landing page
pub const EVENT_TITLE_SETTING: &str = "event-title";

/// In-memory snapshot of every stored setting
#[derive(Debug, Clone, Default)]
pub struct SettingsCache {
    settings: Arc<RwLock<BTreeMap<String, Setting>>>,
}

impl SettingsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with the store's current contents
    pub async fn reload(&self, store: &dyn SettingsStore) -> StoreResult<usize> {
        let fresh = store.get_all().await?;
        let count = fresh.len();
        *self.settings.write() = fresh;
        Ok(count)
    }

    pub fn get(&self, name: &str) -> Option<Setting> {
        self.settings.read().get(name).cloned()
    }

    pub fn snapshot(&self) -> BTreeMap<String, Setting> {
        self.settings.read().clone()
    }

    pub fn len(&self) -> usize {
        self.settings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.read().is_empty()
    }
}

#[derive(Clone)]
pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
    cache: SettingsCache,
    access_list: AccessList,
}

impl SettingsService {
    pub fn new(store: Arc<dyn SettingsStore>, cache: SettingsCache, access_list: AccessList) -> Self {
        Self {
            store,
            cache,
            access_list,
        }
    }

    pub fn cache(&self) -> &SettingsCache {
        &self.cache
    }

    /// Load the cache and the access list at startup.
    ///
    /// A stored `admin-access-list` wins over `bootstrap`; the bootstrap
    /// value (from `ADMIN_ACCESS_LIST`) only applies on a fresh install.
    pub async fn warmup(&self, bootstrap: Option<&str>) -> AppResult<()> {
        let count = self.cache.reload(self.store.as_ref()).await?;
        tracing::info!(count, "Settings cache loaded");

        match self.cache.get(ACCESS_LIST_SETTING) {
            Some(setting) => match AccessList::parse(&setting.value) {
                Some(entries) => {
                    let count = self.access_list.set(entries);
                    tracing::info!(count, "Access list loaded from settings");
                }
                None => {
                    tracing::warn!("Stored access list has an unreadable value, leaving it empty");
                }
            },
            None => {
                if let Some(raw) = bootstrap {
                    let count = self.access_list.set(AccessList::parse_str(raw));
                    tracing::info!(count, "Access list bootstrapped from ADMIN_ACCESS_LIST");
                }
            }
        }

        if self.access_list.is_empty() {
            tracing::warn!("Organizer access list is empty; no one can reach the admin panel");
        }
        Ok(())
    }

    /// Settings for the organizer settings page: visible, list kind excluded
    pub async fn display_settings(&self) -> AppResult<BTreeMap<String, Setting>> {
        let mut settings = self.store.get_all_for_display().await?;
        settings.retain(|_, s| !s.is_list());
        Ok(settings)
    }

    /// Every visible setting plus the access-list setting (`{}` when absent
    /// or hidden)
    pub async fn access_view(&self) -> AppResult<(BTreeMap<String, Setting>, Value)> {
        let settings = self.store.get_all_for_display().await?;
        let access = match settings.get(ACCESS_LIST_SETTING) {
            Some(setting) => serde_json::to_value(setting)
                .map_err(|e| AppError::internal(format!("Failed to encode setting: {e}")))?,
            None => Value::Object(Default::default()),
        };
        Ok((settings, access))
    }

    /// Write one setting, then reload the cache
    pub async fn set_setting(&self, setting: Setting) -> AppResult<()> {
        validate_setting(&setting)?;
        self.store.set(std::slice::from_ref(&setting)).await?;
        let count = self.cache.reload(self.store.as_ref()).await?;
        tracing::info!(name = %setting.name, cached = count, "Setting saved");
        Ok(())
    }

    /// Write the access-list setting, then apply it to the live list
    pub async fn set_access_list(&self, mut setting: Setting, editor: &str) -> AppResult<()> {
        if setting.name.is_empty() {
            setting.name = ACCESS_LIST_SETTING.to_string();
        }
        if setting.name != ACCESS_LIST_SETTING {
            return Err(AppError::invalid_setting(
                &setting.name,
                format!("Expected the {ACCESS_LIST_SETTING} setting"),
            ));
        }
        validate_setting(&setting)?;
        let entries = AccessList::parse(&setting.value).ok_or_else(|| {
            AppError::invalid_setting(
                ACCESS_LIST_SETTING,
                "Access list must be an array of strings or a comma separated string",
            )
        })?;
        setting.kind = SettingKind::List;

        self.store.set(std::slice::from_ref(&setting)).await?;
        let count = self.access_list.set(entries);

        security_log!("INFO", "access_list_updated", editor = editor, entries = count);
        Ok(())
    }

    pub fn event_title(&self) -> Option<String> {
        self.cache
            .get(EVENT_TITLE_SETTING)
            .and_then(|s| s.value.as_str().map(str::to_string))
            .filter(|t| !t.trim().is_empty())
    }
}

fn validate_setting(setting: &Setting) -> AppResult<()> {
    validate_required_text(&setting.name, "name", MAX_SETTING_NAME_LEN)?;
    let encoded_len = setting.value.to_string().len();
    if encoded_len > MAX_SETTING_VALUE_LEN {
        return Err(AppError::invalid_setting(
            &setting.name,
            format!("value is too long ({encoded_len} bytes, max {MAX_SETTING_VALUE_LEN})"),
        ));
    }
    Ok(())
}

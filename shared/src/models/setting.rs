//! Setting Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the setting holding the organizer access-control list
pub const ACCESS_LIST_SETTING: &str = "admin-access-list";

/// Named configuration value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub name: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub kind: SettingKind,
    /// Whether the setting is shown on the organizer settings pages
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Setting {
    pub fn new(name: impl Into<String>, value: impl Into<Value>, kind: SettingKind) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
            visible: true,
        }
    }

    pub fn is_list(&self) -> bool {
        self.kind == SettingKind::List
    }
}

/// Setting value shape
///
/// Only `list` is distinguished; any other kind string reads as `Scalar`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    List,
    #[default]
    #[serde(other)]
    Scalar,
}

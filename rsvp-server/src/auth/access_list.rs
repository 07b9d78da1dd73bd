//! Organizer access list
//!
//! Process-wide list of identities (emails or user ids) allowed into the
//! admin panel. Backed by the `admin-access-list` setting and replaced
//! wholesale on every write; last write wins.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use super::CurrentUser;

#[derive(Debug, Clone, Default)]
pub struct AccessList {
    entries: Arc<RwLock<Vec<String>>>,
}

impl AccessList {
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(normalize(entries))),
        }
    }

    /// Parse a setting value into list entries.
    ///
    /// Accepts a JSON array of strings, or a single string separated by
    /// commas or newlines. `null` is an empty list. Anything else is
    /// rejected with `None`.
    pub fn parse(value: &Value) -> Option<Vec<String>> {
        let raw = match value {
            Value::Null => Vec::new(),
            Value::String(s) => return Some(Self::parse_str(s)),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(item.as_str()?.to_string());
                }
                out
            }
            _ => return None,
        };
        Some(normalize(raw))
    }

    /// Parse the comma or newline separated form used by `ADMIN_ACCESS_LIST`
    pub fn parse_str(raw: &str) -> Vec<String> {
        normalize(raw.split([',', '\n']).map(str::to_string).collect())
    }

    pub fn from_env_value(raw: &str) -> Self {
        Self::new(Self::parse_str(raw))
    }

    /// Replace the live list. Returns the new entry count.
    pub fn set(&self, entries: Vec<String>) -> usize {
        let entries = normalize(entries);
        let count = entries.len();
        *self.entries.write() = entries;
        count
    }

    /// Whether the identity string is on the list (case-insensitive)
    pub fn contains(&self, identity: &str) -> bool {
        let needle = identity.trim().to_lowercase();
        !needle.is_empty() && self.entries.read().iter().any(|e| *e == needle)
    }

    /// Whether the user's email or id is on the list
    pub fn permits(&self, user: &CurrentUser) -> bool {
        user.email.as_deref().is_some_and(|email| self.contains(email)) || self.contains(&user.id)
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

fn normalize(entries: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        let entry = entry.trim().to_lowercase();
        if !entry.is_empty() && !out.contains(&entry) {
            out.push(entry);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenType;
    use serde_json::json;

    fn organizer(id: &str, email: Option<&str>) -> CurrentUser {
        CurrentUser {
            id: id.into(),
            display_name: "Org".into(),
            email: email.map(str::to_string),
            token_type: TokenType::Organizer,
        }
    }

    #[test]
    fn test_parse_array_and_string_forms() {
        assert_eq!(
            AccessList::parse(&json!([" Ada@Example.com ", "u-7", ""])),
            Some(vec!["ada@example.com".to_string(), "u-7".to_string()])
        );
        assert_eq!(
            AccessList::parse(&json!("a@x.org, b@x.org\nA@X.org")),
            Some(vec!["a@x.org".to_string(), "b@x.org".to_string()])
        );
        assert_eq!(AccessList::parse(&Value::Null), Some(vec![]));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert_eq!(AccessList::parse(&json!(42)), None);
        assert_eq!(AccessList::parse(&json!({"a": 1})), None);
        assert_eq!(AccessList::parse(&json!(["ok", 3])), None);
    }

    #[test]
    fn test_permits_by_email_or_id() {
        let list = AccessList::new(vec!["ada@example.com".into(), "u-9".into()]);

        assert!(list.permits(&organizer("u-1", Some("ADA@example.com"))));
        assert!(list.permits(&organizer("u-9", None)));
        assert!(!list.permits(&organizer("u-2", Some("eve@example.com"))));
    }

    #[test]
    fn test_set_replaces_for_all_clones() {
        let list = AccessList::from_env_value("old@example.com");
        let shared = list.clone();
        assert!(shared.contains("old@example.com"));

        let count = list.set(vec!["new@example.com".into()]);
        assert_eq!(count, 1);
        assert!(!shared.contains("old@example.com"));
        assert!(shared.contains("new@example.com"));
    }

    #[test]
    fn test_empty_list_permits_nobody() {
        let list = AccessList::default();
        assert!(list.is_empty());
        assert!(!list.permits(&organizer("u-1", Some("ada@example.com"))));
        assert!(!list.contains(""));
    }
}

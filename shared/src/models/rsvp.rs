//! RSVP Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::food::Food;

/// One guest's accumulated responses across the wizard
///
/// Created by the invite flow, then mutated in place by guest wizard writes
/// and organizer edits. Never deleted here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shirt: Option<Shirt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteer: Option<Volunteer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food: Option<Food>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
    /// Opaque, carried through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing: Option<Value>,
    /// Opaque, carried through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting: Option<Value>,
    /// Opaque, carried through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Top-level keys this model does not know about (kept on write-back)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Rsvp {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Display name used for ordering, empty when unknown
    pub fn name(&self) -> &str {
        self.person
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or("")
    }

    /// A record is a decline only when `person.isAttending` is exactly `false`
    pub fn is_attending(&self) -> bool {
        self.person.as_ref().is_none_or(Person::attending)
    }

    pub fn is_volunteer(&self) -> bool {
        self.volunteer.as_ref().is_some_and(Volunteer::any)
    }

    pub fn shirt_mut(&mut self) -> &mut Shirt {
        self.shirt.get_or_insert_with(Shirt::default)
    }

    pub fn payment_mut(&mut self) -> &mut Payment {
        self.payment.get_or_insert_with(Payment::default)
    }

    pub fn meta_mut(&mut self) -> &mut Meta {
        self.meta.get_or_insert_with(Meta::default)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Absent means attending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_attending: Option<bool>,
}

impl Person {
    pub fn attending(&self) -> bool {
        self.is_attending != Some(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shirt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub shirt_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    #[serde(default)]
    pub before: bool,
    #[serde(default)]
    pub during: bool,
}

impl Volunteer {
    pub fn any(&self) -> bool {
        self.before || self.during
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Set by the wizard on completion; never confirmed by the server
    #[serde(default)]
    pub submitted: bool,
    /// Organizer who made the last admin edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_by: Option<String>,
}

//! Service layer
//!
//! - [`RsvpService`] - organizer field edits and guest writes
//! - [`SettingsService`] - settings writes, [`SettingsCache`] and the access list

pub mod rsvp;
pub mod settings;

pub use rsvp::{FieldEdit, RsvpService};
pub use settings::{EVENT_TITLE_SETTING, SettingsCache, SettingsService};

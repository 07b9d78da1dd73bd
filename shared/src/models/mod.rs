//! Data models
//!
//! Shared between rsvp-server and rsvp-client (via API).
//! Records are schemaless JSON documents on disk; every sub-document is
//! optional and readers must tolerate its absence.

pub mod food;
pub mod rsvp;
pub mod setting;

// Re-exports
pub use food::*;
pub use rsvp::*;
pub use setting::*;

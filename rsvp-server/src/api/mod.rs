//! HTTP API
//!
//! | Module | Access |
//! |--------|--------|
//! | [`landing`] | public |
//! | [`health`] | public |
//! | [`guest`] | guest token |
//! | [`views`] | organizer (admin panel views) |
//! | [`data`] | organizer (admin edits) |

pub mod data;
pub mod guest;
pub mod health;
pub mod landing;
pub mod views;

pub use crate::utils::AppResult;

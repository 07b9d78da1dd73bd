//! RSVP Client - guest-side wizard
//!
//! Walks a guest through the RSVP screens, keeping a local session and
//! writing each screen's sub-document to the server.
//!
//! ```ignore
//! let config = ClientConfig::from_env();
//! let client = config.build_http_client()?;
//! let store = FileSessionStore::new(&config.session_path);
//! let wizard = RsvpWizard::resume(client, Box::new(store)).await?;
//!
//! let mut adventure = wizard.adventure();
//! adventure.shirt.size = Some("M".into());
//! adventure.next().await?;
//!
//! let mut payment = wizard.payment();
//! payment.set_payment("paypal");
//! payment.finish().await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod screens;
pub mod session;
pub mod wizard;

#[cfg(test)]
mod test_support;

pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use flow::{FlowState, RsvpFlow, Screen};
pub use screens::{ChooseAdventureScreen, PaymentScreen, Submission};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
pub use wizard::RsvpWizard;

// Re-export shared types for convenience
pub use shared::models::{Payment, Rsvp, Shirt, Volunteer};

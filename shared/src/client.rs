//! Request/response types shared between server and client
//!
//! These types are shared between rsvp-server and rsvp-client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Payment, Shirt, Volunteer};

// =============================================================================
// Organizer edit DTOs (one field per call)
// =============================================================================

/// `PUT /data/payment/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusUpdate {
    pub id: String,
    pub status: String,
}

/// `PUT /data/shirt/size`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShirtSizeUpdate {
    pub id: String,
    pub size: String,
}

/// `PUT /data/shirt/type`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShirtTypeUpdate {
    pub id: String,
    #[serde(rename = "type")]
    pub shirt_type: String,
}

// =============================================================================
// Guest wizard DTOs
// =============================================================================

/// `PUT /rsvp/data/adventure`
///
/// The wizard sends its whole session; only these keys are read and only the
/// ones present are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdventureUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shirt: Option<Shirt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteer: Option<Volunteer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing: Option<Value>,
}

/// `PUT /rsvp/data/payment` body
pub type PaymentUpdate = Payment;

// =============================================================================
// Misc
// =============================================================================

/// `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

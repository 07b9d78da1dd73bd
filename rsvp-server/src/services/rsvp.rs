//! RSVP service
//!
//! Organizer single-field edits and guest sub-document writes. Every write is
//! validated first, then applied through one atomic store edit.

use std::sync::Arc;

use shared::client::AdventureUpdate;
use shared::models::{Payment, Rsvp};

use crate::db::RsvpStore;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_ID_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};

/// One organizer edit. Each variant touches exactly one nested field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    PaymentStatus(String),
    ShirtSize(String),
    ShirtType(String),
}

impl FieldEdit {
    /// Dotted path of the edited field, for logs
    pub fn field(&self) -> &'static str {
        match self {
            Self::PaymentStatus(_) => "payment.status",
            Self::ShirtSize(_) => "shirt.size",
            Self::ShirtType(_) => "shirt.type",
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::PaymentStatus(v) | Self::ShirtSize(v) | Self::ShirtType(v) => v,
        }
    }

    fn apply(self, rsvp: &mut Rsvp) {
        match self {
            Self::PaymentStatus(status) => rsvp.payment_mut().status = Some(status),
            Self::ShirtSize(size) => rsvp.shirt_mut().size = Some(size),
            Self::ShirtType(shirt_type) => rsvp.shirt_mut().shirt_type = Some(shirt_type),
        }
    }
}

#[derive(Clone)]
pub struct RsvpService {
    store: Arc<dyn RsvpStore>,
}

impl RsvpService {
    pub fn new(store: Arc<dyn RsvpStore>) -> Self {
        Self { store }
    }

    /// Every record ordered by name; a store failure propagates untouched
    pub async fn all(&self) -> AppResult<Vec<Rsvp>> {
        Ok(self.store.all_by_name().await?)
    }

    pub async fn get(&self, id: &str) -> AppResult<Rsvp> {
        Ok(self.store.get(id).await?)
    }

    /// Apply one organizer edit and stamp `meta.editedBy`.
    ///
    /// Unknown ids fail with `RsvpNotFound` before anything is written.
    pub async fn edit_field(&self, id: &str, edit: FieldEdit, editor: &str) -> AppResult<Rsvp> {
        validate_required_text(id, "id", MAX_ID_LEN)?;
        validate_required_text(edit.value(), edit.field(), MAX_SHORT_TEXT_LEN)?;

        let field = edit.field();
        let editor_id = editor.to_string();
        let rsvp = self
            .store
            .modify(
                id,
                Box::new(move |rsvp: &mut Rsvp| {
                    edit.apply(rsvp);
                    rsvp.meta_mut().edited_by = Some(editor_id);
                }),
            )
            .await?;

        tracing::info!(rsvp_id = %id, field, editor = %editor, "RSVP field edited");
        Ok(rsvp)
    }

    /// Replace the adventure sub-documents present in `update`
    pub async fn save_adventure(&self, id: &str, update: AdventureUpdate) -> AppResult<Rsvp> {
        if let Some(shirt) = &update.shirt {
            validate_optional_text(shirt.size.as_deref(), "shirt.size", MAX_SHORT_TEXT_LEN)?;
            validate_optional_text(shirt.shirt_type.as_deref(), "shirt.type", MAX_SHORT_TEXT_LEN)?;
        }

        let AdventureUpdate {
            shirt,
            volunteer,
            hosting,
            housing,
        } = update;
        let rsvp = self
            .store
            .modify(
                id,
                Box::new(move |rsvp: &mut Rsvp| {
                    if shirt.is_some() {
                        rsvp.shirt = shirt;
                    }
                    if volunteer.is_some() {
                        rsvp.volunteer = volunteer;
                    }
                    if hosting.is_some() {
                        rsvp.hosting = hosting;
                    }
                    if housing.is_some() {
                        rsvp.housing = housing;
                    }
                }),
            )
            .await?;

        tracing::info!(rsvp_id = %id, "Adventure saved");
        Ok(rsvp)
    }

    /// Replace the payment sub-document
    pub async fn save_payment(&self, id: &str, payment: Payment) -> AppResult<Rsvp> {
        validate_optional_text(payment.method.as_deref(), "method", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(payment.status.as_deref(), "status", MAX_SHORT_TEXT_LEN)?;

        let rsvp = self
            .store
            .modify(id, Box::new(move |rsvp: &mut Rsvp| rsvp.payment = Some(payment)))
            .await?;

        tracing::info!(rsvp_id = %id, "Payment saved");
        Ok(rsvp)
    }
}

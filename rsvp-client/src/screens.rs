//! Screen controllers
//!
//! Each controller copies its fields out of the session on entry. Its
//! forward action writes them back, saves the session locally, sends one
//! PUT for its sub-document and only then advances the flow. A failed PUT
//! leaves the flow where it was; nothing is retried.

use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;
use shared::models::{Payment, Shirt, Volunteer};

use crate::client::HttpClient;
use crate::flow::FlowState;
use crate::session::Session;
use crate::wizard::{ADVENTURE_PATH, PAYMENT_PATH, RsvpWizard};
use crate::ClientResult;

/// Outcome of [`PaymentScreen::finish`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// A previous finish is still in flight; nothing happened
    AlreadySubmitting,
    Advanced(FlowState),
}

pub struct ChooseAdventureScreen<'w, C> {
    wizard: &'w RsvpWizard<C>,
    pub shirt: Shirt,
    pub volunteer: Volunteer,
    pub hosting: Option<Value>,
    pub housing: Option<Value>,
}

impl<'w, C: HttpClient> ChooseAdventureScreen<'w, C> {
    pub(crate) fn enter(wizard: &'w RsvpWizard<C>) -> Self {
        let session = wizard.session();
        let rsvp = session.rsvp();
        Self {
            wizard,
            shirt: rsvp.shirt.clone().unwrap_or_default(),
            volunteer: rsvp.volunteer.clone().unwrap_or_default(),
            hosting: rsvp.hosting.clone(),
            housing: rsvp.housing.clone(),
        }
    }

    fn write_back(&self, session: &mut Session) {
        let rsvp = session.rsvp_mut();
        rsvp.shirt = Some(self.shirt.clone());
        rsvp.volunteer = Some(self.volunteer.clone());
        if self.hosting.is_some() {
            rsvp.hosting = self.hosting.clone();
        }
        if self.housing.is_some() {
            rsvp.housing = self.housing.clone();
        }
    }

    pub async fn next(&self) -> ClientResult<FlowState> {
        let session = self.wizard.save_session(|s| self.write_back(s))?;

        if let Err(err) = self.wizard.client().put::<(), _>(ADVENTURE_PATH, &session).await {
            tracing::warn!(error = %err, "Adventure not saved, staying on screen");
            return Err(err);
        }
        Ok(self.wizard.advance())
    }
}

pub struct PaymentScreen<'w, C> {
    wizard: &'w RsvpWizard<C>,
    payment: Payment,
    is_submitting: AtomicBool,
}

impl<'w, C: HttpClient> PaymentScreen<'w, C> {
    pub(crate) fn enter(wizard: &'w RsvpWizard<C>) -> Self {
        Self {
            wizard,
            payment: wizard.session().rsvp().payment.clone().unwrap_or_default(),
            is_submitting: AtomicBool::new(false),
        }
    }

    pub fn payment(&self) -> &Payment {
        &self.payment
    }

    pub fn set_payment(&mut self, method: impl Into<String>) {
        self.payment.method = Some(method.into());
    }

    pub fn is_payment(&self, method: &str) -> bool {
        self.payment.method.as_deref() == Some(method)
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting.load(Ordering::Acquire)
    }

    /// Save the payment and finish the wizard.
    ///
    /// Calls made while one is in flight return
    /// [`Submission::AlreadySubmitting`] and change nothing. The guard is
    /// released when the PUT settles, either way.
    pub async fn finish(&self) -> ClientResult<Submission> {
        if self.is_submitting.swap(true, Ordering::AcqRel) {
            tracing::debug!("Payment already submitting, ignoring");
            return Ok(Submission::AlreadySubmitting);
        }

        let sent = self.send().await;
        self.is_submitting.store(false, Ordering::Release);
        if let Err(err) = sent {
            tracing::warn!(error = %err, "Payment not saved, staying on screen");
            return Err(err);
        }

        // local only; the server never confirms submission
        self.wizard
            .save_session(|s| s.rsvp_mut().meta_mut().submitted = true)?;
        Ok(Submission::Advanced(self.wizard.advance()))
    }

    async fn send(&self) -> ClientResult<()> {
        let session = self
            .wizard
            .save_session(|s| s.rsvp_mut().payment = Some(self.payment.clone()))?;
        let payment = session.rsvp().payment.clone().unwrap_or_default();
        self.wizard.client().put(PAYMENT_PATH, &payment).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::Screen;
    use crate::session::{MemorySessionStore, SessionStore};
    use crate::test_support::{Gate, MockClient};
    use serde_json::json;
    use shared::models::Rsvp;
    use std::sync::Arc;

    fn wizard_with(client: MockClient, rsvp: Value) -> (RsvpWizard<MockClient>, Arc<MemorySessionStore>) {
        let store = client
            .store
            .clone()
            .unwrap_or_else(|| Arc::new(MemorySessionStore::new()));
        let rsvp: Rsvp = serde_json::from_value(rsvp).unwrap();
        let wizard = RsvpWizard::new(client, Session::new(rsvp), Box::new(store.clone()));
        (wizard, store)
    }

    #[tokio::test]
    async fn test_adventure_hydrates_and_advances() {
        let store = Arc::new(MemorySessionStore::new());
        let client = MockClient {
            store: Some(store.clone()),
            ..Default::default()
        };
        let (wizard, _) = wizard_with(
            client,
            json!({"id": "r-1", "shirt": {"size": "M"}, "housing": {"need": true}}),
        );

        let mut screen = wizard.adventure();
        assert_eq!(screen.shirt.size.as_deref(), Some("M"));
        assert!(!screen.volunteer.any());

        screen.shirt.size = Some("L".into());
        screen.volunteer.during = true;
        assert_eq!(screen.next().await.unwrap(), FlowState::At(Screen::Payment));

        let puts = wizard.client().puts.lock().clone();
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].path, ADVENTURE_PATH);
        assert_eq!(puts[0].body["shirt"]["size"], json!("L"));
        assert_eq!(puts[0].body["housing"], json!({"need": true}));
        // saved locally before the request went out
        assert_eq!(puts[0].saves_before, Some(1));

        let session = wizard.session();
        assert!(session.rsvp().volunteer.as_ref().unwrap().during);
    }

    #[tokio::test]
    async fn test_failed_put_does_not_advance() {
        let client = MockClient::default();
        client.fail_puts.store(true, Ordering::SeqCst);
        let (wizard, store) = wizard_with(client, json!({"id": "r-1"}));

        let screen = wizard.adventure();
        assert!(screen.next().await.is_err());
        assert_eq!(wizard.state(), FlowState::At(Screen::ChooseYourAdventure));
        // local save still happened, no retry
        assert_eq!(store.save_count(), 1);
        assert_eq!(wizard.client().put_paths().len(), 1);
    }

    #[tokio::test]
    async fn test_payment_finish_stamps_submitted() {
        let (wizard, store) = wizard_with(MockClient::default(), json!({"id": "r-1"}));
        wizard.adventure().next().await.unwrap();

        let mut screen = wizard.payment();
        assert!(!screen.is_payment("paypal"));
        screen.set_payment("paypal");
        assert!(screen.is_payment("paypal"));

        let outcome = screen.finish().await.unwrap();
        assert_eq!(outcome, Submission::Advanced(FlowState::Done));
        assert!(!screen.is_submitting());

        let puts = wizard.client().puts.lock().clone();
        assert_eq!(puts[1].path, PAYMENT_PATH);
        assert_eq!(puts[1].body, json!({"method": "paypal"}));

        assert!(wizard.session().is_submitted());
        assert!(store.load().unwrap().unwrap().is_submitted());
    }

    #[tokio::test]
    async fn test_finish_while_pending_is_a_no_op() {
        let gate = Arc::new(Gate::default());
        let client = MockClient {
            gate: Some(gate.clone()),
            ..Default::default()
        };
        let (wizard, _) = wizard_with(client, json!({"id": "r-1"}));

        let screen = wizard.payment();
        let first = screen.finish();
        let second = async {
            gate.entered.notified().await;
            assert!(screen.is_submitting());
            let before = wizard.session();
            let outcome = screen.finish().await;
            assert_eq!(wizard.session(), before);
            assert_eq!(wizard.state(), FlowState::At(Screen::Payment));
            gate.release.notify_one();
            outcome
        };

        let (first, second) = futures::join!(first, second);
        assert_eq!(second.unwrap(), Submission::AlreadySubmitting);
        assert_eq!(first.unwrap(), Submission::Advanced(FlowState::Done));
        assert_eq!(wizard.client().put_paths(), vec![PAYMENT_PATH.to_string()]);
    }

    #[tokio::test]
    async fn test_failed_payment_releases_guard() {
        let client = MockClient::default();
        client.fail_puts.store(true, Ordering::SeqCst);
        let (wizard, _) = wizard_with(client, json!({"id": "r-1"}));

        let mut screen = wizard.payment();
        screen.set_payment("cash");
        assert!(screen.finish().await.is_err());
        assert!(!screen.is_submitting());
        assert!(!wizard.session().is_submitted());
        assert_eq!(wizard.state(), FlowState::At(Screen::Payment));

        // guest may try again by hand
        wizard.client().fail_puts.store(false, Ordering::SeqCst);
        assert_eq!(
            screen.finish().await.unwrap(),
            Submission::Advanced(FlowState::Done)
        );
    }
}

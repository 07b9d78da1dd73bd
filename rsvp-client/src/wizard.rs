//! RSVP wizard
//!
//! Owns the transport, the session, the local session store and the flow.
//! Screen controllers borrow the wizard; see [`crate::screens`].

use parking_lot::Mutex;
use shared::models::Rsvp;

use crate::client::HttpClient;
use crate::flow::{FlowState, RsvpFlow, Screen};
use crate::screens::{ChooseAdventureScreen, PaymentScreen};
use crate::session::{Session, SessionStore};
use crate::ClientResult;

pub const RSVP_DATA_PATH: &str = "/rsvp/data";
pub const ADVENTURE_PATH: &str = "/rsvp/data/adventure";
pub const PAYMENT_PATH: &str = "/rsvp/data/payment";

pub struct RsvpWizard<C> {
    client: C,
    session: Mutex<Session>,
    flow: Mutex<RsvpFlow>,
    store: Box<dyn SessionStore>,
}

impl<C: HttpClient> RsvpWizard<C> {
    pub fn new(client: C, session: Session, store: Box<dyn SessionStore>) -> Self {
        Self {
            client,
            session: Mutex::new(session),
            flow: Mutex::new(RsvpFlow::new()),
            store,
        }
    }

    /// Hydrate the session from the server's copy of the guest's RSVP
    pub async fn resume(client: C, store: Box<dyn SessionStore>) -> ClientResult<Self> {
        let rsvp: Rsvp = client.get(RSVP_DATA_PATH).await?;
        let session = Session::from(rsvp);
        store.save(&session)?;
        tracing::info!(rsvp_id = %session.rsvp().id, "Session hydrated from server");
        Ok(Self::new(client, session, store))
    }

    /// Pick up a locally saved session, if there is one
    pub fn restore(client: C, store: Box<dyn SessionStore>) -> ClientResult<Option<Self>> {
        let Some(session) = store.load()? else {
            return Ok(None);
        };
        tracing::info!(rsvp_id = %session.rsvp().id, "Session restored from disk");
        Ok(Some(Self::new(client, session, store)))
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn session(&self) -> Session {
        self.session.lock().clone()
    }

    pub fn state(&self) -> FlowState {
        self.flow.lock().state()
    }

    /// Enter the choose-your-adventure screen
    pub fn adventure(&self) -> ChooseAdventureScreen<'_, C> {
        self.flow.lock().set_screen(Screen::ChooseYourAdventure);
        ChooseAdventureScreen::enter(self)
    }

    /// Enter the payment screen
    pub fn payment(&self) -> PaymentScreen<'_, C> {
        self.flow.lock().set_screen(Screen::Payment);
        PaymentScreen::enter(self)
    }

    /// Mutate the session and save it locally; returns the saved copy
    pub(crate) fn save_session(&self, edit: impl FnOnce(&mut Session)) -> ClientResult<Session> {
        let mut session = self.session.lock();
        edit(&mut session);
        self.store.save(&session)?;
        Ok(session.clone())
    }

    pub(crate) fn advance(&self) -> FlowState {
        self.flow.lock().next()
    }
}

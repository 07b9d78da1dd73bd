//! Local Wizard Example - guest wizard and admin panel in one process
//!
//! Seeds an in-memory store, walks a guest through the wizard over the
//! in-process transport, then reads the organizer views.
//!
//! Run: cargo run -p rsvp-server --example local_wizard

use rsvp_client::{HttpClient, MemorySessionStore, OneshotHttpClient, RsvpWizard};
use rsvp_server::auth::{JwtConfig, TokenType};
use rsvp_server::{Config, RedbStore, RsvpStore, ServerState, build_app};
use serde_json::Value;
use shared::models::Rsvp;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let jwt = JwtConfig::with_secret(rsvp_server::auth::jwt::generate_printable_jwt_secret()?);
    let config = Config::with_overrides("./target/demo-data", 0, jwt);
    let store = RedbStore::open_in_memory()?;
    let guests: Vec<Rsvp> = [("r-1", "Ada"), ("r-2", "Bob")]
        .into_iter()
        .map(|(id, name)| {
            let mut rsvp = Rsvp::new(id);
            rsvp.person = Some(shared::models::Person {
                name: Some(name.into()),
                is_attending: None,
            });
            rsvp
        })
        .collect();
    store.insert_all(&guests).await?;

    let state = ServerState::with_store(config, store).await?;
    let router = build_app(&state).with_state(state.clone());

    // === Guest ===
    let guest = OneshotHttpClient::new(router.clone());
    guest.set_token(Some(state.jwt_service.generate_token("r-1", "Ada", None, TokenType::Guest)?));

    let wizard = RsvpWizard::resume(guest, Box::new(MemorySessionStore::new())).await?;
    let mut adventure = wizard.adventure();
    adventure.shirt.size = Some("M".into());
    adventure.volunteer.during = true;
    adventure.next().await?;

    let mut payment = wizard.payment();
    payment.set_payment("paypal");
    println!("Wizard finished: {:?}", payment.finish().await?);

    // === Organizer ===
    state.access_list.set(vec!["lead@example.com".into()]);
    let organizer = OneshotHttpClient::new(router);
    organizer.set_token(Some(state.jwt_service.generate_token(
        "org-1",
        "Lead",
        Some("lead@example.com"),
        TokenType::Organizer,
    )?));

    let volunteers: Value = organizer.get("/volunteers").await?;
    println!("Volunteers: {}", serde_json::to_string_pretty(&volunteers)?);
    let shirts: Value = organizer.get("/shirts").await?;
    println!("Shirts: {}", serde_json::to_string_pretty(&shirts["rsvps"])?);

    Ok(())
}

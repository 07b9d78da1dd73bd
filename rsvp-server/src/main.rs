use rsvp_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. dotenv + logging
    setup_environment();

    tracing::info!("RSVP server starting (v{})", env!("CARGO_PKG_VERSION"));

    // 2. Configuration
    let config = Config::from_env()?;
    tracing::info!(
        environment = %config.environment,
        database = %config.database_path.display(),
        "Configuration loaded"
    );

    // 3. Stores, settings cache, access list
    let state = ServerState::initialize(&config).await?;

    // 4. Serve
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

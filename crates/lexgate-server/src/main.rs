mod configuration;
mod error;
mod routes;
mod state;

use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env is optional
    dotenv::dotenv().ok();

    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = configuration::Settings::new()?;
    settings.warn_missing_credentials();
    if !settings.search.enabled {
        info!("search enrichment disabled");
    }

    let addr = settings.server.socket_addr()?;
    let state = state::AppState::from_settings(settings)?;
    let app = routes::configure(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

//! Service entry point: tracing, seeded system, HTTP listener.

use brewline::api;
use brewline::lifecycle::CafeSystem;
use brewline::seed::SeedData;
use ledger_actor::tracing::setup_tracing;
use tracing::info;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting brewline");

    let system = CafeSystem::new(SeedData::demo());
    let app = api::router(system.api_state());

    let port = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .map_err(|e| format!("Failed to bind port {}: {}", port, e))?;

    info!(port, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .map_err(|e| e.to_string())?;

    // The router (and its client clones) is gone once serve returns, so the
    // ledgers drain and exit here.
    system.shutdown().await?;

    info!("Goodbye");
    Ok(())
}

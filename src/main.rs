//! PIX Charge Service - HTTP front for PixUp charge creation.
//!
//! This is the main entry point for the pix-charge-service binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pix_charge_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pix_charge_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PIX Charge Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        pixup_api_url = %config.pixup_api_url,
        token_service_url = %config.token_service_url,
        pixup_configured = %config.pixup_client_id.is_some(),
        supabase_configured = %config.supabase_url.is_some(),
        "Service configuration loaded"
    );

    // Build app state (clients are constructed once and injected)
    let state = AppState::new(config.clone());

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

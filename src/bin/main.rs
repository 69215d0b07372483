use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber;

use crowdfund_backend::handlers::routes::create_router;
use crowdfund_backend::handlers::AppState;
use crowdfund_backend::infrastructure::contracts::config::{
    get_factory_address, get_network_config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Resolve network configuration and the deployed factory
    let network = get_network_config();
    let factory_address = get_factory_address().map_err(|e| {
        error!("Failed to resolve factory address: {}", e);
        e
    })?;

    info!(
        chain_id = network.chain_id,
        factory = %format!("{:?}", factory_address),
        "using deployed campaign factory"
    );

    let state = AppState {
        network,
        factory_address,
    };

    // Create router
    let app = create_router(state);

    // Load server address from environment
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Start the server
    info!("Server running at http://{}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Application shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Received shutdown signal");
}

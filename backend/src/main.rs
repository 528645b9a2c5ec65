//! Pharmacy Inventory Management Platform - Backend Server

use std::net::SocketAddr;
use std::sync::Arc;

use pharmacy_inventory_backend::store::Store;
use pharmacy_inventory_backend::{config, create_app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pharmacy_inventory_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Pharmacy Inventory Management Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the inventory snapshot
    let store = Store::open(&config.storage.data_file);
    {
        let inventory = store.read();
        tracing::info!(
            medicines = inventory.medicines.len(),
            warehouses = inventory.warehouses.len(),
            stock_batches = inventory.stock_batches.len(),
            "Inventory loaded from {}",
            config.storage.data_file
        );
    }

    // Create application state
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Frontend Edge Gateway
//!
//! A small edge process built with Tokio and Axum. Every request takes
//! one of two paths:
//!
//! ```text
//!                    ┌────────────────────────────────────────┐
//!                    │            FRONTEND GATEWAY             │
//!   Client Request   │  ┌─────────┐     ┌──────────────────┐  │
//!   ─────────────────┼─▶│ routing │──┬─▶│      proxy       │──┼──▶ Backend API
//!                    │  └─────────┘  │  │ (/api/** → origin)│  │   (BACKEND_URL)
//!                    │               │  └──────────────────┘  │
//!                    │               │  ┌──────────────────┐  │
//!                    │               └─▶│      assets      │  │
//!                    │                  │ (bundle + SPA    │  │
//!                    │                  │  index fallback) │  │
//!                    │                  └──────────────────┘  │
//!                    └────────────────────────────────────────┘
//! ```
//!
//! Configuration comes from the environment (`FRONTEND_PORT`,
//! `BACKEND_URL`, `FRONTEND_ASSET_DIR`), read once at startup.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use frontend_gateway::config;
use frontend_gateway::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontend_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("frontend-gateway v0.1.0 starting");

    // Load configuration; invalid config is fatal before any socket is bound
    let config = match config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        backend_url = %config.backend.url,
        asset_dir = %config.assets.dir.display(),
        "Configuration loaded"
    );

    let server = HttpServer::new(config.clone())?;

    // Bind TCP listener
    let listener = match TcpListener::bind(config.listener.bind_address()).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(
                address = %config.listener.bind_address(),
                error = %e,
                "Failed to bind listener"
            );
            return Err(e.into());
        }
    };

    server.run(listener).await?;

    Ok(())
}

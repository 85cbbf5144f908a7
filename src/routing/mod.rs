//! Route table assembly.
//!
//! # Responsibilities
//! - Register the `/api` subtree against the proxy handler
//! - Register the static mounts and the SPA catch-all
//!
//! # Design Decisions
//! - Axum matches by specificity, not registration order, so the
//!   catch-all never shadows `/api/**` or the static mounts
//! - Immutable after construction (thread-safe without locks)
//! - `TraceLayer` provides per-request logging across every route

use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

use crate::assets;
use crate::config::GatewayConfig;
use crate::proxy::{self, ProxyState};

/// Build the gateway router: the complete path → handler table.
pub fn build_router(config: &GatewayConfig, proxy: ProxyState) -> Router {
    Router::new()
        .route("/api", any(proxy::forward))
        // `{*rest}` does not match an empty segment, so the bare
        // trailing-slash path needs its own entry
        .route("/api/", any(proxy::forward))
        .route("/api/{*rest}", any(proxy::forward))
        .nest_service("/assets", assets::assets_service(&config.assets))
        .route_service(
            "/favicon.ico",
            assets::file_service(&config.assets, "favicon.ico"),
        )
        .route_service(
            "/robots.txt",
            assets::file_service(&config.assets, "robots.txt"),
        )
        .route_service(
            "/manifest.json",
            assets::file_service(&config.assets, "manifest.json"),
        )
        .fallback_service(assets::spa_service(&config.assets))
        .with_state(proxy)
        .layer(TraceLayer::new_for_http())
}

//! HTTP server setup.
//!
//! # Responsibilities
//! - Assemble the gateway router from validated config
//! - Serve on a caller-supplied listener
//! - Attach peer addresses so the proxy can populate X-Forwarded-For

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use crate::proxy::{BackendOrigin, OriginError, ProxyState};
use crate::routing::build_router;

/// HTTP server for the frontend gateway.
pub struct HttpServer {
    router: Router,
    origin: BackendOrigin,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new server from a validated configuration.
    ///
    /// Parses the backend origin; this is the last point a bad
    /// `BACKEND_URL` can surface before requests flow.
    pub fn new(config: GatewayConfig) -> Result<Self, OriginError> {
        let origin = BackendOrigin::parse(&config.backend.url)?;
        let router = build_router(&config, ProxyState::new(origin.clone()));

        Ok(Self {
            router,
            origin,
            config,
        })
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Runs until the process is killed; there is no shutdown path.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.origin,
            asset_dir = %self.config.assets.dir.display(),
            "Frontend gateway listening"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app).await
    }
}

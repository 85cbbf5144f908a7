//! Configuration schema definitions.
//!
//! The complete configuration surface of the gateway: where to listen,
//! which origin to proxy `/api` traffic to, and where the asset bundle
//! lives on disk.

use std::path::PathBuf;

/// Root configuration for the frontend gateway.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream API origin.
    pub backend: BackendConfig,

    /// Static asset bundle location.
    pub assets: AssetConfig,
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Port to listen on, bound on all interfaces.
    pub port: u16,
}

impl ListenerConfig {
    /// The address to bind, e.g. "0.0.0.0:5173".
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: 5173 }
    }
}

/// Upstream backend configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Absolute URL of the API origin (e.g. "http://localhost:8080").
    /// Only scheme and authority are used; any path is ignored.
    pub url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".to_string(),
        }
    }
}

/// Static asset bundle configuration.
#[derive(Debug, Clone)]
pub struct AssetConfig {
    /// Directory containing the prebuilt web bundle.
    pub dir: PathBuf,

    /// Root document served for unmatched paths (SPA fallback).
    pub index: String,
}

impl AssetConfig {
    /// Full path to the index document.
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(&self.index)
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
            index: "index.html".to_string(),
        }
    }
}

//! Static asset serving for the bundled web app.
//!
//! # Responsibilities
//! - Build the tower-http file services over the asset bundle
//! - Provide the SPA fallback: unknown paths get the root document
//!
//! # Design Decisions
//! - `ServeDir` handles path sanitisation and content-type inference
//! - The `/assets` mount has no fallback, so missing build artifacts
//!   surface as 404 instead of the app shell

use tower_http::services::{ServeDir, ServeFile};

use crate::config::AssetConfig;

/// File service for the `/assets` subtree of the bundle.
///
/// Requests under `/assets/**` map into `<bundle>/assets/**`; a missing
/// file is a plain 404.
pub fn assets_service(config: &AssetConfig) -> ServeDir {
    ServeDir::new(config.dir.join("assets"))
}

/// File service for a single well-known bundle file (favicon etc).
pub fn file_service(config: &AssetConfig, name: &str) -> ServeFile {
    ServeFile::new(config.dir.join(name))
}

/// Catch-all service: serve the matching bundle file, or the root
/// document for anything else so client-side routing can take over.
pub fn spa_service(config: &AssetConfig) -> ServeDir<ServeFile> {
    ServeDir::new(&config.dir).fallback(ServeFile::new(config.index_path()))
}

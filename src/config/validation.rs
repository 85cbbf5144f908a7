//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (the loader handles env parsing)
//! - Check the backend origin is an absolute URL with scheme + host
//! - Check the asset bundle exists and carries its index document
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::path::PathBuf;

use crate::config::schema::GatewayConfig;
use crate::proxy::BackendOrigin;

/// A single semantic configuration error.
#[derive(Debug)]
pub enum ValidationError {
    /// The backend URL is not a usable absolute URL.
    BackendUrl { url: String, reason: String },
    /// The asset bundle directory is missing or not a directory.
    AssetDir { path: PathBuf },
    /// The index document is missing from the bundle.
    IndexFile { path: PathBuf },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::BackendUrl { url, reason } => {
                write!(f, "invalid backend URL {:?}: {}", url, reason)
            }
            ValidationError::AssetDir { path } => {
                write!(f, "asset directory {:?} is missing or not a directory", path)
            }
            ValidationError::IndexFile { path } => {
                write!(f, "index document {:?} not found in asset bundle", path)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a loaded configuration, collecting every error.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = BackendOrigin::parse(&config.backend.url) {
        errors.push(ValidationError::BackendUrl {
            url: config.backend.url.clone(),
            reason: e.to_string(),
        });
    }

    if !config.assets.dir.is_dir() {
        errors.push(ValidationError::AssetDir {
            path: config.assets.dir.clone(),
        });
    } else if !config.assets.index_path().is_file() {
        errors.push(ValidationError::IndexFile {
            path: config.assets.index_path(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

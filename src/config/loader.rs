//! Configuration loading from the process environment.
//!
//! # Responsibilities
//! - Read `FRONTEND_PORT`, `BACKEND_URL` and `FRONTEND_ASSET_DIR`
//! - Fall back to defaults for anything unset or empty
//! - Run semantic validation before handing the config out
//!
//! # Design Decisions
//! - Env access goes through an injected lookup function so defaults and
//!   parse failures are unit-testable without mutating process state

use std::path::PathBuf;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the listen port.
pub const ENV_PORT: &str = "FRONTEND_PORT";
/// Environment variable naming the upstream API origin.
pub const ENV_BACKEND_URL: &str = "BACKEND_URL";
/// Environment variable naming the asset bundle directory.
pub const ENV_ASSET_DIR: &str = "FRONTEND_ASSET_DIR";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    Parse { variable: &'static str, value: String },
    /// Semantic validation failed.
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse { variable, value } => {
                write!(f, "Invalid {}: {:?}", variable, value)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from the process environment.
pub fn from_env() -> Result<GatewayConfig, ConfigError> {
    from_env_with(|key| std::env::var(key).ok())
}

/// Load configuration using the given environment lookup.
///
/// Unset or empty variables fall back to their defaults. The returned
/// config has passed semantic validation.
pub fn from_env_with<F>(lookup: F) -> Result<GatewayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = GatewayConfig::default();

    if let Some(port) = lookup(ENV_PORT).filter(|v| !v.is_empty()) {
        config.listener.port = port.parse().map_err(|_| ConfigError::Parse {
            variable: ENV_PORT,
            value: port,
        })?;
    }

    if let Some(url) = lookup(ENV_BACKEND_URL).filter(|v| !v.is_empty()) {
        config.backend.url = url;
    }

    if let Some(dir) = lookup(ENV_ASSET_DIR).filter(|v| !v.is_empty()) {
        config.assets.dir = PathBuf::from(dir);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

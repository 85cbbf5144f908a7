//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (FRONTEND_PORT, BACKEND_URL, FRONTEND_ASSET_DIR)
//!     → loader.rs (read & apply defaults)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → passed into server construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Every variable has a default so an empty environment still boots
//! - Validation separates semantic checks from env parsing and reports
//!   every error, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::from_env;
pub use loader::ConfigError;
pub use schema::AssetConfig;
pub use schema::BackendConfig;
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;

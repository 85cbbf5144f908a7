//! Frontend Edge Gateway Library
//!
//! Serves a prebuilt static web bundle and reverse-proxies `/api/**`
//! to a single configurable backend origin.

pub mod assets;
pub mod config;
pub mod http;
pub mod proxy;
pub mod routing;

pub use config::GatewayConfig;
pub use http::HttpServer;

//! HTTP server subsystem.

pub mod server;

pub use server::HttpServer;

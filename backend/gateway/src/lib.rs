//! Leafscan Gateway HTTP API Server
//!
//! Provides the identification endpoint, the health endpoint, and the
//! embedded capture UI.

pub mod health_api;
pub mod identify_api;
pub mod server;
pub mod web_ui;

pub use server::{build_router, start_server, GatewayState};

//! Process configuration for Leafscan.
//!
//! Everything comes from environment variables at startup. The Gemini API key
//! is the one required value; its absence is a deterministic startup failure,
//! never a per-request surprise.

pub mod schema;

pub use schema::{Config, ConfigError, DEFAULT_MODEL};

//! # Postboard API Server
//!
//! Users and posts over HTTP, backed by a document store.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use state::AppState;

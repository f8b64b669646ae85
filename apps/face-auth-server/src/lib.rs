//! # Face Auth Server
//!
//! Actix-web wiring for the face-auth function: configuration, state,
//! routes and error mapping.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use state::AppState;

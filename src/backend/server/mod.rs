//! Server Module
//!
//! Configuration loading, application state, and router construction.

pub mod config;
pub mod init;
pub mod state;

pub use config::{AuthConfig, ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;

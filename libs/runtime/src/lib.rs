//! Process-level plumbing shared by the server binary: layered configuration
//! and tracing initialization.

pub mod config;
pub mod logging;

pub use config::{
    AppConfig, CliArgs, DatabaseConfig, LoggingConfig, ServerConfig, MOCK_DATABASE_URL,
};

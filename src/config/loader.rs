//! Configuration loading from disk and the environment.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::config::schema::PhonebookConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<PhonebookConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: PhonebookConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Replace the port of the listener address.
///
/// Used for the `PORT` environment variable and the `--port` flag. An
/// unparseable bind address is left alone for validation to report.
pub fn apply_port_override(config: &mut PhonebookConfig, port: u16) {
    match config.listener.bind_address.parse::<SocketAddr>() {
        Ok(mut addr) => {
            addr.set_port(port);
            config.listener.bind_address = addr.to_string();
        }
        Err(_) => {
            tracing::warn!(
                bind_address = %config.listener.bind_address,
                port,
                "Cannot apply port override to invalid bind address"
            );
        }
    }
}

/// Read `PORT` from the environment, ignoring unset or invalid values.
pub fn port_from_env() -> Option<u16> {
    let raw = std::env::var("PORT").ok()?;
    match raw.parse() {
        Ok(port) => Some(port),
        Err(_) => {
            tracing::warn!(port = %raw, "Ignoring invalid PORT environment variable");
            None
        }
    }
}

//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve configuration from file, environment and flags
//! - Validate before anything binds
//! - Build the initial store
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Precedence: `--port` flag, then `PORT`, then config file, then defaults

use std::path::Path;

use crate::config::{
    apply_port_override, load_config, loader::port_from_env, validate_config, ConfigError,
    PhonebookConfig,
};
use crate::store::PersonStore;

/// Produce the effective, validated configuration.
pub fn resolve_config(
    path: Option<&Path>,
    env_port: Option<u16>,
    flag_port: Option<u16>,
) -> Result<PhonebookConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => PhonebookConfig::default(),
    };

    if let Some(port) = flag_port.or(env_port) {
        apply_port_override(&mut config, port);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Resolve configuration using the process environment for `PORT`.
pub fn bootstrap(
    path: Option<&Path>,
    flag_port: Option<u16>,
) -> Result<PhonebookConfig, ConfigError> {
    resolve_config(path, port_from_env(), flag_port)
}

/// The store the server starts with.
pub fn initial_store(config: &PhonebookConfig) -> PersonStore {
    if config.store.seed_sample_data {
        PersonStore::with_sample_data()
    } else {
        PersonStore::new()
    }
}

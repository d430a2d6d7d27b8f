//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, PORT override)
//!     → validation.rs (semantic checks)
//!     → PhonebookConfig (validated, immutable)
//!     → handed to HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_port_override, load_config, ConfigError};
pub use schema::{
    AssetConfig, ListenerConfig, ObservabilityConfig, PhonebookConfig, SecurityConfig,
    StoreConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};

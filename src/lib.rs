//! Phonebook Service Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::PhonebookConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{Person, PersonStore};

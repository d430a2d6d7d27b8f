//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → middleware/ (access log, metrics)
//!     → handlers.rs (phonebook API) or assets.rs (static fallback)
//!     → error.rs / response.rs (JSON errors, info page)
//!     → Send to client
//! ```

pub mod assets;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use error::ApiError;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};

//! API error type with HTTP status mapping.
//!
//! Every error renders as `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No person with the requested id (404).
    #[error("Person not found")]
    NotFound,

    /// Name or number absent or empty (400).
    #[error("Name or number missing")]
    MissingField,

    /// Another entry already has this name (400).
    #[error("Name must be unique")]
    DuplicateName,

    /// Request body could not be read as a JSON object of strings (400).
    #[error("{0}")]
    MalformedBody(String),

    /// No route or asset matched (404).
    #[error("unknown endpoint")]
    UnknownEndpoint,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::UnknownEndpoint => StatusCode::NOT_FOUND,
            Self::MissingField | Self::DuplicateName | Self::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::MissingField => Self::MissingField,
            StoreError::DuplicateName(_) => Self::DuplicateName,
            StoreError::NotFound(_) => Self::NotFound,
        }
    }
}

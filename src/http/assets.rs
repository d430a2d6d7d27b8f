//! Static frontend serving and the unknown-endpoint fallback.
//!
//! # Responsibilities
//! - Serve files from the asset directory for GET/HEAD outside `/api/`
//! - Fall back to the index page so client-side routes resolve
//! - Answer everything else with `{"error": "unknown endpoint"}`

use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::AssetConfig;
use crate::http::error::ApiError;
use crate::http::server::AppState;

pub type AssetService = ServeDir<ServeFile>;

pub fn asset_service(config: &AssetConfig) -> AssetService {
    ServeDir::new(&config.dir).fallback(ServeFile::new(config.index_path()))
}

fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Router fallback for requests no API route matched.
pub async fn fallback(State(state): State<AppState>, request: Request) -> Response {
    let is_read = matches!(*request.method(), Method::GET | Method::HEAD);
    if !is_read || is_api_path(request.uri().path()) {
        return ApiError::UnknownEndpoint.into_response();
    }

    let path = request.uri().path().to_string();
    match state.assets.clone().oneshot(request).await {
        Ok(response) if response.status() != StatusCode::NOT_FOUND => response.map(Body::new),
        Ok(_) => {
            tracing::debug!(path = %path, "No asset or index page");
            ApiError::UnknownEndpoint.into_response()
        }
        Err(e) => {
            tracing::error!(path = %path, error = %e, "Asset service failed");
            ApiError::UnknownEndpoint.into_response()
        }
    }
}

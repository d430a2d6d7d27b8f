//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, CORS, limits)
//! - Serve the static frontend for unmatched GETs
//! - Bind server to listener and shut down gracefully

use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{header, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::PhonebookConfig;
use crate::http::assets::{self, AssetService};
use crate::http::handlers;
use crate::http::middleware::access_log;
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::observability::metrics;
use crate::store::{PersonStore, SharedStore};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub assets: AssetService,
}

/// HTTP server for the phonebook.
pub struct HttpServer {
    router: Router,
    config: PhonebookConfig,
    store: SharedStore,
}

impl HttpServer {
    /// Create a new HTTP server owning `store`.
    pub fn new(config: PhonebookConfig, store: PersonStore) -> Self {
        metrics::record_people(store.len());
        let store: SharedStore = Arc::new(RwLock::new(store));

        let state = AppState {
            store: store.clone(),
            assets: assets::asset_service(&config.assets),
        };

        let router = build_router(&config, state);
        Self {
            router,
            config,
            store,
        }
    }

    /// Run the server until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            assets = %self.config.assets.dir.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Handle to the store the handlers operate on.
    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    pub fn config(&self) -> &PhonebookConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &PhonebookConfig, state: AppState) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id(request.headers()),
        )
    });

    let mut router = Router::new()
        .route(
            "/api/persons",
            get(handlers::list_persons)
                .post(handlers::create_person)
                .fallback(handlers::unknown_endpoint),
        )
        .route(
            "/api/persons/{id}",
            get(handlers::get_person)
                .delete(handlers::delete_person)
                .fallback(handlers::unknown_endpoint),
        )
        .route("/info", get(handlers::info))
        .fallback(assets::fallback)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.security.max_body_size))
        .layer(middleware::from_fn(access_log))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(trace)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4));

    if config.security.enable_headers {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ));
    }

    if config.security.cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, body limit, metrics)
//! - Bind server to listener
//! - Stop gracefully on shutdown

use axum::{
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::employee::{create_employee, get_employee, list_employees};
use crate::http::health::get_status;
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::shutdown::shutdown_requested;
use crate::observability::metrics;
use crate::store::EmployeeStore;

/// Base path of the employee resource.
pub const EMPLOYEE_BASE_PATH: &str = "/api/v1/employee";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
}

/// HTTP server for the employee API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given store.
    pub fn new(config: AppConfig, store: Arc<dyn EmployeeStore>) -> Self {
        metrics::record_store_size(store.len());
        let state = AppState { store };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &AppConfig, state: AppState) -> Router {
        let collection = get(list_employees).post(create_employee);

        Router::new()
            .route(EMPLOYEE_BASE_PATH, collection.clone())
            .route(&format!("{}/", EMPLOYEE_BASE_PATH), collection)
            .route(&format!("{}/{{id}}", EMPLOYEE_BASE_PATH), get(get_employee))
            .route("/health", get(get_status))
            .route_layer(middleware::from_fn(metrics::track_metrics))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                    .layer(propagate_request_id_layer())
                    .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
                    // Timeout must wrap the route directly: it needs a `Default` response body.
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// Run the server until the shutdown channel fires or the process is signalled.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_requested(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Clone of the fully layered router, for driving requests without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

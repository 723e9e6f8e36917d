//! HTTP surface of the venue backend.
//!
//! Exposes birthday reservations, the product catalog, orders, and event
//! registrations over JSON, with request tracing and Prometheus metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use store::Store;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: Store + Clone + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/birthday/reserve", post(routes::birthdays::reserve::<S>))
        .route("/birthday/list", get(routes::birthdays::list::<S>))
        .route("/birthday/{id}", get(routes::birthdays::get::<S>))
        .route("/products/add", post(routes::products::add::<S>))
        .route("/products", get(routes::products::list::<S>))
        .route("/products/{id}", get(routes::products::get::<S>))
        .route("/orders/create", post(routes::orders::create::<S>))
        .route("/orders", get(routes::orders::list::<S>))
        .route("/orders/{id}", get(routes::orders::get::<S>))
        .route("/events/create", post(routes::events::create::<S>))
        .route("/events", get(routes::events::list::<S>))
        .route("/events/{id}", get(routes::events::get::<S>))
        .route("/events/{id}/register", post(routes::events::register::<S>))
        .route(
            "/events/{id}/registrations",
            get(routes::events::registrations::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Wraps a store in shared application state.
pub fn create_state<S: Store + Clone + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::new(store))
}

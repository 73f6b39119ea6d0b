//! HTTP service exposing the rendering pipeline

mod routes;
#[cfg(test)]
mod tests;

use axum::routing::get;
use axum::Router;

use crate::config::ServiceConfig;

/// Shared per-request state. Nothing here is mutable; every request runs the
/// pipeline independently.
#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
}

/// Build the application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/block/:num", get(routes::block_image))
        .route("/health", get(routes::health))
        .fallback(routes::not_found)
        .with_state(state)
}

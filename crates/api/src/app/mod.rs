//! HTTP application wiring (Axum router + store composition).
//!
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error/outcome responses
//! - this module: app state and router assembly

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use catalog_core::EntityStore;
use catalog_infra::{ProductBackend, StoreProvider};
use catalog_products::Product;

use crate::middleware;

pub mod errors;
pub mod routes;

/// Shared application state: the composition layer that hands each request
/// its own store handle.
pub struct AppState {
    provider: Arc<dyn StoreProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn StoreProvider>) -> Self {
        Self { provider }
    }

    /// Store handle scoped to the current request.
    pub fn products(&self) -> Box<dyn EntityStore<Product>> {
        self.provider.request_store()
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(backend: ProductBackend, gateway_key: String) -> Router {
    build_app_with(Arc::new(backend), gateway_key)
}

/// Router over an arbitrary store provider (tests substitute their own).
pub fn build_app_with(provider: Arc<dyn StoreProvider>, gateway_key: String) -> Router {
    let state = Arc::new(AppState::new(provider));
    let gateway = middleware::GatewayState {
        api_key: Arc::new(gateway_key),
    };

    // Everything except /health sits behind the gateway-origin check.
    let gated = Router::new()
        .nest("/products", routes::products::router())
        .layer(Extension(state))
        .layer(axum::middleware::from_fn_with_state(
            gateway,
            middleware::gateway_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(gated)
}

//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health, info, ready, root, AppState};

/// Create the API router.
///
/// All four routes are reachable from any origin: the CORS layer allows any
/// origin, method, and header, and answers OPTIONS preflight requests.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Probe endpoints for the load balancer and orchestrator
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/info", get(info))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

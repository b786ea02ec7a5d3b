//! # Routes
//!
//! Axum router configuration for the payment API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /config - Public gateway key for the browser checkout
/// - POST /create-order - Create an order for an allowed identity
/// - POST /verify-payment - Verify a checkout signature
/// - GET  /trigger-cron-j4k8s9p2q1 - Scheduler keep-alive ping
/// - GET  /health - Health check
///
/// Anything else is served from the public directory.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/health", get(handlers::health))
        // Payment flow
        .route("/config", get(handlers::config))
        .route("/create-order", post(handlers::create_order))
        .route("/verify-payment", post(handlers::verify_payment))
        // Scheduler ping
        .route(handlers::CRON_TRIGGER_PATH, get(handlers::trigger_cron))
        // Frontend
        .fallback_service(static_files)
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        // State
        .with_state(state)
}

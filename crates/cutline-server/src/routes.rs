//! Router configuration.

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers::{confirm_payment, create_intent, health_check, pricing};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// - `GET  /health` - Health check
/// - `GET  /api/payment/pricing` - Service catalog
/// - `POST /api/payment/create-intent` - Create a payment intent
/// - `POST /api/payment/confirm` - Confirm payment, run crypto payout
///
/// Everything else is served from `static_dir`, with `index.html` as the
/// fallback so frontend routes resolve.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let payments = Router::new()
        .route("/pricing", get(pricing))
        .route("/create-intent", post(create_intent))
        .route("/confirm", post(confirm_payment));

    let index = Path::new(&config.static_dir).join("index.html");
    let frontend = ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/payment", payments)
        .fallback_service(frontend)
        .layer(build_cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

//! cutline HTTP server
//!
//! Axum-based server for the studio site: the service catalog, Stripe
//! payment intents and payment confirmation with a mock crypto payout.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{GatewayKind, ServerConfig};
pub use routes::create_router;
pub use state::AppState;

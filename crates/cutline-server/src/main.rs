//! cutline HTTP Server
//!
//! Serves the payment API and the compiled WASM frontend.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cutline_payments::MockCryptoPayout;
use cutline_server::{create_router, AppState, GatewayKind, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Initialize payments
    let gateway = config.build_gateway();
    match config.gateway_kind() {
        GatewayKind::Stripe => tracing::info!("✓ Stripe configured"),
        GatewayKind::InMemory => {
            tracing::warn!("⚠ MOCK_PAYMENTS enabled - intents are kept in memory and auto-confirm");
        }
        GatewayKind::Disabled => {
            tracing::warn!("⚠ Stripe not configured - payments disabled");
            tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
        }
    }

    let payout = MockCryptoPayout::new(config.wallet_address.clone());
    tracing::info!(wallet = %payout.wallet_address(), "Crypto payouts are simulated");

    let state = AppState::new(gateway, payout);
    tracing::info!("Catalog loaded with {} services", state.catalog.len());

    let app = create_router(state, &config);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🎬 cutline server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                    - Health check");
    tracing::info!("  GET  /api/payment/pricing       - Service pricing");
    tracing::info!("  POST /api/payment/create-intent - Create payment intent");
    tracing::info!("  POST /api/payment/confirm       - Confirm payment + crypto payout");
    tracing::info!("  GET  /*                         - Frontend from {}", config.static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}

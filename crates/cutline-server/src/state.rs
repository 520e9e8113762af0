//! Application State

use std::sync::Arc;

use cutline_core::Catalog;
use cutline_payments::{MockCryptoPayout, PaymentGateway};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Services offered on the site
    pub catalog: Arc<Catalog>,

    /// Payment gateway (optional - None if not configured)
    pub gateway: Option<Arc<dyn PaymentGateway>>,

    /// Payout stub run after a confirmed payment
    pub payout: Arc<MockCryptoPayout>,
}

impl AppState {
    pub fn new(gateway: Option<Arc<dyn PaymentGateway>>, payout: MockCryptoPayout) -> Self {
        Self {
            catalog: Arc::new(Catalog::standard()),
            gateway,
            payout: Arc::new(payout),
        }
    }
}

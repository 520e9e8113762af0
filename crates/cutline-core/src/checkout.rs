//! Mock checkout
//!
//! The browser never charges a card. On submit it waits
//! [`PROCESSING_DELAY`], then builds a confirmation locally with
//! [`simulate_confirmation`].

use std::time::Duration;

use crate::catalog::Catalog;
use crate::error::{CoreError, Result};
use crate::money::{cents_to_dollars, DEFAULT_CURRENCY};
use crate::payout::CryptoPayout;
use crate::wire::{ConfirmResponse, PaymentSummary};

/// Simulated processing time after the visitor hits "Pay Now"
pub const PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// How long the success panel stays up before the modal closes
pub const SUCCESS_DISMISS_DELAY: Duration = Duration::from_secs(5);

pub const MOCK_ORDER_PREFIX: &str = "pi_mock_";

/// Card fields as typed into the modal
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardForm {
    pub number: String,
    pub expiry: String,
    pub cvc: String,
    pub name: String,
}

impl CardForm {
    /// All four fields must be filled in
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("card number", &self.number),
            ("expiry", &self.expiry),
            ("cvc", &self.cvc),
            ("cardholder name", &self.name),
        ];
        match fields.iter().find(|(_, value)| value.is_empty()) {
            Some(&(label, _)) => Err(CoreError::MissingCardField(label)),
            None => Ok(()),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One open/close cycle of the checkout modal.
///
/// Timers capture the ticket when the visitor submits and only act while it
/// is still current. Every reset issues the next ticket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckoutTicket(u64);

impl CheckoutTicket {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Build the confirmation the browser shows after a mock payment
pub fn simulate_confirmation(
    catalog: &Catalog,
    service_key: &str,
    timestamp_millis: i64,
) -> Result<ConfirmResponse> {
    let offering = catalog.require(service_key)?;
    let amount = cents_to_dollars(offering.price);

    Ok(ConfirmResponse {
        success: true,
        payment: PaymentSummary {
            id: format!("{MOCK_ORDER_PREFIX}{timestamp_millis}"),
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            status: "succeeded".to_string(),
            service: Some(service_key.to_string()),
        },
        crypto_payout: CryptoPayout::mock(amount, DEFAULT_CURRENCY, timestamp_millis),
    })
}

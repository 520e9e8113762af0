//! Crypto payout math
//!
//! The payout is a mock: a fixed fiat-to-BTC rate and a timestamp-derived
//! transaction ID. Nothing here touches a wallet.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Fixed conversion rate, BTC per unit of fiat
pub const BTC_PER_FIAT_UNIT: Decimal = dec!(0.000025);

/// Ticker of the payout currency
pub const PAYOUT_CURRENCY: &str = "BTC";

/// Decimal places in the quoted crypto amount
pub const CRYPTO_DECIMALS: u32 = 8;

/// Convert a fiat amount to the quoted BTC amount, e.g. `25` -> `"0.00062500"`
pub fn crypto_amount(fiat_amount: Decimal) -> String {
    let converted = (fiat_amount * BTC_PER_FIAT_UNIT)
        .round_dp_with_strategy(CRYPTO_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    format!("{converted:.8}")
}

/// Transaction ID for a payout made at `timestamp_millis`
pub fn transaction_id(timestamp_millis: i64) -> String {
    format!("crypto_{timestamp_millis}")
}

/// Record of a (mock) crypto payout
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoPayout {
    pub success: bool,
    pub transaction_id: String,

    /// Fiat amount in major units (dollars)
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    pub currency: String,
    pub crypto_amount: String,
    pub crypto_currency: String,
}

impl CryptoPayout {
    /// Fabricate a payout record for `amount` at the given instant
    pub fn mock(amount: Decimal, currency: impl Into<String>, timestamp_millis: i64) -> Self {
        Self {
            success: true,
            transaction_id: transaction_id(timestamp_millis),
            amount,
            currency: currency.into(),
            crypto_amount: crypto_amount(amount),
            crypto_currency: PAYOUT_CURRENCY.to_string(),
        }
    }
}

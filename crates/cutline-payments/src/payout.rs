//! Mock crypto payout
//!
//! Stands in for converting a settled payment to BTC and sending it to the
//! owner's wallet. Nothing is transferred: the record is fabricated from the
//! current time and the fixed rate in [`cutline_core::payout`].

use chrono::Utc;
use rust_decimal::Decimal;

use cutline_core::CryptoPayout;

const UNSET_WALLET: &str = "unset";

/// Fabricates payout records for a configured wallet
#[derive(Clone, Debug)]
pub struct MockCryptoPayout {
    wallet_address: String,
}

impl Default for MockCryptoPayout {
    fn default() -> Self {
        Self::new(UNSET_WALLET)
    }
}

impl MockCryptoPayout {
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
        }
    }

    pub fn wallet_address(&self) -> &str {
        &self.wallet_address
    }

    /// "Send" `amount` (major units of `currency`) to the wallet
    pub async fn process(&self, amount: Decimal, currency: &str) -> CryptoPayout {
        tracing::info!(%amount, currency, "Processing crypto payout");
        tracing::info!(wallet = %self.wallet_address, "Sending to wallet");

        let payout = CryptoPayout::mock(amount, currency, Utc::now().timestamp_millis());

        tracing::info!(
            transaction_id = %payout.transaction_id,
            crypto_amount = %payout.crypto_amount,
            crypto_currency = %payout.crypto_currency,
            "Crypto payout recorded"
        );

        payout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_process_payout() {
        let payout = MockCryptoPayout::new("bc1qexample").process(dec!(150), "usd").await;

        assert!(payout.success);
        assert!(payout.transaction_id.starts_with("crypto_"));
        assert_eq!(payout.amount, dec!(150));
        assert_eq!(payout.currency, "usd");
        assert_eq!(payout.crypto_amount, "0.00375000");
        assert_eq!(payout.crypto_currency, "BTC");
    }

    #[test]
    fn test_default_wallet() {
        assert_eq!(MockCryptoPayout::default().wallet_address(), "unset");
    }
}

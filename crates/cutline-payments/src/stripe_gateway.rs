//! Stripe PaymentIntents integration
//!
//! Card details are collected in the browser; the server only creates the
//! intent and later reads back its status.

use async_trait::async_trait;
use stripe::{Client, CreatePaymentIntent, Currency, PaymentIntent, PaymentIntentId};

use crate::error::{PaymentError, Result};
use crate::gateway::{IntentStatus, NewIntent, PaymentGateway, PaymentIntentRecord};

/// Stripe client wrapper
pub struct StripeGateway {
    client: Client,
}

impl StripeGateway {
    /// Create a new Stripe gateway
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(&self, intent: NewIntent) -> Result<PaymentIntentRecord> {
        let currency: Currency = intent
            .currency
            .to_lowercase()
            .parse()
            .map_err(|_| PaymentError::InvalidCurrency(intent.currency.clone()))?;

        let mut params = CreatePaymentIntent::new(intent.amount, currency);
        params.metadata = Some(intent.metadata());

        let created = PaymentIntent::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        tracing::debug!(intent_id = %created.id, amount = created.amount, "Created Stripe payment intent");

        Ok(to_record(created))
    }

    async fn retrieve_intent(&self, id: &str) -> Result<PaymentIntentRecord> {
        let intent_id: PaymentIntentId = id
            .parse()
            .map_err(|_| PaymentError::InvalidIntentId(id.to_string()))?;

        let intent = PaymentIntent::retrieve(&self.client, &intent_id, &[])
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        Ok(to_record(intent))
    }

    fn name(&self) -> &str {
        "stripe"
    }
}

fn to_record(intent: PaymentIntent) -> PaymentIntentRecord {
    PaymentIntentRecord {
        id: intent.id.to_string(),
        amount: intent.amount,
        currency: intent.currency.to_string(),
        status: IntentStatus::parse(intent.status.as_str()),
        client_secret: intent.client_secret,
        metadata: intent.metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_malformed_intent_id() {
        let gateway = StripeGateway::new("sk_test_placeholder");
        let err = gateway.retrieve_intent("not-an-intent").await.unwrap_err();
        assert!(matches!(err, PaymentError::InvalidIntentId(_)));
    }

    #[tokio::test]
    async fn test_rejects_unknown_currency() {
        let gateway = StripeGateway::new("sk_test_placeholder");
        let err = gateway
            .create_intent(NewIntent::new(2500).currency("doubloons"))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::InvalidCurrency(_)));
    }
}

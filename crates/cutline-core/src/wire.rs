//! JSON bodies exchanged between the browser and the payment API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payout::CryptoPayout;

/// `POST /api/payment/create-intent` body
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentRequest {
    /// Amount in cents. Read as a decimal so `49.5` reaches validation
    #[serde(default)]
    pub amount: Option<Decimal>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub service: Option<String>,

    #[serde(default)]
    pub customer_email: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub service: Option<String>,
}

/// `POST /api/payment/confirm` body
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    #[serde(default)]
    pub payment_intent_id: Option<String>,
}

impl ConfirmRequest {
    /// The intent ID, treating an empty string as absent
    pub fn intent_id(&self) -> Option<&str> {
        self.payment_intent_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}

/// Payment half of a confirmation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub id: String,

    /// Amount in major units (dollars)
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    pub currency: String,
    pub status: String,
    pub service: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmResponse {
    pub success: bool,
    pub payment: PaymentSummary,
    pub crypto_payout: CryptoPayout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_intent_request_fractional_amount() {
        let req: CreateIntentRequest = serde_json::from_str(r#"{"amount": 49.5}"#).unwrap();
        assert_eq!(req.amount, Some(dec!(49.5)));
    }

    #[test]
    fn test_create_intent_request_optional_fields() {
        let req: CreateIntentRequest = serde_json::from_str(r#"{"amount": 2500}"#).unwrap();
        assert_eq!(req.amount, Some(dec!(2500)));
        assert!(req.currency.is_none());
        assert!(req.customer_email.is_none());

        let req: CreateIntentRequest = serde_json::from_str(
            r#"{"amount": 7500, "currency": "eur", "service": "advanced-edit", "customerEmail": "a@b.co"}"#,
        )
        .unwrap();
        assert_eq!(req.customer_email.as_deref(), Some("a@b.co"));
        assert_eq!(req.service.as_deref(), Some("advanced-edit"));
    }

    #[test]
    fn test_confirm_request_blank_id() {
        let req: ConfirmRequest = serde_json::from_str(r#"{"paymentIntentId": ""}"#).unwrap();
        assert_eq!(req.intent_id(), None);

        let req: ConfirmRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.intent_id(), None);

        let req: ConfirmRequest = serde_json::from_str(r#"{"paymentIntentId": "pi_123"}"#).unwrap();
        assert_eq!(req.intent_id(), Some("pi_123"));
    }
}

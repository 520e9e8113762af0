//! Payment Gateway
//!
//! Provider-neutral view of payment intents. Implement [`PaymentGateway`]
//! for each provider; the server only talks to the trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use cutline_core::money::DEFAULT_CURRENCY;

use crate::error::Result;

/// Metadata tag used when the caller names no service
pub const DEFAULT_SERVICE_TAG: &str = "video-editing";

/// Metadata value used when the caller gives no email
pub const UNKNOWN_CUSTOMER: &str = "unknown";

/// Lifecycle status of a payment intent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
    /// Status string this crate does not know about
    #[serde(untagged)]
    Other(String),
}

impl IntentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            IntentStatus::RequiresPaymentMethod => "requires_payment_method",
            IntentStatus::RequiresConfirmation => "requires_confirmation",
            IntentStatus::RequiresAction => "requires_action",
            IntentStatus::Processing => "processing",
            IntentStatus::RequiresCapture => "requires_capture",
            IntentStatus::Canceled => "canceled",
            IntentStatus::Succeeded => "succeeded",
            IntentStatus::Other(status) => status,
        }
    }

    /// Parse a provider status string
    pub fn parse(status: &str) -> Self {
        match status {
            "requires_payment_method" => IntentStatus::RequiresPaymentMethod,
            "requires_confirmation" => IntentStatus::RequiresConfirmation,
            "requires_action" => IntentStatus::RequiresAction,
            "processing" => IntentStatus::Processing,
            "requires_capture" => IntentStatus::RequiresCapture,
            "canceled" => IntentStatus::Canceled,
            "succeeded" => IntentStatus::Succeeded,
            other => IntentStatus::Other(other.to_string()),
        }
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, IntentStatus::Succeeded)
    }
}

impl fmt::Display for IntentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to create a payment intent
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewIntent {
    /// Amount in cents
    pub amount: i64,

    /// Lowercase ISO currency code
    pub currency: String,

    /// Catalog key of the purchased service
    #[serde(default)]
    pub service: Option<String>,

    #[serde(default)]
    pub customer_email: Option<String>,
}

impl NewIntent {
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            service: None,
            customer_email: None,
        }
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn service(mut self, service: Option<String>) -> Self {
        self.service = service;
        self
    }

    pub fn customer_email(mut self, email: Option<String>) -> Self {
        self.customer_email = email;
        self
    }

    /// Metadata attached to the intent at the provider
    pub fn metadata(&self) -> HashMap<String, String> {
        let mut metadata = HashMap::new();
        metadata.insert(
            "service".to_string(),
            self.service
                .clone()
                .unwrap_or_else(|| DEFAULT_SERVICE_TAG.to_string()),
        );
        metadata.insert(
            "customerEmail".to_string(),
            self.customer_email
                .clone()
                .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
        );
        metadata
    }
}

/// A payment intent as seen by the server
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentIntentRecord {
    pub id: String,

    /// Amount in cents
    pub amount: i64,

    pub currency: String,
    pub status: IntentStatus,

    /// Secret the browser needs to confirm the intent
    pub client_secret: Option<String>,

    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl PaymentIntentRecord {
    /// Service tag recorded at creation
    pub fn service(&self) -> Option<&str> {
        self.metadata.get("service").map(String::as_str)
    }
}

/// Payment provider abstraction (Strategy pattern)
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an intent for the given amount
    async fn create_intent(&self, intent: NewIntent) -> Result<PaymentIntentRecord>;

    /// Fetch the current state of an intent
    async fn retrieve_intent(&self, id: &str) -> Result<PaymentIntentRecord>;

    /// Gateway name, for logs
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_defaults() {
        let metadata = NewIntent::new(2500).metadata();
        assert_eq!(metadata["service"], "video-editing");
        assert_eq!(metadata["customerEmail"], "unknown");
    }

    #[test]
    fn test_metadata_from_request() {
        let metadata = NewIntent::new(2500)
            .service(Some("basic-edit".into()))
            .customer_email(Some("client@example.com".into()))
            .metadata();
        assert_eq!(metadata["service"], "basic-edit");
        assert_eq!(metadata["customerEmail"], "client@example.com");
    }

    #[test]
    fn test_status_round_trip() {
        for status in ["succeeded", "processing", "requires_payment_method", "canceled"] {
            assert_eq!(IntentStatus::parse(status).as_str(), status);
        }
        assert_eq!(
            IntentStatus::parse("on_hold"),
            IntentStatus::Other("on_hold".into())
        );
        assert!(IntentStatus::parse("succeeded").is_succeeded());
        assert!(!IntentStatus::parse("processing").is_succeeded());
    }
}

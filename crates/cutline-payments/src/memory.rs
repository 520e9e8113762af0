//! In-memory payment gateway
//!
//! Keeps intents in a map instead of calling a provider. Used for local
//! development (`MOCK_PAYMENTS=true`) and by the server's integration tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{PaymentError, Result};
use crate::gateway::{IntentStatus, NewIntent, PaymentGateway, PaymentIntentRecord};

/// How a fresh intent starts out, and whether calls fail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// New intents wait for a payment method, like a real provider
    Pending,
    /// New intents are immediately `succeeded`
    AutoConfirm,
    /// Every call fails as if the provider were down
    Down,
}

/// In-memory gateway (for development and tests)
pub struct InMemoryGateway {
    intents: RwLock<HashMap<String, PaymentIntentRecord>>,
    mode: Mode,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::with_mode(Mode::Pending)
    }

    /// Intents succeed as soon as they are created
    pub fn auto_confirming() -> Self {
        Self::with_mode(Mode::AutoConfirm)
    }

    /// Every call returns [`PaymentError::Unavailable`]
    pub fn unavailable() -> Self {
        Self::with_mode(Mode::Down)
    }

    fn with_mode(mode: Mode) -> Self {
        Self {
            intents: RwLock::new(HashMap::new()),
            mode,
        }
    }

    /// Move an intent to a new status, as a provider would after card confirmation
    pub fn set_status(&self, id: &str, status: IntentStatus) -> Result<()> {
        let mut intents = self.write()?;
        let intent = intents
            .get_mut(id)
            .ok_or_else(|| PaymentError::IntentNotFound(id.to_string()))?;
        intent.status = status;
        Ok(())
    }

    /// Store an intent as-is
    pub fn insert(&self, intent: PaymentIntentRecord) -> Result<()> {
        self.write()?.insert(intent.id.clone(), intent);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.intents.read().map(|intents| intents.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, PaymentIntentRecord>>> {
        self.intents
            .write()
            .map_err(|_| PaymentError::Storage("intent map lock poisoned".into()))
    }

    fn check_available(&self) -> Result<()> {
        if self.mode == Mode::Down {
            return Err(PaymentError::Unavailable("in-memory gateway is down".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentGateway for InMemoryGateway {
    async fn create_intent(&self, intent: NewIntent) -> Result<PaymentIntentRecord> {
        self.check_available()?;

        let id = format!("pi_{}", uuid::Uuid::new_v4().simple());
        let secret = uuid::Uuid::new_v4().simple().to_string();
        let status = match self.mode {
            Mode::AutoConfirm => IntentStatus::Succeeded,
            _ => IntentStatus::RequiresPaymentMethod,
        };

        let record = PaymentIntentRecord {
            client_secret: Some(format!("{id}_secret_{}", &secret[..24])),
            id,
            amount: intent.amount,
            currency: intent.currency.to_lowercase(),
            status,
            metadata: intent.metadata(),
        };

        self.insert(record.clone())?;
        Ok(record)
    }

    async fn retrieve_intent(&self, id: &str) -> Result<PaymentIntentRecord> {
        self.check_available()?;

        let intents = self
            .intents
            .read()
            .map_err(|_| PaymentError::Storage("intent map lock poisoned".into()))?;
        intents
            .get(id)
            .cloned()
            .ok_or_else(|| PaymentError::IntentNotFound(id.to_string()))
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_retrieve() {
        let gateway = InMemoryGateway::new();
        let created = gateway
            .create_intent(NewIntent::new(2500).service(Some("basic-edit".into())))
            .await
            .unwrap();

        assert!(created.id.starts_with("pi_"));
        assert!(created.client_secret.as_ref().unwrap().starts_with(&created.id));
        assert_eq!(created.status, IntentStatus::RequiresPaymentMethod);

        let fetched = gateway.retrieve_intent(&created.id).await.unwrap();
        assert_eq!(fetched.amount, 2500);
        assert_eq!(fetched.service(), Some("basic-edit"));
        assert_eq!(gateway.len(), 1);
    }

    #[tokio::test]
    async fn test_set_status() {
        let gateway = InMemoryGateway::new();
        let created = gateway.create_intent(NewIntent::new(5000)).await.unwrap();

        gateway.set_status(&created.id, IntentStatus::Succeeded).unwrap();
        let fetched = gateway.retrieve_intent(&created.id).await.unwrap();
        assert!(fetched.status.is_succeeded());

        assert!(gateway.set_status("pi_missing", IntentStatus::Canceled).is_err());
    }

    #[tokio::test]
    async fn test_auto_confirming() {
        let gateway = InMemoryGateway::auto_confirming();
        let created = gateway.create_intent(NewIntent::new(7500)).await.unwrap();
        assert!(created.status.is_succeeded());
    }

    #[tokio::test]
    async fn test_unavailable() {
        let gateway = InMemoryGateway::unavailable();
        let err = gateway.create_intent(NewIntent::new(7500)).await.unwrap_err();
        assert!(err.is_retryable());
        assert!(gateway.retrieve_intent("pi_x").await.is_err());
        assert!(gateway.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_intent() {
        let gateway = InMemoryGateway::new();
        let err = gateway.retrieve_intent("pi_nope").await.unwrap_err();
        assert!(matches!(err, PaymentError::IntentNotFound(_)));
    }
}

//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Intent ID is not well formed
    #[error("Invalid payment intent ID: {0}")]
    InvalidIntentId(String),

    /// Currency code not recognised
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// No intent with this ID
    #[error("Payment intent not found: {0}")]
    IntentNotFound(String),

    /// Gateway refused to serve the request
    #[error("Gateway unavailable: {0}")]
    Unavailable(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PaymentError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentError::Stripe(_) | PaymentError::Unavailable(_) | PaymentError::Storage(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(PaymentError::Stripe("timeout".into()).is_retryable());
        assert!(PaymentError::Unavailable("down".into()).is_retryable());
        assert!(!PaymentError::InvalidIntentId("nope".into()).is_retryable());
        assert!(!PaymentError::IntentNotFound("pi_x".into()).is_retryable());
    }
}

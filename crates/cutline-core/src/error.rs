//! Error Types for the shared domain

use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Amount too small: {cents} cents (minimum {minimum})")]
    AmountTooSmall { cents: Decimal, minimum: i64 },

    #[error("Amount is not a whole number of cents: {0}")]
    InvalidAmount(Decimal),

    #[error("Missing card field: {0}")]
    MissingCardField(&'static str),
}

impl CoreError {
    /// Message shown to the visitor
    pub fn user_message(&self) -> &str {
        match self {
            CoreError::UnknownService(_) => "Please select a service to continue.",
            CoreError::AmountTooSmall { .. } => "Minimum amount is $0.50",
            CoreError::InvalidAmount(_) => "Amount must be a whole number of cents",
            CoreError::MissingCardField(_) => "Please fill in all card details.",
        }
    }
}

//! Money helpers
//!
//! Prices travel as integer cents; display and payout math use `Decimal`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{CoreError, Result};

/// Smallest charge the payment provider accepts, in cents
pub const MINIMUM_CHARGE_CENTS: i64 = 50;

/// Default charge currency
pub const DEFAULT_CURRENCY: &str = "usd";

/// Convert integer cents to a dollar amount
pub fn cents_to_dollars(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Format cents as `25.00`
pub fn format_cents(cents: i64) -> String {
    format!("{:.2}", cents_to_dollars(cents))
}

/// Validate a requested charge and return it as whole cents.
///
/// Anything below the provider minimum is too small, fractional or not.
pub fn ensure_chargeable(cents: Decimal) -> Result<i64> {
    if cents < Decimal::from(MINIMUM_CHARGE_CENTS) {
        return Err(CoreError::AmountTooSmall {
            cents,
            minimum: MINIMUM_CHARGE_CENTS,
        });
    }
    if !cents.fract().is_zero() {
        return Err(CoreError::InvalidAmount(cents));
    }
    cents.to_i64().ok_or(CoreError::InvalidAmount(cents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cents_to_dollars() {
        assert_eq!(cents_to_dollars(2500), dec!(25));
        assert_eq!(cents_to_dollars(7550), dec!(75.5));
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(2500), "25.00");
        assert_eq!(format_cents(15000), "150.00");
        assert_eq!(format_cents(5), "0.05");
    }

    #[test]
    fn test_minimum_charge() {
        assert!(ensure_chargeable(dec!(49)).is_err());
        assert!(ensure_chargeable(dec!(0)).is_err());
        assert!(ensure_chargeable(dec!(-2500)).is_err());
        assert_eq!(ensure_chargeable(dec!(50)).unwrap(), 50);
    }

    #[test]
    fn test_fractional_below_minimum_is_too_small() {
        let err = ensure_chargeable(dec!(49.5)).unwrap_err();
        assert!(matches!(err, CoreError::AmountTooSmall { .. }));
        assert_eq!(err.user_message(), "Minimum amount is $0.50");
    }

    #[test]
    fn test_fractional_cents_rejected() {
        let err = ensure_chargeable(dec!(2500.5)).unwrap_err();
        assert_eq!(err, CoreError::InvalidAmount(dec!(2500.5)));
        assert_eq!(ensure_chargeable(dec!(2500.0)).unwrap(), 2500);
    }

    #[test]
    fn test_amount_beyond_i64_rejected() {
        let huge = Decimal::from(i64::MAX) * dec!(10);
        assert_eq!(ensure_chargeable(huge), Err(CoreError::InvalidAmount(huge)));
    }
}

//! Shared helpers for money arithmetic.

use rust_decimal::Decimal;

/// Rounds a monetary value to two decimal places, half-up (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use bracket_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

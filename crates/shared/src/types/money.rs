//! Money rounding helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All monetary amounts are `rust_decimal::Decimal`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept on every persisted amount.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a monetary amount to two decimal places, half away from zero.
///
/// Scaled-rounding semantics: multiply by 100, round to the nearest integer
/// (ties away from zero), divide by 100. Applied to every derived amount so
/// rounding drift cannot accumulate across trades.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1.005), dec!(1.01))]
    #[case(dec!(1.004), dec!(1.00))]
    #[case(dec!(-1.005), dec!(-1.01))]
    #[case(dec!(2.675), dec!(2.68))]
    #[case(dec!(100), dec!(100))]
    #[case(dec!(0.125), dec!(0.13))]
    fn test_round2_half_away_from_zero(#[case] input: Decimal, #[case] expected: Decimal) {
        assert_eq!(round2(input), expected);
    }

    #[test]
    fn test_round2_is_idempotent() {
        let value = dec!(99.999);
        assert_eq!(round2(round2(value)), round2(value));
    }

    #[test]
    fn test_round2_preserves_two_decimal_values() {
        let value = dec!(1234.56);
        assert_eq!(round2(value), value);
    }
}

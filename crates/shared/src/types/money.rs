//! Money rounding and display formatting.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`. Formatting happens once, here,
//! so render layers only ever see display-ready strings and never re-derive
//! numbers.
//!
//! The product quotes valuations in whole US dollars; there is no
//! multi-currency support.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest whole currency unit.
///
/// Midpoints round away from zero, so `$12.50` becomes `$13`.
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as a whole-dollar currency string, e.g. `$1,234,567`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let digits = rounded.abs().normalize().to_string();
    let grouped = group_thousands(&digits);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a percentage value (already scaled to 0-100) with one decimal
/// place, e.g. `37.1%`. Trailing zeros are dropped, so `25.0` renders as
/// `25%`.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{rounded}%")
}

/// Inserts thousands separators into a bare digit string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let count = digits.len();

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_whole_units() {
        assert_eq!(round_currency(dec!(185500.4)), dec!(185500));
        assert_eq!(round_currency(dec!(185500.5)), dec!(185501));
        assert_eq!(round_currency(dec!(-10.5)), dec!(-11));
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(dec!(0)), "$0");
        assert_eq!(format_currency(dec!(999)), "$999");
        assert_eq!(format_currency(dec!(1000)), "$1,000");
        assert_eq!(format_currency(dec!(185500)), "$185,500");
        assert_eq!(format_currency(dec!(1234567)), "$1,234,567");
    }

    #[test]
    fn test_format_currency_rounds_before_grouping() {
        assert_eq!(format_currency(dec!(999.5)), "$1,000");
        assert_eq!(format_currency(dec!(1234567.49)), "$1,234,567");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-1234)), "-$1,234");
        // A fraction that rounds to zero loses its sign.
        assert_eq!(format_currency(dec!(-0.4)), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(37.1)), "37.1%");
        assert_eq!(format_percent(dec!(37.14)), "37.1%");
        assert_eq!(format_percent(dec!(37.15)), "37.2%");
        assert_eq!(format_percent(dec!(25.0)), "25%");
        assert_eq!(format_percent(dec!(0)), "0%");
    }
}

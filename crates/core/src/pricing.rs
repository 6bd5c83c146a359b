//! Display-currency conversion and formatting.
//!
//! Catalog prices are stored in a single base currency (USD). Everything
//! shown to customers is in INR, converted through one pure function so
//! rounding and grouping stay consistent across every page. The rate is a
//! parameter; callers take it from configuration rather than hard-coding
//! it at render sites.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a base-currency (USD) amount as an INR display string.
///
/// The amount is multiplied by `rate`, rounded half-up to two decimal
/// places, and comma-grouped. The fractional part is shown only when it
/// is nonzero: `"₹4,500"`, `"₹1,078.17"`.
#[must_use]
pub fn format_inr(amount: Decimal, rate: Decimal) -> String {
    let converted =
        (amount * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let raw = if converted.fract().is_zero() {
        converted.trunc().to_string()
    } else {
        format!("{converted:.2}")
    };

    format!("\u{20b9}{}", group_thousands(&raw))
}

/// Insert thousands separators into the integer part of a decimal string.
fn group_thousands(raw: &str) -> String {
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rate() -> Decimal {
        Decimal::new(83, 0)
    }

    #[test]
    fn test_fractional_amount() {
        // 12.99 USD * 83 = 1078.17 INR
        let price = Decimal::new(1299, 2);
        assert_eq!(format_inr(price, rate()), "\u{20b9}1,078.17");
    }

    #[test]
    fn test_whole_amount_drops_fraction() {
        // 50 USD * 83 = 4150 INR exactly
        let price = Decimal::new(50, 0);
        assert_eq!(format_inr(price, rate()), "\u{20b9}4,150");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_inr(Decimal::ZERO, rate()), "\u{20b9}0");
    }

    #[test]
    fn test_small_amount_no_grouping() {
        // 0.59 USD * 83 = 48.97 INR
        let price = Decimal::new(59, 2);
        assert_eq!(format_inr(price, rate()), "\u{20b9}48.97");
    }

    #[test]
    fn test_large_amount_grouping() {
        // 15000 USD * 83 = 1,245,000 INR
        let price = Decimal::new(15_000, 0);
        assert_eq!(format_inr(price, rate()), "\u{20b9}1,245,000");
    }

    #[test]
    fn test_rounding_half_up() {
        // 0.125 * 1 = 0.125 -> 0.13 with half-up rounding
        let amount = Decimal::new(125, 3);
        assert_eq!(format_inr(amount, Decimal::ONE), "\u{20b9}0.13");
    }

    #[test]
    fn test_two_decimal_places_padded() {
        // 1.1 * 1 = 1.1 -> shown as 1.10
        let amount = Decimal::new(11, 1);
        assert_eq!(format_inr(amount, Decimal::ONE), "\u{20b9}1.10");
    }
}

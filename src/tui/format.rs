//! Number and text formatting for quote cells.

use ratatui::style::Color;
use rust_decimal::{Decimal, RoundingStrategy};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::Currency;

/// Fraction digits kept by [`format_grouped`].
const GROUPED_MAX_FRACTION_DIGITS: u32 = 3;

/// Formats `value` with comma thousands separators and at most three
/// fraction digits, dropping trailing zeros (`1234567.891` → `1,234,567.891`,
/// `42150.50` → `42,150.5`).
pub fn format_grouped(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(
            GROUPED_MAX_FRACTION_DIGITS,
            RoundingStrategy::MidpointAwayFromZero,
        )
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a price or market cap with the currency symbol in front.
pub fn format_money(value: Decimal, currency: Currency) -> String {
    format!("{}{}", currency.symbol(), format_grouped(value))
}

/// Formats a 24h change with exactly two decimals and a `+` on positive
/// values. The sign of the raw value is kept when it rounds to zero, so
/// `-0.001` prints as `-0.00` and exact zero as `0.00`.
pub fn format_change(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    let sign = if value > Decimal::ZERO {
        "+"
    } else if value < Decimal::ZERO {
        "-"
    } else {
        ""
    };
    format!("{sign}{rounded:.2}")
}

/// Green for strictly positive changes, red otherwise.
pub fn change_color(value: Decimal) -> Color {
    if value > Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    }
}

/// Cuts `text` to at most `max_width` terminal columns, ending with `…`
/// when anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(dec!(0)), "0");
        assert_eq!(format_grouped(dec!(999)), "999");
        assert_eq!(format_grouped(dec!(1000)), "1,000");
        assert_eq!(format_grouped(dec!(1234567890)), "1,234,567,890");
        assert_eq!(format_grouped(dec!(42150.50)), "42,150.5");
        assert_eq!(format_grouped(dec!(-12345.6)), "-12,345.6");
    }

    #[test]
    fn keeps_at_most_three_fraction_digits() {
        assert_eq!(format_grouped(dec!(1.23456)), "1.235");
        assert_eq!(format_grouped(dec!(0.0004)), "0");
        assert_eq!(format_grouped(dec!(0.0005)), "0.001");
        assert_eq!(format_grouped(dec!(2.100)), "2.1");
    }

    #[test]
    fn money_uses_currency_symbol() {
        assert_eq!(format_money(dec!(67000.12), Currency::Usd), "$67,000.12");
        assert_eq!(format_money(dec!(5600000), Currency::Inr), "₹5,600,000");
    }

    #[test]
    fn change_has_two_decimals_and_sign() {
        assert_eq!(format_change(dec!(652.3)), "+652.30");
        assert_eq!(format_change(dec!(-15.456)), "-15.46");
        assert_eq!(format_change(dec!(0)), "0.00");
        assert_eq!(format_change(dec!(-0.001)), "-0.00");
        assert_eq!(format_change(dec!(0.001)), "+0.00");
        assert_eq!(format_change(dec!(7)), "+7.00");
    }

    #[test]
    fn only_strictly_positive_change_is_green() {
        assert_eq!(change_color(dec!(0.01)), Color::Green);
        assert_eq!(change_color(dec!(0)), Color::Red);
        assert_eq!(change_color(dec!(-3)), Color::Red);
    }

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("Bitcoin", 10), "Bitcoin");
        assert_eq!(truncate_to_width("Wrapped Bitcoin", 8), "Wrapped…");
        assert_eq!(truncate_to_width("Bitcoin", 0), "");
    }
}

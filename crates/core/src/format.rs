//! Axis and currency label formatting.

use rust_decimal::Decimal;

use crate::budget::round_amount;

const THOUSAND: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);
const MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Prefix of every currency label: euro sign and a no-break space.
pub const EURO_PREFIX: &str = "€\u{a0}";

/// Rounds for display, folding negative zero into zero.
fn display_round(value: Decimal, precision: u32) -> Decimal {
    let rounded = round_amount(value, precision);
    if rounded.is_zero() { Decimal::ZERO } else { rounded }
}

/// Formats a value as a short axis tick label.
///
/// - `0` is always `"0"`
/// - with `show_in_thousands`, thousands with one decimal: `"12.5k"`
/// - otherwise `"1.5M"` from a million, `"2k"` from a thousand, else the integer
#[must_use]
pub fn format_axis_value(value: Decimal, show_in_thousands: bool) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    if show_in_thousands {
        return format!("{:.1}k", display_round(value / THOUSAND, 1));
    }

    let magnitude = value.abs();
    if magnitude >= MILLION {
        format!("{:.1}M", display_round(value / MILLION, 1))
    } else if magnitude >= THOUSAND {
        format!("{:.0}k", display_round(value / THOUSAND, 0))
    } else {
        format!("{:.0}", display_round(value, 0))
    }
}

/// Formats an amount in euros using Dutch conventions.
///
/// Thousands are grouped with dots, the decimal separator is a comma and
/// exactly `precision` fractional digits are shown: `"€ -1.234,50"`.
#[must_use]
pub fn format_currency(value: Decimal, precision: u32) -> String {
    let rounded = display_round(value, precision);
    let digits = format!("{:.*}", precision as usize, rounded.abs());

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };

    let mut body = group_thousands(int_part, '.');
    if let Some(frac_part) = frac_part {
        body.push(',');
        body.push_str(frac_part);
    }

    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{EURO_PREFIX}{sign}{body}")
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

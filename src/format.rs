//! Display formatting and money parsing helpers.
//!
//! Money is handled as integer minor units (cents) everywhere past the form
//! boundary; `rust_decimal` does the one decimal conversion so no float ever
//! touches an amount.

use std::str::FromStr;

use chrono::{Local, TimeZone};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Render a unix timestamp as e.g. "Mar 05, 2026".
///
/// Uses the local time zone of the running process.
/// TODO: normalize to the user's time zone once sessions carry one.
pub fn format_timestamp(unix_seconds: i64) -> String {
    match Local.timestamp_opt(unix_seconds, 0).single() {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => String::new(),
    }
}

/// Render an amount in cents as "$X,XXX.XX".
///
/// Negative amounts carry the minus sign before the dollar sign:
/// -1050 renders as "-$10.50".
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(abs / 100), abs % 100)
}

/// Insert comma separators into a whole-dollar figure.
fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let chunk = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(chunk.to_string());
            break;
        }
        groups.push(format!("{chunk:03}"));
    }
    groups.reverse();
    groups.join(",")
}

/// Parse a user-supplied decimal amount string into integer cents.
///
/// Rounds half away from zero, so "19.99" is 1999 and "0.005" is 1.
/// Rejects negative, non-numeric, and overflowing values.
pub fn parse_amount_cents(input: &str) -> Result<i64, AmountParseError> {
    let amount = Decimal::from_str(input.trim()).map_err(|_| AmountParseError::NotANumber)?;
    if amount.is_sign_negative() {
        return Err(AmountParseError::Negative);
    }
    // checked: amounts near Decimal's ceiling would otherwise panic here
    let cents = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(AmountParseError::OutOfRange)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    cents.to_i64().ok_or(AmountParseError::OutOfRange)
}

/// Why an amount string could not be converted to cents.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
    #[error("amount is not a number")]
    NotANumber,

    #[error("amount must not be negative")]
    Negative,

    #[error("amount is out of range")]
    OutOfRange,
}

// src/domain/pricing.rs

use chrono::NaiveDate;

/// A priced date range, as shown in the live preview and frozen onto a
/// rental at creation. Quote and creation share these functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub days: i64,
    pub total: f64,
}

/// Inclusive day count: a rental starting and ending on the same calendar
/// day bills one day, and both endpoints count.
pub fn billable_days(start: NaiveDate, end: NaiveDate) -> i64 {
    ((end - start).num_days() + 1).max(1)
}

/// Round a money amount to 2 decimal places.
pub fn round_amount(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

pub fn quote_for(daily_rate: f64, start: NaiveDate, end: NaiveDate) -> Quote {
    let days = billable_days(start, end);
    Quote {
        days,
        total: round_amount(days as f64 * daily_rate),
    }
}

/// Parse a user-supplied daily rate. Unparsable or non-finite input coerces
/// to 0 rather than failing the operation.
pub fn parse_daily_rate(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse an ISO calendar date (`YYYY-MM-DD`) from a form field.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

//! Display formatting used by the page templates.

use chrono::{DateTime, NaiveDate};

/// Formats a price in whole dollars with thousands separators: `$119,500`.
pub fn format_price(price: f64) -> String {
    format!("${}", format_count(price))
}

/// Rounds to a whole number and groups thousands: `12,400`.
pub fn format_count(value: f64) -> String {
    let whole = value.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Formats `YYYY-MM-DD` or RFC 3339 input as `Month D, YYYY`.
///
/// Returns `None` when the input is neither.
pub fn format_date_label(input: &str) -> Option<String> {
    let input = input.trim();
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()))?;

    Some(date.format("%B %-d, %Y").to_string())
}

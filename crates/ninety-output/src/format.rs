//! Locale-fixed value formatting.
//!
//! The dashboard renders en-US style: grouped thousands, `$` prefix for
//! currency with no cents, and a fixed `N/A` placeholder for anything
//! unavailable. Formatting always receives already-coerced numbers; it
//! never re-interprets raw field text.

use ninety_model::date::parse_calendar_date;

/// Placeholder shown wherever a value is unavailable.
pub const NOT_AVAILABLE: &str = "N/A";

/// Insert thousands separators into a plain digit string.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a dollar amount: `$1,052,300`, `-$25,000`.
///
/// Rounds to whole dollars; cents are never shown.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let grouped = group_digits(&(rounded.abs() as u128).to_string());
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a plain number with at most two fraction digits: `1,234.57`, `50`.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), ""),
    };
    let frac = frac_part.trim_end_matches('0');
    let grouped = group_digits(int_part);

    let is_zero = frac.is_empty() && int_part.chars().all(|c| c == '0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Format a whole count: `1,250`.
pub fn format_count(value: f64) -> String {
    let rounded = value.round();
    let grouped = group_digits(&(rounded.abs() as u128).to_string());
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format an ISO-ish date string as `Jan 01, 2024`.
///
/// Missing or unparseable input renders the placeholder.
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_calendar_date)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |date| {
            date.format("%b %d, %Y").to_string()
        })
}

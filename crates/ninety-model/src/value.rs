//! Raw field values and numeric coercion.
//!
//! Financial fields arrive from the API in a heterogeneous shape: decimal
//! amounts encoded as JSON strings (to preserve precision in transport),
//! counts as JSON numbers, or `null` when the filer did not report that
//! line. [`RawValue`] captures the non-null cases and [`coerce`] collapses
//! everything into `Option<f64>`, the pipeline's single "available or not"
//! representation.

use serde::{Deserialize, Serialize};

/// A non-null field value as transported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A JSON number, e.g. an employee count.
    Number(f64),
    /// A decimal amount encoded as text, e.g. `"1052300.00"`.
    Text(String),
}

impl RawValue {
    /// Interpret this value as a float, if it holds one.
    ///
    /// Numbers pass through unless they are NaN. Text is parsed with
    /// [`parse_float_prefix`], so `"100 (approx)"` yields `100.0` while
    /// `"n/a"` yields `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_nan() => None,
            Self::Number(n) => Some(*n),
            Self::Text(s) => parse_float_prefix(s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Coerce an optional raw field into a definite number.
///
/// Absent fields, NaN numbers, and non-numeric text all map to `None`.
/// Malformed input is a normal "unavailable" result, never an error.
pub fn coerce(value: Option<&RawValue>) -> Option<f64> {
    value.and_then(RawValue::as_f64)
}

/// Parse the longest leading float out of a string.
///
/// Prefix-tolerant in the manner of `parseFloat`, which is how suppliers
/// produce these strings: leading whitespace is skipped, then an optional
/// sign, digits with an optional fraction, and an optional exponent are
/// consumed. Trailing garbage is ignored. Returns `None` when no digit
/// is consumed. Named constants such as `inf` are deliberately rejected;
/// they never occur in filing data.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
            seen_digit = true;
        }
        // A bare '.' with no digits on either side is not a number.
        if seen_digit {
            end = frac;
        }
    }

    if !seen_digit {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_digits = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        // Only keep the exponent if it actually has digits ("1e" -> 1).
        if exp > exp_digits {
            end = exp;
        }
    }

    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42.5", Some(42.5))]
    #[case("  -17", Some(-17.0))]
    #[case("+3.25", Some(3.25))]
    #[case(".5", Some(0.5))]
    #[case("5.", Some(5.0))]
    #[case("1e3", Some(1000.0))]
    #[case("2.5e-2", Some(0.025))]
    #[case("1e", Some(1.0))]
    #[case("100 (approx)", Some(100.0))]
    #[case("100abc", Some(100.0))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("   ", None)]
    #[case(".", None)]
    #[case("-", None)]
    #[case("e5", None)]
    #[case("inf", None)]
    fn test_parse_float_prefix(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_float_prefix(input), expected);
    }

    #[test]
    fn test_coerce_absent_is_unavailable() {
        assert_eq!(coerce(None), None);
    }

    #[test]
    fn test_coerce_nan_is_unavailable() {
        assert_eq!(coerce(Some(&RawValue::Number(f64::NAN))), None);
    }

    #[test]
    fn test_coerce_number_passes_through() {
        assert_eq!(coerce(Some(&RawValue::Number(12.0))), Some(12.0));
    }

    #[test]
    fn test_coerce_text() {
        assert_eq!(coerce(Some(&RawValue::from("42.5"))), Some(42.5));
        assert_eq!(coerce(Some(&RawValue::from("abc"))), None);
    }

    #[test]
    fn test_raw_value_untagged_deserialization() {
        let number: RawValue = serde_json::from_str("1250").unwrap();
        assert_eq!(number, RawValue::Number(1250.0));

        let text: RawValue = serde_json::from_str("\"1052300.00\"").unwrap();
        assert_eq!(text, RawValue::Text("1052300.00".to_string()));
    }
}

//! Numeric coercion and formatting shared by every model.
//!
//! String inputs are read by their leading numeric prefix, so `"100%"`
//! reads as `100` and `" 0.5"` as `0.5`. Rendering prints the shortest
//! decimal that survives rounding to 14 significant digits, which keeps
//! `0.07 * 100` printing as `7`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DomainError, RangeError};

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid regex")
});

static WHOLE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?\s*$").expect("valid regex")
});

/// Read the leading numeric prefix of `token`, ignoring any trailing
/// suffix. Leading whitespace is skipped.
///
/// Fails when the token does not start with a number at all.
pub fn leading_number(token: &str) -> Result<f64, DomainError> {
    LEADING_NUMBER
        .find(token.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| DomainError::NotNumeric(token.to_string()))
}

/// Leading numeric prefix truncated toward zero, for integer fields.
pub fn leading_integer(token: &str) -> Result<i64, DomainError> {
    leading_number(token).map(|value| value.trunc() as i64)
}

/// Whether the whole string is a number (surrounding whitespace allowed).
pub fn is_numeric(input: &str) -> bool {
    WHOLE_NUMBER.is_match(input)
}

/// Validate a 0-100 percentage and scale fractional input.
///
/// Values below 1 are read as 0-1 fractions and multiplied by 100, so
/// `0.5` becomes `50`. A genuine sub-1 percentage such as `0.99%` cannot
/// be expressed through this path.
pub fn normalize_percent(field: &'static str, value: f64) -> Result<f64, RangeError> {
    let value = RangeError::check(field, value, 0.0, 100.0)?;
    Ok(scale_fraction(value))
}

/// Scale a value below 1 from a 0-1 fraction to a percentage.
pub(crate) fn scale_fraction(value: f64) -> f64 {
    if value < 1.0 {
        value * 100.0
    } else {
        value
    }
}

/// Round half away from zero to `places` decimals.
///
/// The scaled value is first cut to 15 significant digits so that a
/// half-way decimal stored just below its exact value (`0.285 * 100` is
/// `28.499999999999996`) still rounds up.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    let scaled = format!("{scaled:.14e}").parse::<f64>().unwrap_or(scaled);
    scaled.round() / factor
}

/// Format a number the way the textual renderings expect: integral values
/// without a fractional part, everything else with at most 14 significant
/// digits.
pub fn format_number(value: f64) -> String {
    let rounded = format!("{value:.13e}").parse::<f64>().unwrap_or(value);
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{rounded}")
}

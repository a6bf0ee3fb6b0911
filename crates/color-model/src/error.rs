//! Error types for color construction, field access and parsing.
//!
//! [`RangeError`] covers values outside a model's domain, [`DomainError`]
//! covers everything that is not a numeric range problem (unknown field
//! keys, unset attempts, unclassifiable strings). [`ColorError`] wraps both
//! for `?` propagation.

use thiserror::Error;

/// A value was outside the valid domain of a color field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// Numeric field outside its inclusive bounds
    #[error("the value of {field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Hex string with a digit count other than 3 or 6 (or a component
    /// other than 1 or 2 digits)
    #[error("the hex string {value:?} was not the correct length")]
    HexLength { value: String },

    /// Hex string containing characters outside 0-9a-f
    #[error("the hex string {value:?} contains invalid digits")]
    HexDigits { value: String },
}

impl RangeError {
    pub(crate) fn check(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, Self> {
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(RangeError::OutOfRange {
                field,
                min,
                max,
                value,
            })
        }
    }
}

/// Field-access and parse failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("unknown field {key:?}, expected one of {expected}")]
    UnknownField { key: String, expected: &'static str },

    #[error("the {field} field of a color cannot be unset")]
    Unset { field: &'static str },

    #[error("the string {0:?} was not in the correct color format")]
    UnrecognizedFormat(String),

    #[error("unbalanced parentheses in {0:?}")]
    Malformed(String),

    #[error("{model} takes {expected} values, found {found}")]
    ValueCount {
        model: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("{0:?} is not a number")]
    NotNumeric(String),

    #[error("unknown render format {0:?}, expected COMMA, CSS or PERCENT")]
    UnknownFormat(String),

    #[error("unknown color model {0:?}")]
    UnknownModel(String),
}

/// Unified error type for the public API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("range error: {0}")]
    Range(#[from] RangeError),

    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

pub type ColorResult<T> = std::result::Result<T, ColorError>;

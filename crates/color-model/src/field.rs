//! Keyed field access over the closed field set of each color model.
//!
//! Every model exposes its fields through a small enum ([`RgbField`],
//! [`HslField`], ...) parsed from the key names `r`, `g`, `b`, `a`, `h`,
//! `s`, `l`, `hex`, `c`, `m`, `y`, `k` and `gray`. Reads and writes route
//! through the same validated setters as the typed API. Unknown keys fail
//! with [`DomainError::UnknownField`]; unsetting a field always fails.
//!
//! [`RgbField`]: crate::color::RgbField
//! [`HslField`]: crate::color::HslField

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorResult, DomainError};
use crate::numeric::{format_number, leading_integer, leading_number};

/// A field value read from or written to a color.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Real(f64),
    Text(String),
    /// An unset optional field (alpha)
    Absent,
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Numeric view; text is read by its leading numeric prefix.
    pub fn as_number(&self) -> Result<f64, DomainError> {
        match self {
            FieldValue::Int(v) => Ok(*v as f64),
            FieldValue::Real(v) => finite(*v),
            FieldValue::Text(s) => leading_number(s),
            FieldValue::Absent => Err(DomainError::NotNumeric(String::new())),
        }
    }

    /// Integer view, truncated toward zero.
    pub fn as_integer(&self) -> Result<i64, DomainError> {
        match self {
            FieldValue::Int(v) => Ok(*v),
            FieldValue::Real(v) => Ok(finite(*v)?.trunc() as i64),
            FieldValue::Text(s) => leading_integer(s),
            FieldValue::Absent => Err(DomainError::NotNumeric(String::new())),
        }
    }

    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

fn finite(value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NotNumeric(value.to_string()))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Real(v) => f.write_str(&format_number(*v)),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Absent => f.write_str("null"),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<u16> for FieldValue {
    fn from(v: u16) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Real(v)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(FieldValue::Absent, FieldValue::Real)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

/// A closed set of field keys.
pub trait FieldKey: Copy + FromStr<Err = DomainError> + fmt::Display + 'static {
    /// All keys in rendering order.
    fn all() -> &'static [Self];

    fn key(self) -> &'static str;
}

/// Keyed access to a color's fields.
pub trait Fields {
    type Field: FieldKey;

    fn get(&self, field: Self::Field) -> FieldValue;

    fn set(&mut self, field: Self::Field, value: FieldValue) -> ColorResult<()>;

    fn get_key(&self, key: &str) -> ColorResult<FieldValue> {
        let field = key.parse::<Self::Field>()?;
        Ok(self.get(field))
    }

    fn set_key(&mut self, key: &str, value: impl Into<FieldValue>) -> ColorResult<()>
    where
        Self: Sized,
    {
        let field = key.parse::<Self::Field>()?;
        self.set(field, value.into())
    }

    fn has_key(&self, key: &str) -> bool {
        key.parse::<Self::Field>().is_ok()
    }

    /// Fields cannot be removed, only overwritten.
    fn unset_key(&mut self, key: &str) -> ColorResult<()> {
        let field = key.parse::<Self::Field>()?;
        Err(DomainError::Unset { field: field.key() }.into())
    }

    /// Present fields in key order; unset optional fields are skipped.
    fn entries(&self) -> Vec<(Self::Field, FieldValue)> {
        <Self::Field as FieldKey>::all()
            .iter()
            .map(|&field| (field, self.get(field)))
            .filter(|(_, value)| !value.is_absent())
            .collect()
    }
}

/// Declare a field key enum with its key names.
macro_rules! field_keys {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $crate::field::FieldKey for $name {
            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    _ => Err($crate::error::DomainError::UnknownField {
                        key: s.to_string(),
                        expected: concat!($($key, ", "),+).trim_end_matches(", "),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::field::FieldKey::key(*self))
            }
        }
    };
}

pub(crate) use field_keys;

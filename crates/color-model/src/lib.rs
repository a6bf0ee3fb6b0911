//! color-model: RGB, HSL, Hex, CMYK and grayscale color values
//!
//! This library represents single colors in five models, converts between
//! them with fixed rounding rules, renders each to canonical text and
//! parses colors out of free-form strings.
//!
//! # Quick Start
//!
//! ```
//! use color_model::{parse, rgb, Format};
//!
//! let color = rgb(240, 180, 60, Some(0.5)).unwrap();
//! assert_eq!(color.render(Format::Css), "rgba(240, 180, 60, 0.5)");
//! assert_eq!(color.to_hsl().to_string(), "hsla(40, 75%, 94%, 0.5)");
//!
//! let parsed = parse("60 20 30 50").unwrap();
//! assert_eq!(parsed.render(Format::Comma), "60, 20, 30, 50");
//! ```
//!
//! # Field Access
//!
//! Every model implements [`Fields`], a keyed accessor over its closed field
//! set. Keyed writes go through the same validated setters as the typed API:
//!
//! ```
//! use color_model::{hsl, FieldValue, Fields};
//!
//! let mut color = hsl(240, 100, 50, None).unwrap();
//! color.set_key("s", "50%").unwrap();
//! assert_eq!(color.get_key("s").unwrap(), FieldValue::Int(50));
//! assert!(color.set_key("s", 101).is_err());
//! assert!(color.unset_key("s").is_err());
//! ```
//!
//! # Formats
//!
//! [`Format`] selects the textual form: the implicit plain form (space
//! separated), `COMMA`, `CSS` functional notation and `PERCENT`.
//!
//! # Thread Safety
//!
//! All values are plain data with no interior mutability. Conversions and
//! renders take `&self`; mutation through setters needs `&mut self`.

pub mod color;
pub mod error;
pub mod field;
pub mod format;
pub mod numeric;
pub mod parse;

#[cfg(test)]
mod domain_tests;

pub use color::{
    Cmyk, CmykField, Color, GrayField, Grayscale, Hex, HexField, Hsl, HslField, Model, Rgb,
    RgbField,
};
pub use error::{ColorError, ColorResult, DomainError, RangeError};
pub use field::{FieldKey, FieldValue, Fields};
pub use format::Format;
pub use parse::parse;

/// Create an RGB color.
pub fn rgb(r: i64, g: i64, b: i64, a: Option<f64>) -> Result<Rgb, RangeError> {
    Rgb::new(r, g, b, a)
}

/// Create an HSL color.
pub fn hsl(h: i64, s: i64, l: i64, a: Option<f64>) -> Result<Hsl, RangeError> {
    Hsl::new(h, s, l, a)
}

/// Create a hex color from a 3 or 6 digit string, `#` optional.
pub fn hex(hex: &str) -> Result<Hex, RangeError> {
    Hex::new(hex)
}

/// Create a CMYK color. Channels below 1 are read as fractions.
pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Result<Cmyk, RangeError> {
    Cmyk::new(c, m, y, k)
}

/// Create a grayscale color. Values below 1 are read as fractions.
pub fn grayscale(gray: f64) -> Result<Grayscale, RangeError> {
    Grayscale::new(gray)
}

//! Color models and the [`Color`] union returned by the parser.
//!
//! # Models
//!
//! - [`Rgb`]: 8-bit channels plus optional alpha; the conversion hub
//! - [`Hsl`]: hue degrees, saturation and lightness percent, optional alpha
//! - [`Hex`]: 3 or 6 hexadecimal digits
//! - [`Cmyk`]: four ink percentages
//! - [`Grayscale`]: one gray percentage
//!
//! Conversions are pure and produce fresh values:
//!
//! ```
//! use color_model::Rgb;
//!
//! let rgb = Rgb::new(240, 180, 60, None).unwrap();
//! assert_eq!(rgb.to_hex().hex(), "f0b43c");
//! assert_eq!(rgb.to_hsl().to_string(), "hsl(40, 75%, 94%)");
//! ```

mod cmyk;
mod gray;
mod hex;
mod hsl;
mod rgb;

use std::fmt;
use std::str::FromStr;

pub use cmyk::{Cmyk, CmykField};
pub use gray::{GrayField, Grayscale};
pub use hex::{Hex, HexField};
pub use hsl::{Hsl, HslField};
pub use rgb::{Rgb, RgbField};

use crate::error::{ColorResult, DomainError};
use crate::field::{FieldValue, Fields};
use crate::format::Format;

/// The five color models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Rgb,
    Hsl,
    Hex,
    Cmyk,
    Grayscale,
}

impl Model {
    pub const ALL: [Model; 5] = [
        Model::Rgb,
        Model::Hsl,
        Model::Hex,
        Model::Cmyk,
        Model::Grayscale,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Model::Rgb => "rgb",
            Model::Hsl => "hsl",
            Model::Hex => "hex",
            Model::Cmyk => "cmyk",
            Model::Grayscale => "grayscale",
        }
    }
}

impl FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(Model::Rgb),
            "hsl" => Ok(Model::Hsl),
            "hex" => Ok(Model::Hex),
            "cmyk" => Ok(Model::Cmyk),
            "gray" | "grayscale" => Ok(Model::Grayscale),
            _ => Err(DomainError::UnknownModel(s.to_string())),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color in any of the five models.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    Hsl(Hsl),
    Hex(Hex),
    Cmyk(Cmyk),
    Grayscale(Grayscale),
}

impl Color {
    pub fn model(&self) -> Model {
        match self {
            Color::Rgb(_) => Model::Rgb,
            Color::Hsl(_) => Model::Hsl,
            Color::Hex(_) => Model::Hex,
            Color::Cmyk(_) => Model::Cmyk,
            Color::Grayscale(_) => Model::Grayscale,
        }
    }

    pub fn render(&self, format: Format) -> String {
        match self {
            Color::Rgb(c) => c.render(format),
            Color::Hsl(c) => c.render(format),
            Color::Hex(c) => c.render(format),
            Color::Cmyk(c) => c.render(format),
            Color::Grayscale(c) => c.render(format),
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Color::Rgb(c) => c.clone(),
            Color::Hsl(c) => c.to_rgb(),
            Color::Hex(c) => c.to_rgb(),
            Color::Cmyk(c) => c.to_rgb(),
            Color::Grayscale(c) => c.to_rgb(),
        }
    }

    /// Convert into `target`, using the direct conversion where one exists
    /// and routing through RGB otherwise.
    pub fn convert(&self, target: Model) -> Color {
        match (target, self) {
            (Model::Rgb, _) => Color::Rgb(self.to_rgb()),
            (Model::Hsl, Color::Hsl(c)) => Color::Hsl(c.clone()),
            (Model::Hsl, Color::Hex(c)) => Color::Hsl(c.to_hsl()),
            (Model::Hsl, _) => Color::Hsl(self.to_rgb().to_hsl()),
            (Model::Hex, Color::Hex(c)) => Color::Hex(c.clone()),
            (Model::Hex, Color::Hsl(c)) => Color::Hex(c.to_hex()),
            (Model::Hex, _) => Color::Hex(self.to_rgb().to_hex()),
            (Model::Cmyk, Color::Cmyk(c)) => Color::Cmyk(c.clone()),
            (Model::Cmyk, Color::Grayscale(c)) => Color::Cmyk(c.to_cmyk()),
            (Model::Cmyk, _) => Color::Cmyk(self.to_rgb().to_cmyk()),
            (Model::Grayscale, Color::Grayscale(c)) => Color::Grayscale(c.clone()),
            (Model::Grayscale, Color::Cmyk(c)) => Color::Grayscale(c.to_gray()),
            (Model::Grayscale, _) => Color::Grayscale(self.to_rgb().to_gray()),
        }
    }

    /// Read a field by key name.
    pub fn get_key(&self, key: &str) -> ColorResult<FieldValue> {
        match self {
            Color::Rgb(c) => c.get_key(key),
            Color::Hsl(c) => c.get_key(key),
            Color::Hex(c) => c.get_key(key),
            Color::Cmyk(c) => c.get_key(key),
            Color::Grayscale(c) => c.get_key(key),
        }
    }

    /// Write a field by key name through the validated setter.
    pub fn set_key(&mut self, key: &str, value: impl Into<FieldValue>) -> ColorResult<()> {
        let value = value.into();
        match self {
            Color::Rgb(c) => c.set_key(key, value),
            Color::Hsl(c) => c.set_key(key, value),
            Color::Hex(c) => c.set_key(key, value),
            Color::Cmyk(c) => c.set_key(key, value),
            Color::Grayscale(c) => c.set_key(key, value),
        }
    }

    /// Present fields as `(key, value)` pairs in key order.
    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        fn keyed<F: Fields>(color: &F) -> Vec<(&'static str, FieldValue)> {
            use crate::field::FieldKey;
            color
                .entries()
                .into_iter()
                .map(|(field, value)| (field.key(), value))
                .collect()
        }

        match self {
            Color::Rgb(c) => keyed(c),
            Color::Hsl(c) => keyed(c),
            Color::Hex(c) => keyed(c),
            Color::Cmyk(c) => keyed(c),
            Color::Grayscale(c) => keyed(c),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(c) => fmt::Display::fmt(c, f),
            Color::Hsl(c) => fmt::Display::fmt(c, f),
            Color::Hex(c) => fmt::Display::fmt(c, f),
            Color::Cmyk(c) => fmt::Display::fmt(c, f),
            Color::Grayscale(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c)
    }
}

impl From<Hsl> for Color {
    fn from(c: Hsl) -> Self {
        Color::Hsl(c)
    }
}

impl From<Hex> for Color {
    fn from(c: Hex) -> Self {
        Color::Hex(c)
    }
}

impl From<Cmyk> for Color {
    fn from(c: Cmyk) -> Self {
        Color::Cmyk(c)
    }
}

impl From<Grayscale> for Color {
    fn from(c: Grayscale) -> Self {
        Color::Grayscale(c)
    }
}

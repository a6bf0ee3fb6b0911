//! Hex color type

use std::fmt;
use std::str::FromStr;

use super::{Hsl, Rgb};
use crate::error::{ColorError, ColorResult, RangeError};
use crate::field::{field_keys, FieldValue, Fields};
use crate::format::Format;

field_keys! {
    /// Field keys of [`Hex`].
    HexField { R => "r", G => "g", B => "b", Hex => "hex" }
}

/// An RGB color written as 3 or 6 hexadecimal digits.
///
/// Digits are stored lowercase. In the 3-digit form each component holds a
/// single digit that is doubled on conversion (`f` reads as `ff`).
#[derive(Debug, Clone, PartialEq)]
pub struct Hex {
    r: String,
    g: String,
    b: String,
    hex: String,
}

impl Hex {
    /// Parse a hex color with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::HexLength`] unless there are exactly 3 or 6
    /// digits, and [`RangeError::HexDigits`] for characters outside 0-9a-f.
    ///
    /// # Example
    /// ```
    /// use color_model::Hex;
    /// let hex = Hex::new("#FFF").unwrap();
    /// assert_eq!(hex.hex(), "fff");
    /// assert_eq!(hex.to_rgb().r(), 255);
    /// ```
    pub fn new(hex: &str) -> Result<Self, RangeError> {
        let mut color = Self {
            r: String::new(),
            g: String::new(),
            b: String::new(),
            hex: String::new(),
        };
        color.set_hex(hex)?;
        Ok(color)
    }

    pub(crate) fn from_channels(r: u8, g: u8, b: u8) -> Self {
        let (r, g, b) = (format!("{r:02x}"), format!("{g:02x}"), format!("{b:02x}"));
        let hex = format!("{r}{g}{b}");
        Self { r, g, b, hex }
    }

    /// The normalized digits without a leading `#`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn r(&self) -> &str {
        &self.r
    }

    pub fn g(&self) -> &str {
        &self.g
    }

    pub fn b(&self) -> &str {
        &self.b
    }

    /// Replace the whole color.
    pub fn set_hex(&mut self, hex: &str) -> Result<(), RangeError> {
        let lower = hex.to_lowercase();
        let digits = lower.strip_prefix('#').unwrap_or(&lower);

        if digits.len() != 3 && digits.len() != 6 {
            return Err(RangeError::HexLength {
                value: hex.to_string(),
            });
        }
        if !is_hex_digits(digits) {
            return Err(RangeError::HexDigits {
                value: hex.to_string(),
            });
        }

        let width = digits.len() / 3;
        self.r = digits[..width].to_string();
        self.g = digits[width..2 * width].to_string();
        self.b = digits[2 * width..].to_string();
        self.hex = digits.to_string();
        Ok(())
    }

    pub fn set_r(&mut self, r: &str) -> Result<(), RangeError> {
        self.r = component(r)?;
        self.rebuild();
        Ok(())
    }

    pub fn set_g(&mut self, g: &str) -> Result<(), RangeError> {
        self.g = component(g)?;
        self.rebuild();
        Ok(())
    }

    pub fn set_b(&mut self, b: &str) -> Result<(), RangeError> {
        self.b = component(b)?;
        self.rebuild();
        Ok(())
    }

    // Keep `hex` in step with the components. Mixed widths widen every
    // single digit component to two digits.
    fn rebuild(&mut self) {
        let same_width = self.r.len() == self.g.len() && self.g.len() == self.b.len();
        if !same_width {
            for part in [&mut self.r, &mut self.g, &mut self.b] {
                if part.len() == 1 {
                    *part = part.repeat(2);
                }
            }
        }
        self.hex = format!("{}{}{}", self.r, self.g, self.b);
    }

    /// Convert to RGB. Single digit components are doubled first.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_channels(
            f64::from(channel_value(&self.r)),
            f64::from(channel_value(&self.g)),
            f64::from(channel_value(&self.b)),
            None,
        )
    }

    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    /// Render the color.
    ///
    /// `COMMA` and `PERCENT` render the RGB equivalent; the plain and CSS
    /// forms are `#` followed by the digits.
    pub fn render(&self, format: Format) -> String {
        match format {
            Format::Comma | Format::Percent => self.to_rgb().render(format),
            Format::Css | Format::Plain => format!("#{}", self.hex),
        }
    }
}

impl FromStr for Hex {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hex::new(s)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Format::Css))
    }
}

impl Fields for Hex {
    type Field = HexField;

    fn get(&self, field: HexField) -> FieldValue {
        match field {
            HexField::R => self.r.as_str().into(),
            HexField::G => self.g.as_str().into(),
            HexField::B => self.b.as_str().into(),
            HexField::Hex => self.hex.as_str().into(),
        }
    }

    fn set(&mut self, field: HexField, value: FieldValue) -> ColorResult<()> {
        let text = value.as_text();
        match field {
            HexField::R => self.set_r(&text),
            HexField::G => self.set_g(&text),
            HexField::B => self.set_b(&text),
            HexField::Hex => self.set_hex(&text),
        }
        .map_err(ColorError::from)
    }
}

fn is_hex_digits(s: &str) -> bool {
    s.bytes().all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f'))
}

fn component(value: &str) -> Result<String, RangeError> {
    let lower = value.to_lowercase();
    if !is_hex_digits(&lower) {
        return Err(RangeError::HexDigits {
            value: value.to_string(),
        });
    }
    if lower.is_empty() || lower.len() > 2 {
        return Err(RangeError::HexLength {
            value: value.to_string(),
        });
    }
    Ok(lower)
}

fn channel_value(digits: &str) -> u8 {
    let expanded = if digits.len() == 1 {
        digits.repeat(2)
    } else {
        digits.to_string()
    };
    expanded
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0u32, |acc, d| acc * 16 + d)
        .min(255) as u8
}

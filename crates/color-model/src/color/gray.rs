//! Grayscale color type

use std::fmt;

use super::{Cmyk, Rgb};
use crate::error::{ColorResult, RangeError};
use crate::field::{field_keys, FieldValue, Fields};
use crate::format::Format;
use crate::numeric::{format_number, normalize_percent, round_to, scale_fraction};

field_keys! {
    /// Field keys of [`Grayscale`].
    GrayField { Gray => "gray" }
}

/// A single-channel gray level, 0..=100 percent.
///
/// Uses the same fractional-input scaling as [`Cmyk`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grayscale {
    gray: f64,
}

impl Grayscale {
    /// # Example
    /// ```
    /// use color_model::Grayscale;
    /// let gray = Grayscale::new(50.0).unwrap();
    /// assert_eq!(gray.to_cmyk().k(), 50.0);
    /// ```
    pub fn new(gray: f64) -> Result<Self, RangeError> {
        let mut color = Self::default();
        color.set_gray(gray)?;
        Ok(color)
    }

    pub(crate) fn from_percentage(gray: f64) -> Self {
        Self { gray }
    }

    pub fn gray(&self) -> f64 {
        self.gray
    }

    pub fn set_gray(&mut self, gray: f64) -> Result<(), RangeError> {
        self.gray = normalize_percent("gray", gray)?;
        Ok(())
    }

    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk::from_percentages(0.0, 0.0, 0.0, scale_fraction(self.gray))
    }

    /// The gray percentage reused, truncated, as all three RGB channels.
    ///
    /// No rescaling from 0..100 to 0..255 takes place: gray 50 becomes
    /// `rgb(50, 50, 50)`.
    pub fn to_rgb(&self) -> Rgb {
        let level = self.gray.trunc();
        Rgb::from_channels(level, level, level, None)
    }

    pub fn render(&self, format: Format) -> String {
        match format {
            Format::Css | Format::Comma => self.to_rgb().render(format),
            Format::Percent => format_number(round_to(self.gray / 100.0, 2)),
            Format::Plain => format_number(self.gray),
        }
    }
}

impl fmt::Display for Grayscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Format::Percent))
    }
}

impl Fields for Grayscale {
    type Field = GrayField;

    fn get(&self, field: GrayField) -> FieldValue {
        match field {
            GrayField::Gray => self.gray.into(),
        }
    }

    fn set(&mut self, field: GrayField, value: FieldValue) -> ColorResult<()> {
        match field {
            GrayField::Gray => self.set_gray(value.as_number()?)?,
        }
        Ok(())
    }
}

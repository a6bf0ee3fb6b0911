//! CMYK color type

use std::fmt;

use super::{Grayscale, Rgb};
use crate::error::{ColorResult, RangeError};
use crate::field::{field_keys, FieldValue, Fields};
use crate::format::Format;
use crate::numeric::{format_number, normalize_percent, round_to, scale_fraction};

field_keys! {
    /// Field keys of [`Cmyk`].
    CmykField { C => "c", M => "m", Y => "y", K => "k" }
}

/// A cyan/magenta/yellow/black print color, each channel 0..=100 percent.
///
/// Inputs below 1 are read as 0..1 fractions and scaled by 100, so `0.5`
/// and `50` both store 50. A genuine sub-1 percentage cannot be entered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cmyk {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
}

impl Cmyk {
    /// Create a new CMYK color.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::OutOfRange`] for any channel outside 0..=100.
    ///
    /// # Example
    /// ```
    /// use color_model::Cmyk;
    /// let cmyk = Cmyk::new(65.0, 25.0, 35.0, 10.0).unwrap();
    /// assert_eq!(cmyk.to_rgb().to_string(), "rgb(80, 172, 149)");
    /// ```
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Result<Self, RangeError> {
        let mut cmyk = Self::default();
        cmyk.set_c(c)?;
        cmyk.set_m(m)?;
        cmyk.set_y(y)?;
        cmyk.set_k(k)?;
        Ok(cmyk)
    }

    /// Build from percentages that are already in range and scaled.
    pub(crate) fn from_percentages(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn set_c(&mut self, c: f64) -> Result<(), RangeError> {
        self.c = normalize_percent("c", c)?;
        Ok(())
    }

    pub fn set_m(&mut self, m: f64) -> Result<(), RangeError> {
        self.m = normalize_percent("m", m)?;
        Ok(())
    }

    pub fn set_y(&mut self, y: f64) -> Result<(), RangeError> {
        self.y = normalize_percent("y", y)?;
        Ok(())
    }

    pub fn set_k(&mut self, k: f64) -> Result<(), RangeError> {
        self.k = normalize_percent("k", k)?;
        Ok(())
    }

    /// Convert to RGB. A full black channel always yields `(0, 0, 0)`.
    pub fn to_rgb(&self) -> Rgb {
        let k = self.k / 100.0;
        let ink = |channel: f64| (channel / 100.0) * (1.0 - k) + k;

        Rgb::from_channels(
            (1.0 - ink(self.c)) * 255.0,
            (1.0 - ink(self.m)) * 255.0,
            (1.0 - ink(self.y)) * 255.0,
            None,
        )
    }

    /// The black channel reused as the gray percentage.
    pub fn to_gray(&self) -> Grayscale {
        Grayscale::from_percentage(scale_fraction(self.k))
    }

    pub fn render(&self, format: Format) -> String {
        let channels = [self.c, self.m, self.y, self.k];
        match format {
            Format::Comma => join(channels.iter().map(|&v| format_number(v)), ", "),
            Format::Css => self.to_rgb().render(format),
            Format::Percent => join(
                channels
                    .iter()
                    .map(|&v| format_number(round_to(v / 100.0, 2))),
                " ",
            ),
            Format::Plain => join(channels.iter().map(|&v| format_number(v)), " "),
        }
    }
}

fn join(parts: impl Iterator<Item = String>, separator: &str) -> String {
    parts.collect::<Vec<_>>().join(separator)
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Format::Percent))
    }
}

impl Fields for Cmyk {
    type Field = CmykField;

    fn get(&self, field: CmykField) -> FieldValue {
        match field {
            CmykField::C => self.c.into(),
            CmykField::M => self.m.into(),
            CmykField::Y => self.y.into(),
            CmykField::K => self.k.into(),
        }
    }

    fn set(&mut self, field: CmykField, value: FieldValue) -> ColorResult<()> {
        let value = value.as_number()?;
        match field {
            CmykField::C => self.set_c(value)?,
            CmykField::M => self.set_m(value)?,
            CmykField::Y => self.set_y(value)?,
            CmykField::K => self.set_k(value)?,
        }
        Ok(())
    }
}

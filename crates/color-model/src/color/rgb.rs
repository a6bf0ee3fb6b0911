//! RGB color type
//!
//! The hub representation: every cross-model conversion except Hex↔Rgb and
//! the Cmyk/Grayscale pair routes through [`Rgb`].

use std::fmt;

use super::{Cmyk, Grayscale, Hex, Hsl};
use crate::error::{ColorResult, RangeError};
use crate::field::{field_keys, FieldValue, Fields};
use crate::format::Format;
use crate::numeric::{format_number, round_to};

field_keys! {
    /// Field keys of [`Rgb`].
    RgbField { R => "r", G => "g", B => "b", A => "a" }
}

/// An RGB color with 8-bit channels and optional alpha.
///
/// Channels are range-checked on every set; an unset alpha means the color
/// carries no opacity information, which [`Rgb::has_alpha`] distinguishes
/// from an explicit `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
    a: Option<f64>,
}

impl Rgb {
    /// Create a new RGB color.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::OutOfRange`] when a channel is outside 0..=255
    /// or alpha is outside 0..=1.
    ///
    /// # Example
    /// ```
    /// use color_model::Rgb;
    /// let rgb = Rgb::new(240, 180, 60, Some(0.5)).unwrap();
    /// assert_eq!(rgb.to_string(), "rgba(240, 180, 60, 0.5)");
    /// ```
    pub fn new(r: i64, g: i64, b: i64, a: Option<f64>) -> Result<Self, RangeError> {
        let mut rgb = Self::default();
        rgb.set_r(r)?;
        rgb.set_g(g)?;
        rgb.set_b(b)?;
        if let Some(a) = a {
            rgb.set_a(a)?;
        }
        Ok(rgb)
    }

    /// Build from already-computed channel values, rounding and clamping.
    pub(crate) fn from_channels(r: f64, g: f64, b: f64, a: Option<f64>) -> Self {
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a,
        }
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn a(&self) -> Option<f64> {
        self.a
    }

    pub fn has_alpha(&self) -> bool {
        self.a.is_some()
    }

    pub fn set_r(&mut self, r: i64) -> Result<(), RangeError> {
        self.r = check_channel("r", r)?;
        Ok(())
    }

    pub fn set_g(&mut self, g: i64) -> Result<(), RangeError> {
        self.g = check_channel("g", g)?;
        Ok(())
    }

    pub fn set_b(&mut self, b: i64) -> Result<(), RangeError> {
        self.b = check_channel("b", b)?;
        Ok(())
    }

    pub fn set_a(&mut self, a: f64) -> Result<(), RangeError> {
        self.a = Some(RangeError::check("a", a, 0.0, 1.0)?);
        Ok(())
    }

    /// Convert to CMYK.
    ///
    /// Pure black saturates K and zeroes C, M and Y.
    pub fn to_cmyk(&self) -> Cmyk {
        let cyan = 1.0 - f64::from(self.r) / 255.0;
        let magenta = 1.0 - f64::from(self.g) / 255.0;
        let yellow = 1.0 - f64::from(self.b) / 255.0;
        let k = cyan.min(magenta).min(yellow).min(1.0);

        let (c, m, y) = if k == 1.0 {
            (0.0, 0.0, 0.0)
        } else {
            (
                ((cyan - k) / (1.0 - k) * 100.0).round(),
                ((magenta - k) / (1.0 - k) * 100.0).round(),
                ((yellow - k) / (1.0 - k) * 100.0).round(),
            )
        };

        Cmyk::from_percentages(c, m, y, (k * 100.0).round())
    }

    /// Convert to grayscale.
    ///
    /// The channel sum is averaged with integer division before scaling to a
    /// percentage, and the percentage is floored again.
    pub fn to_gray(&self) -> Grayscale {
        let sum = u32::from(self.r) + u32::from(self.g) + u32::from(self.b);
        let average = f64::from(sum / 3);
        Grayscale::from_percentage((average / 255.0 * 100.0).floor())
    }

    /// Convert to HSL.
    ///
    /// Lightness is the maximum channel and saturation is `delta / max`.
    /// The hue sector is chosen by the first channel, in r, g, b order,
    /// that equals the maximum while its successor does not. Hues that come
    /// out negative wrap around 360.
    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = (f64::from(self.r), f64::from(self.g), f64::from(self.b));
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta > 0.0 {
            let sector = if max == r && max != g {
                (g - b) / delta
            } else if max == g && max != b {
                2.0 + (b - r) / delta
            } else {
                4.0 + (r - g) / delta
            };
            sector / 6.0
        } else {
            0.0
        };

        let lightness = max / 255.0;
        let saturation = if delta == 0.0 { 0.0 } else { delta / max };

        let h = ((hue * 360.0).round() as i64).rem_euclid(360);
        Hsl::from_components(
            h as u16,
            (saturation * 100.0).round() as u8,
            (lightness * 100.0).round() as u8,
            self.a,
        )
    }

    /// Convert to a 6-digit hex color. Alpha is dropped.
    pub fn to_hex(&self) -> Hex {
        Hex::from_channels(self.r, self.g, self.b)
    }

    /// Render the color as text.
    ///
    /// The plain and comma forms only append alpha when it is non-zero; the
    /// CSS form switches to `rgba()` whenever alpha is set.
    pub fn render(&self, format: Format) -> String {
        match format {
            Format::Comma => {
                let mut out = format!("{}, {}, {}", self.r, self.g, self.b);
                if let Some(a) = self.visible_alpha() {
                    out.push_str(", ");
                    out.push_str(&format_number(a));
                }
                out
            }
            Format::Css => match self.a {
                Some(a) => format!(
                    "rgba({}, {}, {}, {})",
                    self.r,
                    self.g,
                    self.b,
                    format_number(a)
                ),
                None => format!("rgb({}, {}, {})", self.r, self.g, self.b),
            },
            Format::Percent => [self.r, self.g, self.b]
                .iter()
                .map(|&c| format_number(round_to(f64::from(c) / 255.0, 2)))
                .collect::<Vec<_>>()
                .join(" "),
            Format::Plain => {
                let mut out = format!("{} {} {}", self.r, self.g, self.b);
                if let Some(a) = self.visible_alpha() {
                    out.push(' ');
                    out.push_str(&format_number(a));
                }
                out
            }
        }
    }

    // zero alpha counts as absent in the plain and comma forms
    fn visible_alpha(&self) -> Option<f64> {
        self.a.filter(|&a| a != 0.0)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: None,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Format::Css))
    }
}

impl Fields for Rgb {
    type Field = RgbField;

    fn get(&self, field: RgbField) -> FieldValue {
        match field {
            RgbField::R => self.r.into(),
            RgbField::G => self.g.into(),
            RgbField::B => self.b.into(),
            RgbField::A => self.a.into(),
        }
    }

    fn set(&mut self, field: RgbField, value: FieldValue) -> ColorResult<()> {
        match field {
            RgbField::R => self.set_r(value.as_integer()?)?,
            RgbField::G => self.set_g(value.as_integer()?)?,
            RgbField::B => self.set_b(value.as_integer()?)?,
            RgbField::A => self.set_a(value.as_number()?)?,
        }
        Ok(())
    }
}

fn check_channel(field: &'static str, value: i64) -> Result<u8, RangeError> {
    u8::try_from(value).map_err(|_| RangeError::OutOfRange {
        field,
        min: 0.0,
        max: 255.0,
        value: value as f64,
    })
}

fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

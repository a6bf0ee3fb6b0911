//! Parsing colors out of free-form strings.
//!
//! The input is lowercased and classified by shape, first match wins:
//!
//! 1. starts with `rgb` - `rgb(...)` / `rgba(...)`, 3 or 4 values
//! 2. starts with `hsl` - `hsl(...)` / `hsla(...)`, 3 or 4 values
//! 3. starts with `#` - a hex color
//! 4. exactly three spaces - four space separated CMYK values
//! 5. a single number - a grayscale percentage
//!
//! Value tokens are read by their leading numeric prefix, so `"100%"` reads
//! as 100.

use crate::color::{Cmyk, Color, Grayscale, Hex, Hsl, Rgb};
use crate::error::{ColorResult, DomainError};
use crate::numeric::{is_numeric, leading_integer, leading_number};

/// Parse a color string into the model it encodes.
///
/// # Errors
///
/// [`DomainError`] when the string matches no shape or its value list is
/// malformed, and [`RangeError`](crate::RangeError) when a value is outside
/// the model's domain.
///
/// # Example
/// ```
/// use color_model::{parse, Color};
///
/// let color = parse("hsla(240, 100%, 100%, 0.5)").unwrap();
/// assert!(matches!(color, Color::Hsl(ref hsl) if hsl.h() == 240));
/// ```
pub fn parse(input: &str) -> ColorResult<Color> {
    let lower = input.to_lowercase();

    let result = classify(&lower);
    match &result {
        Ok(color) => tracing::trace!(input = %input, model = %color.model(), "Parsed color"),
        Err(e) => tracing::debug!(input = %input, error = %e, "Failed to parse color"),
    }
    result
}

fn classify(lower: &str) -> ColorResult<Color> {
    if lower.starts_with("rgb") {
        let values = function_values(lower)?;
        let (r, g, b, a) = channels("rgb", &values)?;
        Ok(Rgb::new(r, g, b, a)?.into())
    } else if lower.starts_with("hsl") {
        let values = function_values(lower)?;
        let (h, s, l, a) = channels("hsl", &values)?;
        Ok(Hsl::new(h, s, l, a)?.into())
    } else if lower.starts_with('#') {
        Ok(Hex::new(lower)?.into())
    } else if lower.matches(' ').count() == 3 {
        match extract_values(lower, ' ').as_slice() {
            [c, m, y, k] => Ok(Cmyk::new(
                leading_number(c)?,
                leading_number(m)?,
                leading_number(y)?,
                leading_number(k)?,
            )?
            .into()),
            values => Err(DomainError::ValueCount {
                model: "cmyk",
                expected: "4",
                found: values.len(),
            }
            .into()),
        }
    } else if is_numeric(lower) {
        Ok(Grayscale::new(leading_number(lower)?)?.into())
    } else {
        Err(DomainError::UnrecognizedFormat(lower.to_string()).into())
    }
}

/// Split the text between the first `(` and the following `)` on `separator`
/// and trim every token. Text without both parentheses is split whole.
pub fn extract_values(input: &str, separator: char) -> Vec<String> {
    let inner = parenthesized(input).unwrap_or(input);
    inner
        .split(separator)
        .map(|token| token.trim().to_string())
        .collect()
}

fn parenthesized(input: &str) -> Option<&str> {
    if !(input.contains('(') && input.contains(')')) {
        return None;
    }
    let open = input.find('(')?;
    let rest = &input[open + 1..];
    let close = rest.find(')')?;
    Some(&rest[..close])
}

// Color functions must carry a balanced value list.
fn function_values(input: &str) -> ColorResult<Vec<String>> {
    if parenthesized(input).is_none() {
        return Err(DomainError::Malformed(input.to_string()).into());
    }
    Ok(extract_values(input, ','))
}

type Channels = (i64, i64, i64, Option<f64>);

fn channels(model: &'static str, values: &[String]) -> ColorResult<Channels> {
    match values {
        [x, y, z] => Ok((
            leading_integer(x)?,
            leading_integer(y)?,
            leading_integer(z)?,
            None,
        )),
        [x, y, z, a] => Ok((
            leading_integer(x)?,
            leading_integer(y)?,
            leading_integer(z)?,
            Some(leading_number(a)?),
        )),
        _ => Err(DomainError::ValueCount {
            model,
            expected: "3 or 4",
            found: values.len(),
        }
        .into()),
    }
}

use color_model::Format;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// Output format selectable from the command line and config file.
///
/// Names are matched case-insensitively here; the engine's own
/// [`Format`] tokens (`COMMA`, `CSS`, `PERCENT`) are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Comma,
    Css,
    Percent,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => Format::Plain,
            OutputFormat::Comma => Format::Comma,
            OutputFormat::Css => Format::Css,
            OutputFormat::Percent => Format::Percent,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "comma" => Ok(OutputFormat::Comma),
            "css" => Ok(OutputFormat::Css),
            "percent" => Ok(OutputFormat::Percent),
            _ => Err(ConvertError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Comma => "comma",
            OutputFormat::Css => "css",
            OutputFormat::Percent => "percent",
        };
        f.write_str(name)
    }
}

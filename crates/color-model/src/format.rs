//! Render formats shared by every color model.

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Textual rendering format.
///
/// `Plain` is the implicit default (space separated values); the other
/// variants correspond to the tokens `COMMA`, `CSS` and `PERCENT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Plain,
    Comma,
    Css,
    Percent,
}

impl Format {
    /// The format token, `None` for the implicit default.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Format::Plain => None,
            Format::Comma => Some("COMMA"),
            Format::Css => Some("CSS"),
            Format::Percent => Some("PERCENT"),
        }
    }
}

impl FromStr for Format {
    type Err = DomainError;

    /// Tokens match by exact identity; `"css"` is not `"CSS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COMMA" => Ok(Format::Comma),
            "CSS" => Ok(Format::Css),
            "PERCENT" => Ok(Format::Percent),
            _ => Err(DomainError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().unwrap_or("PLAIN"))
    }
}

//! Format-string transformations applied by decorating loggers.

use std::str::FromStr;

use thiserror::Error;

/// A pure rewrite of a format string.
///
/// No separator is inserted between the stored text and the input; include
/// one in the prefix or suffix if it is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formatter {
    Prefix(String),
    Suffix(String),
}

impl Formatter {
    pub fn prefix(text: impl Into<String>) -> Self {
        Self::Prefix(text.into())
    }

    pub fn suffix(text: impl Into<String>) -> Self {
        Self::Suffix(text.into())
    }

    /// Apply the transformation to `input`.
    pub fn format(&self, input: &str) -> String {
        match self {
            Formatter::Prefix(prefix) => {
                let mut out = String::with_capacity(prefix.len() + input.len());
                out.push_str(prefix);
                out.push_str(input);
                out
            }
            Formatter::Suffix(suffix) => {
                let mut out = String::with_capacity(input.len() + suffix.len());
                out.push_str(input);
                out.push_str(suffix);
                out
            }
        }
    }
}

/// Error returned when a `kind:text` formatter description cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFormatterError {
    #[error("missing ':' in formatter '{0}'; expected prefix:<text> or suffix:<text>")]
    MissingSeparator(String),

    #[error("unknown formatter kind '{0}'; expected prefix or suffix")]
    UnknownKind(String),
}

impl FromStr for Formatter {
    type Err = ParseFormatterError;

    /// Parse `prefix:<text>` or `suffix:<text>`. Everything after the first
    /// colon is kept verbatim, whitespace included.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, text) = s
            .split_once(':')
            .ok_or_else(|| ParseFormatterError::MissingSeparator(s.to_string()))?;

        match kind.trim().to_ascii_lowercase().as_str() {
            "prefix" => Ok(Formatter::prefix(text)),
            "suffix" => Ok(Formatter::suffix(text)),
            _ => Err(ParseFormatterError::UnknownKind(kind.to_string())),
        }
    }
}

//! Errors encountered while reading a [`Complex`](crate::Complex) from text.
use std::fmt;
use std::num::ParseFloatError;

use serde::de;

/// The token of the `<re> <im> <suffix>` stream form an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// The leading real part.
    Real,
    /// The imaginary part.
    Imaginary,
    /// The trailing suffix (usually `i`), which is read but never interpreted.
    Suffix,
}

impl Part {
    /// Returns a `&'static str` describing the part, for formatting.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "real part",
            Self::Imaginary => "imaginary part",
            Self::Suffix => "suffix",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error returned when reading a [`Complex`](crate::Complex) fails. A failed read never
/// produces a partially parsed value.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// The underlying stream returned an error.
    #[error("error reading complex number: {0}")]
    Io(#[from] std::io::Error),
    /// The input ended before the given token was found.
    #[error("missing {0}")]
    MissingToken(Part),
    /// A token was not valid UTF-8.
    #[error("{0} is not valid UTF-8")]
    InvalidUtf8(Part),
    /// A numeric token could not be parsed as a float.
    #[error("invalid {part} '{token}': {source}")]
    Float {
        /// Which token failed to parse.
        part: Part,
        /// The offending token.
        token: String,
        /// The underlying float parsing error.
        source: ParseFloatError,
    },
    /// Non-whitespace text followed the suffix, when parsing a complete string.
    #[error("unexpected trailing input '{0}'")]
    TrailingInput(String),
}

impl ReadError {
    /// Returns the token this error refers to, if it refers to one specifically.
    pub const fn part(&self) -> Option<Part> {
        match self {
            Self::MissingToken(part) | Self::InvalidUtf8(part) | Self::Float { part, .. } => {
                Some(*part)
            }
            Self::Io(_) | Self::TrailingInput(_) => None,
        }
    }

    /// Formats 'self' as an arbitrary [`serde::de::Error`], given the string we tried to
    /// parse from.
    pub(crate) fn into_de_error<E>(self, string: &str) -> E
    where
        E: de::Error,
    {
        de::Error::invalid_value(de::Unexpected::Str(string), &self)
    }
}

impl de::Expected for ReadError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a complex number in the form '<re> <im> i' ({self})")
    }
}

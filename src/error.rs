//! Error types for TOON encoding and decoding.
//!
//! ## Error Categories
//!
//! - **Decode errors**: a classified [`ErrorKind`] plus the line/column where
//!   the problem was found
//! - **Message errors**: generic errors raised via serde's `custom()` hooks
//! - **I/O errors**: failures reading from a [`std::io::Read`]
//!
//! ## Examples
//!
//! ```rust
//! use toon::{from_str, Value, Error};
//!
//! let result: Result<Value, Error> = from_str("invalid: [malformed");
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// The specific kind of problem encountered while decoding TOON text.
///
/// Each variant corresponds to a distinct grammar or structural violation;
/// keeping them distinct lets callers match on failure class without
/// string-parsing the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A quoted string was never closed before the line ended.
    UnterminatedString,
    /// A `{...}` field list in a tabular header was never closed.
    UnterminatedFields,
    /// A `\` escape was followed by a character that isn't a recognized
    /// escape (only `\\`, `\"`, `\n`, `\t`, `\r` are recognized; there is no
    /// `\uXXXX` support).
    InvalidEscape,
    /// A line's leading whitespace wasn't a whole multiple of the indent
    /// unit, or mixed tabs and spaces.
    IndentError,
    /// A `key: value` or header line was missing its separating colon.
    MissingColon,
    /// A tabular array's header declared row data but no row lines followed.
    ExpectedRows,
    /// A tabular array row had a different number of fields than its header.
    RowWidthMismatch,
    /// An array's declared length marker didn't match its actual element
    /// count.
    LengthMismatch,
    /// A blank line appeared inside a list or tabular array body.
    BlankInArray,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::UnterminatedString => "unterminated string",
            ErrorKind::UnterminatedFields => "unterminated field list",
            ErrorKind::InvalidEscape => "invalid escape sequence",
            ErrorKind::IndentError => "invalid indentation",
            ErrorKind::MissingColon => "missing colon",
            ErrorKind::ExpectedRows => "expected row data",
            ErrorKind::RowWidthMismatch => "row width does not match header",
            ErrorKind::LengthMismatch => "declared length does not match element count",
            ErrorKind::BlankInArray => "blank line inside array body",
        };
        f.write_str(s)
    }
}

/// Represents all possible errors that can occur during TOON encoding or
/// decoding.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A classified decode failure at a specific line and column.
    #[error("{kind} at line {line}, column {column}: {message}")]
    Decode {
        kind: ErrorKind,
        line: usize,
        column: usize,
        message: String,
    },

    /// A generic error, typically produced by serde's `custom()` hooks or by
    /// a type's own `Serialize`/`Deserialize` impl.
    #[error("{0}")]
    Message(String),

    /// An I/O failure reading from or writing to a stream.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a classified decode error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon::{Error, ErrorKind};
    ///
    /// let err = Error::decode(ErrorKind::MissingColon, 10, 5, "expected ':' after key");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn decode(kind: ErrorKind, line: usize, column: usize, message: impl Into<String>) -> Self {
        Error::Decode {
            kind,
            line,
            column,
            message: message.into(),
        }
    }

    /// Returns the [`ErrorKind`] for a decode error, or `None` for other
    /// error variants.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Decode { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Creates a generic message error.
    pub fn message(msg: impl Into<String>) -> Self {
        Error::Message(msg.into())
    }

    /// Creates an I/O error.
    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = Error::decode(ErrorKind::MissingColon, 3, 7, "expected ':'");
        let text = err.to_string();
        assert!(text.contains("line 3"));
        assert!(text.contains("column 7"));
        assert!(text.contains("missing colon"));
    }

    #[test]
    fn test_kind_accessor() {
        let err = Error::decode(ErrorKind::InvalidEscape, 1, 1, "bad escape");
        assert_eq!(err.kind(), Some(ErrorKind::InvalidEscape));

        let err = Error::message("oops");
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_serde_custom() {
        use serde::de::Error as _;
        let err: Error = Error::custom("bad input");
        assert!(matches!(err, Error::Message(_)));
    }
}

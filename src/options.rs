//! Configuration options controlling TOON encoding and decoding.

/// The delimiter used to separate fields in tabular and inline arrays.
///
/// TOON supports three delimiters. Comma is the default and most
/// token-efficient for typical data; tab and pipe are useful when values
/// themselves commonly contain commas.
///
/// # Examples
///
/// ```rust
/// use toon::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the literal character this delimiter represents.
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Returns the string used when this delimiter is written into a tabular
    /// or inline-array header, e.g. `[3\t]`. Comma is the implicit default
    /// and contributes nothing to the header.
    #[inline]
    #[must_use]
    pub const fn header_str(self) -> &'static str {
        match self {
            Delimiter::Comma => "",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// A human-readable name, used in error messages.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
            Delimiter::Pipe => "pipe",
        }
    }
}

/// Options controlling how values are encoded to TOON text.
///
/// # Examples
///
/// ```rust
/// use toon::{EncodeOptions, Delimiter};
///
/// let options = EncodeOptions::new()
///     .with_delimiter(Delimiter::Tab)
///     .with_length_marker('#');
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodeOptions {
    /// Number of spaces per indentation level. Defaults to 2.
    pub indent: usize,
    /// Delimiter used for tabular and inline arrays. Defaults to comma.
    pub delimiter: Delimiter,
    /// Optional character prefixed to array length markers, e.g. `[#3]`.
    /// `None` (the default) omits the marker prefix entirely.
    pub length_marker: Option<char>,
    /// Reserved for future human-oriented formatting passes. Currently a
    /// no-op; encoding is always deterministic regardless of this flag.
    pub pretty: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::Comma,
            length_marker: None,
            pretty: false,
        }
    }
}

impl EncodeOptions {
    /// Creates a new set of options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the `pretty` formatting flag.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Sets the number of spaces used per indentation level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the delimiter used for tabular and inline arrays.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the length-marker prefix character.
    #[must_use]
    pub fn with_length_marker(mut self, marker: char) -> Self {
        self.length_marker = Some(marker);
        self
    }
}

/// Options controlling how TOON text is decoded.
///
/// # Examples
///
/// ```rust
/// use toon::DecodeOptions;
///
/// let lenient = DecodeOptions::new().lenient();
/// assert!(!lenient.strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// When `true` (the default), the decoder rejects row-width mismatches,
    /// declared-length mismatches, and other structural inconsistencies
    /// instead of recovering from them.
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions { strict: true }
    }
}

impl DecodeOptions {
    /// Creates a new set of options with default (strict) values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables strict mode, allowing the decoder to recover from
    /// recoverable structural mismatches instead of erroring.
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Explicitly sets the `strict` flag.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_chars() {
        assert_eq!(Delimiter::Comma.as_char(), ',');
        assert_eq!(Delimiter::Tab.as_char(), '\t');
        assert_eq!(Delimiter::Pipe.as_char(), '|');
    }

    #[test]
    fn test_delimiter_header_str() {
        assert_eq!(Delimiter::Comma.header_str(), "");
        assert_eq!(Delimiter::Tab.header_str(), "\t");
        assert_eq!(Delimiter::Pipe.header_str(), "|");
    }

    #[test]
    fn test_encode_options_builder() {
        let options = EncodeOptions::new()
            .with_indent(4)
            .with_delimiter(Delimiter::Pipe)
            .with_length_marker('#');

        assert_eq!(options.indent, 4);
        assert_eq!(options.delimiter, Delimiter::Pipe);
        assert_eq!(options.length_marker, Some('#'));
    }

    #[test]
    fn test_decode_options_default_is_strict() {
        let options = DecodeOptions::default();
        assert!(options.strict);

        let lenient = options.lenient();
        assert!(!lenient.strict);
    }
}

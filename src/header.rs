//! The array header grammar: `[N<delim>?]{fields}?:`.
//!
//! A header appears after a key (`items[3]{sku,price}:`) or, for a
//! top-level array, on its own (`[3]: 1,2,3`). This module parses just the
//! bracketed part — the caller has already located where the header begins
//! and is responsible for everything before it (the key, if any) and
//! everything after the header's trailing colon (the inline row, if any).

use crate::error::{Error, ErrorKind, Result};
use crate::options::Delimiter;

/// A parsed array header.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayHeader {
    /// The declared element count, from inside the brackets.
    pub length: usize,
    /// The marker character prefixed to the length, if any (e.g. `#`).
    pub length_marker: Option<char>,
    /// The delimiter used for this array's fields and row values.
    pub delimiter: Delimiter,
    /// Field names from a `{...}` tabular header, if present.
    pub fields: Option<Vec<String>>,
}

/// Parses a header starting at `s[0] == '['` through its trailing `:`.
///
/// Returns the parsed header and the remainder of the line following the
/// colon (with at most one leading space trimmed) — this is the inline row
/// for an inline array, or an empty string when rows follow as child lines.
pub fn parse_header<'a>(s: &'a str, line_no: usize, col: usize) -> Result<(ArrayHeader, &'a str)> {
    debug_assert!(s.starts_with('['));

    let close = s.find(']').ok_or_else(|| {
        Error::decode(
            ErrorKind::MissingColon,
            line_no,
            col,
            "unterminated array header: missing ']'",
        )
    })?;
    let bracket_body = &s[1..close];
    let (length, length_marker, delimiter) = parse_bracket_body(bracket_body, line_no, col)?;

    let mut rest = &s[close + 1..];
    let fields = if rest.starts_with('{') {
        let field_close = rest.find('}').ok_or_else(|| {
            Error::decode(
                ErrorKind::UnterminatedFields,
                line_no,
                col,
                "unterminated field list: missing '}'",
            )
        })?;
        let field_body = &rest[1..field_close];
        let sep = delimiter.as_char();
        let names = if field_body.is_empty() {
            Vec::new()
        } else {
            field_body.split(sep).map(|f| f.trim().to_string()).collect()
        };
        rest = &rest[field_close + 1..];
        Some(names)
    } else {
        None
    };

    let rest = rest.strip_prefix(':').ok_or_else(|| {
        Error::decode(
            ErrorKind::MissingColon,
            line_no,
            col,
            "expected ':' after array header",
        )
    })?;
    let rest = rest.strip_prefix(' ').unwrap_or(rest);

    Ok((
        ArrayHeader {
            length,
            length_marker,
            delimiter,
            fields,
        },
        rest,
    ))
}

fn parse_bracket_body(
    body: &str,
    line_no: usize,
    col: usize,
) -> Result<(usize, Option<char>, Delimiter)> {
    let mut chars = body.chars().peekable();
    let mut marker = None;

    if let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            marker = Some(c);
            chars.next();
        }
    }

    let digits: String = chars.clone().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(Error::decode(
            ErrorKind::MissingColon,
            line_no,
            col,
            "array header is missing its length",
        ));
    }
    for _ in 0..digits.len() {
        chars.next();
    }

    let length: usize = digits.parse().map_err(|_| {
        Error::decode(
            ErrorKind::LengthMismatch,
            line_no,
            col,
            format!("invalid array length '{}'", digits),
        )
    })?;

    let delimiter = match chars.next() {
        None => Delimiter::Comma,
        Some(',') => Delimiter::Comma,
        Some('\t') => Delimiter::Tab,
        Some('|') => Delimiter::Pipe,
        Some(other) => {
            return Err(Error::decode(
                ErrorKind::MissingColon,
                line_no,
                col,
                format!("unrecognized delimiter marker '{}' in array header", other),
            ))
        }
    };

    if chars.next().is_some() {
        return Err(Error::decode(
            ErrorKind::MissingColon,
            line_no,
            col,
            "unexpected trailing characters in array header",
        ));
    }

    Ok((length, marker, delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_length() {
        let (header, rest) = parse_header("[3]: 1,2,3", 1, 1).unwrap();
        assert_eq!(header.length, 3);
        assert_eq!(header.length_marker, None);
        assert_eq!(header.delimiter, Delimiter::Comma);
        assert_eq!(header.fields, None);
        assert_eq!(rest, "1,2,3");
    }

    #[test]
    fn test_parse_length_marker() {
        let (header, _) = parse_header("[#3]: 1,2,3", 1, 1).unwrap();
        assert_eq!(header.length_marker, Some('#'));
        assert_eq!(header.length, 3);
    }

    #[test]
    fn test_parse_tab_delimiter() {
        let (header, _) = parse_header("[2\t]{sku\tprice}: a\t1", 1, 1).unwrap();
        assert_eq!(header.delimiter, Delimiter::Tab);
        assert_eq!(
            header.fields,
            Some(vec!["sku".to_string(), "price".to_string()])
        );
    }

    #[test]
    fn test_parse_pipe_delimiter_with_fields() {
        let (header, rest) = parse_header("[2|]{sku|price}:", 1, 1).unwrap();
        assert_eq!(header.delimiter, Delimiter::Pipe);
        assert_eq!(
            header.fields,
            Some(vec!["sku".to_string(), "price".to_string()])
        );
        assert_eq!(rest, "");
    }

    #[test]
    fn test_missing_bracket_close_errors() {
        let err = parse_header("[3: 1,2,3", 1, 1).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::MissingColon));
    }

    #[test]
    fn test_missing_colon_errors() {
        let err = parse_header("[3]", 1, 1).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::MissingColon));
    }

    #[test]
    fn test_unterminated_fields_errors() {
        let err = parse_header("[2]{sku,price:", 1, 1).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::UnterminatedFields));
    }

    #[test]
    fn test_empty_array_header() {
        let (header, rest) = parse_header("[0]:", 1, 1).unwrap();
        assert_eq!(header.length, 0);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_explicit_comma_delimiter_marker() {
        let (header, rest) = parse_header("[0,]:", 1, 1).unwrap();
        assert_eq!(header.length, 0);
        assert_eq!(header.delimiter, Delimiter::Comma);
        assert_eq!(rest, "");
    }
}

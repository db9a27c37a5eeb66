//! String quoting and escaping rules shared by the encoder and decoder.
//!
//! TOON strings are unquoted by default; a string is quoted only when
//! leaving it bare would be ambiguous with another grammar production
//! (a delimiter, a structural character, or a literal like `true`/`null`/a
//! number). Quoted strings support a small, fixed escape table (`\\`, `\"`,
//! `\n`, `\r`, `\t`, `\b`, `\f`) — there is no `\uXXXX` unicode escape,
//! unlike JSON.

use crate::error::{Error, ErrorKind, Result};
use crate::options::Delimiter;

/// Returns `true` if `s`, written bare in a context using `delimiter`,
/// would be misread as something other than a plain string.
///
/// A string needs quoting if it:
/// - is empty
/// - has leading or trailing ASCII whitespace
/// - contains the active delimiter, a colon, quote, backslash, a control
///   character, or a bracket/brace/hash character anywhere in the string
/// - starts with `-` (would look like a list item marker or a negative number)
/// - is exactly `true`, `false`, or `null`
/// - parses as a number (so `"123"` round-trips as a string, not `123`)
#[must_use]
pub fn needs_quotes(s: &str, delimiter: Delimiter) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.trim() != s {
        return true;
    }
    if s.chars().any(|c| {
        c == delimiter.as_char()
            || matches!(c, ':' | '"' | '\\' | '[' | ']' | '{' | '}' | '#')
            || c.is_control()
    }) {
        return true;
    }
    if s.starts_with('-') {
        return true;
    }
    if matches!(s, "true" | "false" | "null") {
        return true;
    }
    if looks_like_number(s) {
        return true;
    }
    false
}

fn looks_like_number(s: &str) -> bool {
    s.parse::<f64>().is_ok()
}

/// Wraps `s` in double quotes, escaping backslashes, double quotes, and the
/// whitespace/control characters TOON's escape table recognizes (`\n`,
/// `\t`, `\r`, `\b`, `\f`).
#[must_use]
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Unescapes the body of a quoted string (the text between, but not
/// including, the surrounding `"` characters).
///
/// Recognizes `\\`, `\"`, `\n`, `\t`, `\r`, `\b`, `\f`. Any other character
/// following a backslash — including `u` — is an [`ErrorKind::InvalidEscape`].
pub fn unescape(body: &str, line: usize, col_offset: usize) -> Result<String> {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some((_, '\\')) => result.push('\\'),
            Some((_, '"')) => result.push('"'),
            Some((_, 'n')) => result.push('\n'),
            Some((_, 't')) => result.push('\t'),
            Some((_, 'r')) => result.push('\r'),
            Some((_, 'b')) => result.push('\u{8}'),
            Some((_, 'f')) => result.push('\u{c}'),
            Some((_, other)) => {
                return Err(Error::decode(
                    ErrorKind::InvalidEscape,
                    line,
                    col_offset + idx + 1,
                    format!("invalid escape sequence '\\{}'", other),
                ));
            }
            None => {
                return Err(Error::decode(
                    ErrorKind::UnterminatedString,
                    line,
                    col_offset + idx + 1,
                    "backslash at end of string",
                ));
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_quotes_for_ambiguous_literals() {
        assert!(needs_quotes("true", Delimiter::Comma));
        assert!(needs_quotes("null", Delimiter::Comma));
        assert!(needs_quotes("123", Delimiter::Comma));
        assert!(needs_quotes("3.14", Delimiter::Comma));
        assert!(!needs_quotes("hello", Delimiter::Comma));
    }

    #[test]
    fn test_needs_quotes_for_structural_chars() {
        assert!(needs_quotes("-dash", Delimiter::Comma));
        assert!(needs_quotes("[bracket", Delimiter::Comma));
        assert!(needs_quotes("a,b", Delimiter::Comma));
        assert!(!needs_quotes("a,b", Delimiter::Pipe));
    }

    #[test]
    fn test_needs_quotes_for_whitespace() {
        assert!(needs_quotes("", Delimiter::Comma));
        assert!(needs_quotes(" leading", Delimiter::Comma));
        assert!(needs_quotes("trailing ", Delimiter::Comma));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("a\nb"), "\"a\\nb\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_unescape_known_sequences() {
        assert_eq!(unescape("a\\nb", 1, 0).unwrap(), "a\nb");
        assert_eq!(unescape("a\\tb", 1, 0).unwrap(), "a\tb");
        assert_eq!(unescape("a\\\\b", 1, 0).unwrap(), "a\\b");
        assert_eq!(unescape("a\\\"b", 1, 0).unwrap(), "a\"b");
    }

    #[test]
    fn test_unescape_rejects_unicode_escape() {
        let err = unescape("a\\u0041b", 1, 0).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidEscape));
    }

    #[test]
    fn test_unescape_rejects_unknown_escape() {
        let err = unescape("a\\qb", 1, 0).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidEscape));
    }

    #[test]
    fn test_backspace_and_form_feed_round_trip() {
        let quoted = quote("a\u{8}b\u{c}c");
        assert_eq!(quoted, "\"a\\bb\\fc\"");
        assert_eq!(unescape("a\\bb\\fc", 1, 0).unwrap(), "a\u{8}b\u{c}c");
    }

    #[test]
    fn test_needs_quotes_for_control_characters() {
        assert!(needs_quotes("a\u{8}b", Delimiter::Comma));
        assert!(needs_quotes("a\u{1}b", Delimiter::Comma));
    }
}

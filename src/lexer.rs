//! Primitive lexical helpers shared by the scanner, header parser, and
//! decoder: indentation measurement and raw line splitting.
//!
//! Nothing in this module understands TOON's grammar. It only knows how
//! to split text into lines and measure leading whitespace; everything
//! structural (what a line *means*) is layered on top in [`crate::scanner`].

use crate::error::{Error, ErrorKind, Result};

/// The number of spaces a single indentation level occupies.
pub const INDENT_WIDTH: usize = 2;

/// Splits input text into lines, stripping a single trailing `\r` from each
/// (so both `\n` and `\r\n` line endings are accepted) without stripping
/// embedded `\r` elsewhere.
pub fn split_lines(input: &str) -> Vec<&str> {
    input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Measures a line's leading-space indentation depth.
///
/// Returns `(depth, rest)` where `depth` is the number of [`INDENT_WIDTH`]
/// units of leading space and `rest` is the line with that whitespace
/// removed. A line indented by a non-multiple of [`INDENT_WIDTH`], or one
/// that uses a leading tab, is an [`ErrorKind::IndentError`].
pub fn measure_indent(line: &str, line_no: usize) -> Result<(usize, &str)> {
    let trimmed = line.trim_start_matches(' ');
    let leading = line.len() - trimmed.len();

    if trimmed.starts_with('\t') {
        return Err(Error::decode(
            ErrorKind::IndentError,
            line_no,
            1,
            "indentation must use spaces, not tabs",
        ));
    }

    if leading % INDENT_WIDTH != 0 {
        return Err(Error::decode(
            ErrorKind::IndentError,
            line_no,
            leading + 1,
            format!(
                "indentation must be a multiple of {} spaces, found {}",
                INDENT_WIDTH, leading
            ),
        ));
    }

    Ok((leading / INDENT_WIDTH, trimmed))
}

/// Returns `true` if a line (after indentation has been stripped) is blank.
#[inline]
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_handles_crlf() {
        let lines = split_lines("a\r\nb\nc\r\n");
        assert_eq!(lines, vec!["a", "b", "c", ""]);
    }

    #[test]
    fn test_measure_indent_levels() {
        let (depth, rest) = measure_indent("    key: value", 1).unwrap();
        assert_eq!(depth, 2);
        assert_eq!(rest, "key: value");
    }

    #[test]
    fn test_measure_indent_rejects_odd_spaces() {
        let err = measure_indent("   key: value", 1).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::IndentError));
    }

    #[test]
    fn test_measure_indent_rejects_tabs() {
        let err = measure_indent("\tkey: value", 1).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::IndentError));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank("x"));
    }
}

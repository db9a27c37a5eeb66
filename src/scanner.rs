//! Eager line scanner: turns raw TOON text into a flat list of
//! [`ScannedLine`]s with their indentation depth already resolved.
//!
//! The scanner holds no cursor of its own — it produces the whole
//! `Vec<ScannedLine>` up front, which [`crate::decoder`] then walks with its
//! own explicit `(lines, position, depth)` state. Blank lines are dropped
//! here, but each surviving line keeps its original source line number so
//! later stages can tell a blank line was skipped (needed to detect a blank
//! line inside an array body).

use crate::lexer::{is_blank, measure_indent, split_lines};
use crate::Result;

/// A single non-blank line of TOON text, with its indentation already
/// measured and stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedLine<'a> {
    /// 1-based line number in the original source.
    pub line_no: usize,
    /// Indentation depth in indent units (not raw spaces).
    pub depth: usize,
    /// The line's content with leading indentation removed.
    pub content: &'a str,
}

/// Scans `input` into a flat list of non-blank lines.
pub fn scan(input: &str) -> Result<Vec<ScannedLine<'_>>> {
    let mut lines = Vec::new();
    for (idx, raw) in split_lines(input).into_iter().enumerate() {
        let line_no = idx + 1;
        if is_blank(raw) {
            continue;
        }
        let (depth, content) = measure_indent(raw, line_no)?;
        lines.push(ScannedLine {
            line_no,
            depth,
            content,
        });
    }
    Ok(lines)
}

/// Returns `true` if there is a gap in source line numbers between two
/// consecutive scanned lines, meaning one or more blank lines were skipped
/// between them.
#[inline]
#[must_use]
pub fn has_blank_gap(prev: &ScannedLine<'_>, next: &ScannedLine<'_>) -> bool {
    next.line_no > prev.line_no + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_skips_blank_lines() {
        let lines = scan("a: 1\n\nb: 2\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].content, "a: 1");
        assert_eq!(lines[1].content, "b: 2");
        assert_eq!(lines[1].line_no, 3);
    }

    #[test]
    fn test_scan_tracks_depth() {
        let lines = scan("a:\n  b: 1\n    c: 2\n").unwrap();
        assert_eq!(lines[0].depth, 0);
        assert_eq!(lines[1].depth, 1);
        assert_eq!(lines[2].depth, 2);
    }

    #[test]
    fn test_has_blank_gap() {
        let lines = scan("a: 1\n\nb: 2\n").unwrap();
        assert!(has_blank_gap(&lines[0], &lines[1]));

        let lines = scan("a: 1\nb: 2\n").unwrap();
        assert!(!has_blank_gap(&lines[0], &lines[1]));
    }
}

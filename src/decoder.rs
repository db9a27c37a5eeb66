//! The recursive-descent block parser: turns scanned lines into a [`Value`]
//! tree.
//!
//! All state is explicit: a slice of [`ScannedLine`]s, a cursor position
//! into it, and the current indentation depth. Nothing here is ambient or
//! global, which keeps the parser (and its error positions) easy to reason
//! about and to test in isolation.

use crate::error::{Error, ErrorKind, Result};
use crate::header::{self, ArrayHeader};
use crate::map::ToonMap;
use crate::options::DecodeOptions;
use crate::scanner::{self, ScannedLine};
use crate::strings;
use crate::value::{Number, Value};
use num_bigint::BigInt;

/// Decodes a complete TOON document into a [`Value`].
pub fn decode(input: &str, options: &DecodeOptions) -> Result<Value> {
    let lines = scanner::scan(input)?;
    if lines.is_empty() {
        return Ok(Value::Null);
    }
    let mut pos = 0usize;
    let value = parse_block(&lines, &mut pos, 0, options)?;
    if pos < lines.len() {
        let extra = &lines[pos];
        return Err(Error::decode(
            ErrorKind::IndentError,
            extra.line_no,
            1,
            "unexpected content after the top-level value",
        ));
    }
    Ok(value)
}

/// Parses whatever construct begins at `lines[*pos]` (which must be at
/// `depth`): an array header, an object, or a single scalar line.
fn parse_block(
    lines: &[ScannedLine<'_>],
    pos: &mut usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value> {
    let line = &lines[*pos];
    debug_assert_eq!(line.depth, depth);

    if line.content.starts_with('[') {
        let (header, inline_rest) = header::parse_header(line.content, line.line_no, 1)?;
        *pos += 1;
        return parse_array_body(&header, inline_rest, lines, pos, depth, options);
    }

    if find_unquoted_colon(line.content).is_some() {
        let obj = parse_object(lines, pos, depth, options)?;
        return Ok(Value::Object(obj));
    }

    // A lone scalar line (no key, no header).
    let value = parse_scalar(line.content, line.line_no, 1)?;
    *pos += 1;
    Ok(value)
}

fn parse_object(
    lines: &[ScannedLine<'_>],
    pos: &mut usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<ToonMap> {
    let mut map = ToonMap::new();

    while *pos < lines.len() && lines[*pos].depth == depth {
        let line = &lines[*pos];
        let content = line.content;

        if let Some(bracket) = find_unescaped(content, '[') {
            let colon = find_unquoted_colon(content);
            if colon.map_or(true, |c| bracket < c) {
                let key = parse_key(content[..bracket].trim_end())?;
                let (header, inline_rest) =
                    header::parse_header(&content[bracket..], line.line_no, bracket + 1)?;
                *pos += 1;
                let value =
                    parse_array_body(&header, inline_rest, lines, pos, depth, options)?;
                map.insert(key, value);
                continue;
            }
        }

        let colon = find_unquoted_colon(content).ok_or_else(|| {
            Error::decode(
                ErrorKind::MissingColon,
                line.line_no,
                1,
                "expected ':' separating key and value",
            )
        })?;
        let key = parse_key(content[..colon].trim_end())?;
        let rest = content[colon + 1..].trim_start();

        *pos += 1;
        if rest.is_empty() {
            if *pos < lines.len() && lines[*pos].depth == depth + 1 {
                let value = parse_block(lines, pos, depth + 1, options)?;
                map.insert(key, value);
            } else {
                map.insert(key, Value::Null);
            }
        } else {
            let value = parse_scalar(rest, line.line_no, colon + 2)?;
            map.insert(key, value);
        }
    }

    Ok(map)
}

/// Parses the body of an array following its header: either an inline row
/// on the header line itself, a tabular block of child rows, or a list
/// block of dash-prefixed child rows.
fn parse_array_body(
    header: &ArrayHeader,
    inline_rest: &str,
    lines: &[ScannedLine<'_>],
    pos: &mut usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value> {
    if let Some(fields) = &header.fields {
        if !inline_rest.is_empty() {
            return Err(Error::decode(
                ErrorKind::ExpectedRows,
                lines.get(*pos).map(|l| l.line_no).unwrap_or(0),
                1,
                "tabular array header cannot carry an inline row",
            ));
        }
        return parse_tabular_rows(header, fields, lines, pos, depth, options);
    }

    if !inline_rest.is_empty() {
        let values = split_delimited(inline_rest, header.delimiter.as_char())
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let col = 1 + i;
                parse_scalar(raw.trim(), lines.get(*pos).map(|l| l.line_no).unwrap_or(0), col)
            })
            .collect::<Result<Vec<_>>>()?;
        check_length(header, values.len(), lines, *pos, options)?;
        return Ok(Value::Array(values));
    }

    parse_list_rows(header, lines, pos, depth, options)
}

fn parse_tabular_rows(
    header: &ArrayHeader,
    fields: &[String],
    lines: &[ScannedLine<'_>],
    pos: &mut usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value> {
    let mut rows = Vec::with_capacity(header.length);
    let row_depth = depth + 1;

    while *pos < lines.len() && lines[*pos].depth == row_depth {
        let line = &lines[*pos];
        if *pos > 0 && options.strict && scanner::has_blank_gap(&lines[*pos - 1], line) {
            return Err(Error::decode(
                ErrorKind::BlankInArray,
                line.line_no,
                1,
                "blank line inside tabular array body",
            ));
        }
        let parts = split_delimited(line.content, header.delimiter.as_char());
        if options.strict && parts.len() != fields.len() {
            return Err(Error::decode(
                ErrorKind::RowWidthMismatch,
                line.line_no,
                1,
                format!(
                    "row has {} fields but header declares {}",
                    parts.len(),
                    fields.len()
                ),
            ));
        }
        let mut obj = ToonMap::new();
        for (field, raw) in fields.iter().zip(parts.iter()) {
            let value = parse_scalar(raw.trim(), line.line_no, 1)?;
            obj.insert(field.clone(), value);
        }
        rows.push(Value::Object(obj));
        *pos += 1;
    }

    check_length(header, rows.len(), lines, *pos, options)?;
    Ok(Value::Array(rows))
}

fn parse_list_rows(
    header: &ArrayHeader,
    lines: &[ScannedLine<'_>],
    pos: &mut usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Value> {
    let mut items = Vec::with_capacity(header.length);
    let row_depth = depth + 1;

    while *pos < lines.len() && lines[*pos].depth == row_depth {
        let line = &lines[*pos];
        if *pos > 0 && options.strict && scanner::has_blank_gap(&lines[*pos - 1], line) {
            return Err(Error::decode(
                ErrorKind::BlankInArray,
                line.line_no,
                1,
                "blank line inside list array body",
            ));
        }
        let content = line.content;
        let after_dash = content.strip_prefix('-').ok_or_else(|| {
            Error::decode(
                ErrorKind::MissingColon,
                line.line_no,
                1,
                "expected '-' to start a list array row",
            )
        })?;

        *pos += 1;

        if after_dash.is_empty() {
            // `-` alone: the row's value is a nested block two levels deeper
            // than the header, since the dash itself occupies one level.
            let value = parse_block(lines, pos, depth + 2, options)?;
            items.push(value);
            continue;
        }

        let rest = after_dash.strip_prefix(' ').unwrap_or(after_dash);

        if rest.starts_with('[') {
            let (nested_header, nested_inline) =
                header::parse_header(rest, line.line_no, content.len() - rest.len() + 1)?;
            let value =
                parse_array_body(&nested_header, nested_inline, lines, pos, depth + 1, options)?;
            items.push(value);
            continue;
        }

        if let Some(colon) = find_unquoted_colon(rest) {
            let key = parse_key(rest[..colon].trim_end())?;
            let value_rest = rest[colon + 1..].trim_start();
            let mut obj = ToonMap::new();
            if value_rest.is_empty() {
                if *pos < lines.len() && lines[*pos].depth == depth + 2 {
                    let value = parse_block(lines, pos, depth + 2, options)?;
                    obj.insert(key, value);
                } else {
                    obj.insert(key, Value::Null);
                }
            } else {
                obj.insert(key, parse_scalar(value_rest, line.line_no, 1)?);
            }
            while *pos < lines.len() && lines[*pos].depth == depth + 2 {
                let more = parse_object_entry(lines, pos, depth + 2, options)?;
                obj.insert(more.0, more.1);
            }
            items.push(Value::Object(obj));
        } else {
            items.push(parse_scalar(rest, line.line_no, 1)?);
        }
    }

    check_length(header, items.len(), lines, *pos, options)?;
    Ok(Value::Array(items))
}

/// Parses a single `key: value` entry (used to continue an object started
/// inline on a list-array dash line).
fn parse_object_entry(
    lines: &[ScannedLine<'_>],
    pos: &mut usize,
    depth: usize,
    options: &DecodeOptions,
) -> Result<(String, Value)> {
    let line = &lines[*pos];
    let content = line.content;

    if let Some(bracket) = find_unescaped(content, '[') {
        let colon = find_unquoted_colon(content);
        if colon.map_or(true, |c| bracket < c) {
            let key = parse_key(content[..bracket].trim_end())?;
            let (header, inline_rest) =
                header::parse_header(&content[bracket..], line.line_no, bracket + 1)?;
            *pos += 1;
            let value = parse_array_body(&header, inline_rest, lines, pos, depth, options)?;
            return Ok((key, value));
        }
    }

    let colon = find_unquoted_colon(content).ok_or_else(|| {
        Error::decode(
            ErrorKind::MissingColon,
            line.line_no,
            1,
            "expected ':' separating key and value",
        )
    })?;
    let key = parse_key(content[..colon].trim_end())?;
    let rest = content[colon + 1..].trim_start();
    *pos += 1;

    if rest.is_empty() {
        if *pos < lines.len() && lines[*pos].depth == depth + 1 {
            Ok((key, parse_block(lines, pos, depth + 1, options)?))
        } else {
            Ok((key, Value::Null))
        }
    } else {
        Ok((key, parse_scalar(rest, line.line_no, colon + 2)?))
    }
}

fn check_length(
    header: &ArrayHeader,
    actual: usize,
    lines: &[ScannedLine<'_>],
    pos: usize,
    options: &DecodeOptions,
) -> Result<()> {
    if options.strict && actual != header.length {
        let line_no = lines.get(pos.saturating_sub(1)).map(|l| l.line_no).unwrap_or(0);
        return Err(Error::decode(
            ErrorKind::LengthMismatch,
            line_no,
            1,
            format!(
                "array declared length {} but found {} elements",
                header.length, actual
            ),
        ));
    }
    Ok(())
}

/// Unquotes a key if it was written as a quoted string; otherwise returns it
/// verbatim.
fn parse_key(raw: &str) -> Result<String> {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        strings::unescape(&raw[1..raw.len() - 1], 1, 0)
    } else {
        Ok(raw.to_string())
    }
}

/// Parses a single scalar token: `null`, `true`/`false`, a number, a quoted
/// string, or a bare string.
fn parse_scalar(raw: &str, line_no: usize, col: usize) -> Result<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Value::Null);
    }
    if raw.starts_with('"') {
        if !raw.ends_with('"') || raw.len() < 2 {
            return Err(Error::decode(
                ErrorKind::UnterminatedString,
                line_no,
                col,
                "unterminated quoted string",
            ));
        }
        return Ok(Value::String(strings::unescape(
            &raw[1..raw.len() - 1],
            line_no,
            col,
        )?));
    }
    match raw {
        "null" => return Ok(Value::Null),
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }
    if let Ok(i) = raw.parse::<BigInt>() {
        return Ok(Value::Number(Number::Integer(i)));
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            return Ok(Value::Number(Number::Float(f)));
        }
    }
    Ok(Value::String(raw.to_string()))
}

/// Splits `s` on unquoted occurrences of `delim`.
fn split_delimited(s: &str, delim: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            in_quotes = !in_quotes;
            current.push(c);
        } else if c == '\\' && in_quotes {
            current.push(c);
            if let Some(next) = chars.next() {
                current.push(next);
            }
        } else if c == delim && !in_quotes {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);
    parts
}

/// Finds the index of the first unquoted `:` in `s`.
fn find_unquoted_colon(s: &str) -> Option<usize> {
    find_unescaped(s, ':')
}

/// Finds the byte index of the first unquoted occurrence of `target`.
fn find_unescaped(s: &str, target: char) -> Option<usize> {
    let mut in_quotes = false;
    let mut chars = s.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == '\\' && in_quotes {
            chars.next();
        } else if c == target && !in_quotes {
            return Some(idx);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DecodeOptions;

    fn decode_default(input: &str) -> Value {
        decode(input, &DecodeOptions::default()).unwrap()
    }

    #[test]
    fn test_decode_simple_object() {
        let value = decode_default("name: Alice\nage: 30\n");
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("name").unwrap().as_str(), Some("Alice"));
        assert_eq!(obj.get("age").unwrap().as_i64(), Some(30));
    }

    #[test]
    fn test_decode_inline_array() {
        let value = decode_default("tags[3]: a,b,c\n");
        let arr = value.as_array();
        // top-level single key still wraps in an object
        assert!(arr.is_none());
    }

    #[test]
    fn test_decode_top_level_inline_array() {
        let value = decode_default("[3]: 1,2,3");
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0].as_i64(), Some(1));
    }

    #[test]
    fn test_decode_tabular_array() {
        let input = "items[2]{sku,qty}:\n  A1,2\n  B2,5\n";
        let value = decode_default(input);
        let obj = value.as_object().unwrap();
        let items = obj.get("items").unwrap().as_array().unwrap();
        assert_eq!(items.len(), 2);
        let first = items[0].as_object().unwrap();
        assert_eq!(first.get("sku").unwrap().as_str(), Some("A1"));
        assert_eq!(first.get("qty").unwrap().as_i64(), Some(2));
    }

    #[test]
    fn test_decode_tab_delimiter_literal() {
        let input = "items[2\t]{sku\tqty}:\n  A1\t2\n  B2\t5\n";
        let value = decode_default(input);
        let obj = value.as_object().unwrap();
        let items = obj.get("items").unwrap().as_array().unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_decode_list_array_of_scalars() {
        let input = "tags[2]:\n  - admin\n  - developer\n";
        let value = decode_default(input);
        let obj = value.as_object().unwrap();
        let tags = obj.get("tags").unwrap().as_array().unwrap();
        assert_eq!(tags[0].as_str(), Some("admin"));
        assert_eq!(tags[1].as_str(), Some("developer"));
    }

    #[test]
    fn test_decode_rejects_unknown_escape() {
        let err = decode("name: \"a\\u0041b\"\n", &DecodeOptions::default()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidEscape));
    }

    #[test]
    fn test_decode_rejects_row_width_mismatch_strict() {
        let input = "items[2]{sku,qty}:\n  A1,2,extra\n  B2,5\n";
        let err = decode(input, &DecodeOptions::default()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::RowWidthMismatch));
    }

    #[test]
    fn test_decode_length_mismatch_strict() {
        let input = "[3]: 1,2\n";
        let err = decode(input, &DecodeOptions::default()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::LengthMismatch));
    }

    #[test]
    fn test_decode_length_mismatch_lenient_allowed() {
        let input = "[3]: 1,2\n";
        let value = decode(input, &DecodeOptions::default().lenient()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_decode_big_integer() {
        let value = decode_default("value: 99999999999999999999999999\n");
        let obj = value.as_object().unwrap();
        let v = obj.get("value").unwrap();
        assert!(v.is_number());
        assert_eq!(v.as_i64(), None);
    }

    #[test]
    fn test_decode_quoted_numeric_string() {
        let value = decode_default("code: \"123\"\n");
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("code").unwrap().as_str(), Some("123"));
    }
}

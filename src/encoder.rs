//! The block emitter: turns a [`Value`] tree into TOON text.
//!
//! Mirrors [`crate::decoder`]'s shape — one function per construct (object,
//! tabular array, list array, inline array) — writing into a `String` buffer
//! at an explicit depth rather than tracking any parser-side cursor.

use crate::map::ToonMap;
use crate::options::{Delimiter, EncodeOptions};
use crate::strings;
use crate::value::{Number, Value};

/// Encodes `value` to TOON text using `options`.
pub fn encode(value: &Value, options: &EncodeOptions) -> String {
    let mut out = String::new();
    match value {
        Value::Object(map) => write_object(&mut out, map, 0, options),
        Value::Array(items) => write_root_array(&mut out, items, options),
        scalar => out.push_str(&scalar_token(scalar, options.delimiter)),
    }
    out
}

fn indent(out: &mut String, depth: usize, options: &EncodeOptions) {
    out.push_str(&" ".repeat(depth * options.indent));
}

fn write_object(out: &mut String, map: &ToonMap, depth: usize, options: &EncodeOptions) {
    for (key, value) in map.iter() {
        indent(out, depth, options);
        out.push_str(&encode_key(key));

        match value {
            Value::Object(nested) => {
                if nested.is_empty() {
                    out.push_str(":\n");
                } else {
                    out.push_str(":\n");
                    write_object(out, nested, depth + 1, options);
                }
            }
            Value::Array(items) => {
                write_keyed_array(out, items, depth, options);
            }
            scalar => {
                out.push_str(": ");
                out.push_str(&scalar_token(scalar, options.delimiter));
                out.push('\n');
            }
        }
    }
}

fn encode_key(key: &str) -> String {
    if strings::needs_quotes(key, Delimiter::Comma) {
        strings::quote(key)
    } else {
        key.to_string()
    }
}

fn write_root_array(out: &mut String, items: &[Value], options: &EncodeOptions) {
    let header = array_header(items.len(), tabular_fields(items), options);
    out.push_str(&header);

    if items.is_empty() {
        // Nothing follows: no inline payload, no row block.
    } else if let Some(fields) = tabular_fields(items) {
        out.push('\n');
        write_tabular_rows(out, items, &fields, 1, options);
    } else if is_flat_scalars(items) {
        out.push(' ');
        out.push_str(&join_scalars(items, options));
        out.push('\n');
    } else {
        out.push('\n');
        write_list_rows(out, items, 0, options);
    }
}

fn write_keyed_array(out: &mut String, items: &[Value], depth: usize, options: &EncodeOptions) {
    let fields = tabular_fields(items);
    out.push_str(&array_header(items.len(), fields.clone(), options));

    if items.is_empty() {
        // Nothing follows: no inline payload, no row block.
    } else if let Some(fields) = fields {
        out.push('\n');
        write_tabular_rows(out, items, &fields, depth + 1, options);
    } else if is_flat_scalars(items) {
        out.push(' ');
        out.push_str(&join_scalars(items, options));
        out.push('\n');
    } else {
        out.push('\n');
        write_list_rows(out, items, depth, options);
    }
}

fn array_header(len: usize, fields: Option<Vec<String>>, options: &EncodeOptions) -> String {
    let marker = options
        .length_marker
        .map(|c| c.to_string())
        .unwrap_or_default();
    let mut header = format!("[{}{}{}]", marker, len, options.delimiter.header_str());
    if let Some(fields) = fields {
        header.push('{');
        header.push_str(&fields.join(options.delimiter.as_char().to_string().as_str()));
        header.push('}');
    }
    header.push(':');
    header
}

/// Returns `true` if every element is a scalar (so the array can be written
/// as a single inline row rather than a multi-line list).
fn is_flat_scalars(items: &[Value]) -> bool {
    items
        .iter()
        .all(|v| !matches!(v, Value::Array(_) | Value::Object(_)))
}

/// If every element is a non-empty object sharing the same keys in the same
/// order, returns those keys so the array can be written in tabular form.
fn tabular_fields(items: &[Value]) -> Option<Vec<String>> {
    if items.is_empty() {
        return None;
    }
    let first = match &items[0] {
        Value::Object(obj) if !obj.is_empty() => obj,
        _ => return None,
    };
    let keys: Vec<String> = first.keys().cloned().collect();
    if keys
        .iter()
        .any(|k| matches!(first.get(k), Some(Value::Array(_)) | Some(Value::Object(_))))
    {
        return None;
    }

    for item in &items[1..] {
        let obj = match item {
            Value::Object(obj) if !obj.is_empty() => obj,
            _ => return None,
        };
        let item_keys: Vec<&String> = obj.keys().collect();
        if item_keys.len() != keys.len() || item_keys.iter().zip(keys.iter()).any(|(a, b)| *a != b) {
            return None;
        }
        if keys
            .iter()
            .any(|k| matches!(obj.get(k), Some(Value::Array(_)) | Some(Value::Object(_))))
        {
            return None;
        }
    }

    Some(keys)
}

fn write_tabular_rows(
    out: &mut String,
    items: &[Value],
    fields: &[String],
    depth: usize,
    options: &EncodeOptions,
) {
    for item in items {
        indent(out, depth, options);
        if let Value::Object(obj) = item {
            let rendered: Vec<String> = fields
                .iter()
                .map(|f| scalar_token(obj.get(f).unwrap_or(&Value::Null), options.delimiter))
                .collect();
            out.push_str(&rendered.join(&options.delimiter.as_char().to_string()));
        }
        out.push('\n');
    }
}

fn write_list_rows(out: &mut String, items: &[Value], depth: usize, options: &EncodeOptions) {
    let row_depth = depth + 1;
    for item in items {
        indent(out, row_depth, options);
        match item {
            Value::Object(obj) if !obj.is_empty() => {
                out.push_str("-\n");
                write_object(out, obj, row_depth + 1, options);
            }
            Value::Array(nested) => {
                out.push_str("- ");
                let fields = tabular_fields(nested);
                out.push_str(&array_header(nested.len(), fields.clone(), options));
                if let Some(fields) = fields {
                    out.push('\n');
                    write_tabular_rows(out, nested, &fields, row_depth + 1, options);
                } else if is_flat_scalars(nested) {
                    out.push(' ');
                    out.push_str(&join_scalars(nested, options));
                    out.push('\n');
                } else {
                    out.push('\n');
                    write_list_rows(out, nested, row_depth, options);
                }
            }
            scalar => {
                out.push_str("- ");
                out.push_str(&scalar_token(scalar, options.delimiter));
                out.push('\n');
            }
        }
    }
}

fn join_scalars(items: &[Value], options: &EncodeOptions) -> String {
    items
        .iter()
        .map(|v| scalar_token(v, options.delimiter))
        .collect::<Vec<_>>()
        .join(&options.delimiter.as_char().to_string())
}

fn scalar_token(value: &Value, delimiter: Delimiter) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(Number::Integer(i)) => i.to_string(),
        Value::Number(Number::Float(f)) => crate::value::format_float(*f),
        Value::String(s) => {
            if strings::needs_quotes(s, delimiter) {
                strings::quote(s)
            } else {
                s.clone()
            }
        }
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toon;

    #[test]
    fn test_encode_simple_object() {
        let value = toon!({ "name": "Alice", "age": 30 });
        let out = encode(&value, &EncodeOptions::default());
        assert_eq!(out, "name: Alice\nage: 30\n");
    }

    #[test]
    fn test_encode_inline_array() {
        let value = toon!({ "tags": ["admin", "dev"] });
        let out = encode(&value, &EncodeOptions::default());
        assert_eq!(out, "tags[2]: admin,dev\n");
    }

    #[test]
    fn test_encode_tabular_array_preserves_field_order() {
        let mut first = ToonMap::new();
        first.insert("qty".to_string(), Value::from(2));
        first.insert("sku".to_string(), Value::from("A1"));
        let mut second = ToonMap::new();
        second.insert("qty".to_string(), Value::from(5));
        second.insert("sku".to_string(), Value::from("B2"));

        let value = Value::Array(vec![Value::Object(first), Value::Object(second)]);
        let out = encode(&value, &EncodeOptions::default());
        assert!(out.starts_with("[2]{qty,sku}:\n"));
        assert!(out.contains("2,A1"));
    }

    #[test]
    fn test_encode_tab_delimiter_is_literal_tab() {
        let value = toon!({ "tags": ["a", "b"] });
        let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
        let out = encode(&value, &options);
        assert!(out.contains("[2\t]: a\tb"));
        assert!(!out.contains("    "));
    }

    #[test]
    fn test_encode_length_marker() {
        let value = toon!({ "tags": ["a", "b"] });
        let options = EncodeOptions::new().with_length_marker('#');
        let out = encode(&value, &options);
        assert!(out.contains("[#2]"));
    }

    #[test]
    fn test_encode_list_array_with_nested_object() {
        let mut nested = ToonMap::new();
        nested.insert("street".to_string(), Value::from("Main St"));
        let mut row = ToonMap::new();
        row.insert("name".to_string(), Value::from("Alice"));
        row.insert("address".to_string(), Value::Object(nested));

        let value = Value::Array(vec![Value::Object(row)]);
        let out = encode(&value, &EncodeOptions::default());
        assert!(out.contains("-\n"));
        assert!(out.contains("    name: Alice"));
        assert!(out.contains("    address:\n"));
        assert!(out.contains("      street: Main St"));

        let decoded: Value = crate::from_str(&out).unwrap();
        assert_eq!(decoded, value);
    }
}

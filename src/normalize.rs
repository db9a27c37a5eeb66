//! Value tree normalization applied before encoding.
//!
//! `Number::Float` cannot represent `NaN` or `±Infinity` (TOON numbers are
//! always finite decimal literals), but nothing stops a `Serialize` impl
//! from handing the bridge in [`crate::ser`] a non-finite `f64`. This module
//! walks a freshly built [`Value`] tree and replaces any such float with
//! [`Value::Null`], the same way `serde_json` treats non-finite floats as
//! `null`.

use crate::map::ToonMap;
use crate::value::{Number, Value};

/// Recursively replaces non-finite floats with [`Value::Null`].
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Number(Number::Float(f)) if !f.is_finite() => Value::Null,
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::Object(map) => {
            let mut normalized = ToonMap::with_capacity(map.len());
            for (k, v) in map {
                normalized.insert(k, normalize(v));
            }
            Value::Object(normalized)
        }
        other => other,
    }
}

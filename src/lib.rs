//! # toon
//!
//! A Serde-compatible serialization library for the TOON (Token-Oriented
//! Object Notation) format.
//!
//! ## What is TOON?
//!
//! TOON is a compact, line-oriented textual serialization format for
//! JSON-equivalent data: the same objects, arrays, strings, numbers, booleans
//! and null that JSON represents, written with far less syntactic overhead.
//! It is designed for contexts — like prompts sent to Large Language Models —
//! where every token has a cost.
//!
//! ## Key Features
//!
//! - **Token-efficient**: minimal syntax eliminates unnecessary braces,
//!   brackets, and quotes
//! - **Tabular arrays**: homogeneous object arrays serialize as compact
//!   tables with a single shared header
//! - **Serde compatible**: works with existing Rust types via
//!   `#[derive(Serialize, Deserialize)]`
//! - **Arbitrary-precision integers**: integers round-trip exactly regardless
//!   of magnitude, backed by [`Number::Integer`]
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! toon = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization and Deserialization
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon::{to_string, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let toon_string = to_string(&user).unwrap();
//! // "id: 123\nname: Alice\nactive: true\n"
//!
//! let user_back: User = from_str(&toon_string).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Working with Arrays (Tabular Format)
//!
//! Arrays of homogeneous objects automatically serialize as space-efficient
//! tables:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon::to_string;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Product {
//!     id: u32,
//!     name: String,
//!     price: f64,
//! }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string(), price: 9.99 },
//!     Product { id: 2, name: "Gadget".to_string(), price: 14.99 },
//! ];
//!
//! let toon = to_string(&products).unwrap();
//! // "[2]{id,name,price}:\n  1,Widget,9.99\n  2,Gadget,14.99\n"
//! ```
//!
//! ### Dynamic Values with the `toon!` Macro
//!
//! ```rust
//! use toon::{toon, Value};
//!
//! let data = toon!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde", "llm"]
//! });
//!
//! if let Value::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Architecture
//!
//! Encoding and decoding each run in two stages:
//!
//! - Encoding: [`ser::ValueSerializer`] turns a `Serialize` value into a
//!   [`Value`] tree, [`normalize`] strips non-finite floats, then
//!   [`encoder::encode`] turns the tree into TOON text.
//! - Decoding: [`decoder::decode`] turns TOON text into a [`Value`] tree
//!   (via [`lexer`], [`scanner`], [`header`], and [`strings`]), then
//!   [`de::ValueDeserializer`] drives that tree into a `Deserialize` type.
//!
//! [`to_value`] and [`from_value`] expose the middle [`Value`] tree directly,
//! for callers who want to inspect or build data dynamically.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code
//! - All array indexing is bounds-checked
//! - Proper error propagation with `Result` types

pub mod de;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod header;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod normalize;
pub mod options;
pub mod scanner;
pub mod ser;
pub mod strings;
pub mod value;

pub use de::ValueDeserializer;
pub use error::{Error, ErrorKind, Result};
pub use map::ToonMap;
pub use options::{DecodeOptions, Delimiter, EncodeOptions};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::{Deserialize, Serialize};
use std::io;

/// Serializes `value` to a TOON string using default options.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g. a tuple or
/// struct enum variant, or a map key that isn't a string).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::default())
}

/// Serializes `value` to a TOON string using [`EncodeOptions::pretty`].
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::new().pretty())
}

/// Serializes `value` to a TOON string with custom `options`.
///
/// # Examples
///
/// ```rust
/// use toon::{to_string_with_options, EncodeOptions, Delimiter};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let options = EncodeOptions::new()
///     .with_delimiter(Delimiter::Tab)
///     .with_length_marker('#');
/// let toon = to_string_with_options(&point, options).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    ser::to_string_with_options(value, options)
}

/// Serializes `value` to a [`Value`] tree without encoding it to text.
///
/// Useful for working with TOON data dynamically when the structure isn't
/// known at compile time.
///
/// # Examples
///
/// ```rust
/// use toon::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value = to_value(&point).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}

/// Serializes `value` to a writer in TOON format, using default options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EncodeOptions::default())
}

/// Serializes `value` to a writer in TOON format with custom `options`.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let toon_string = to_string_with_options(value, options)?;
    writer.write_all(toon_string.as_bytes())?;
    Ok(())
}

/// Deserializes an instance of type `T` from a string of TOON text, using
/// default (strict) [`DecodeOptions`].
///
/// # Examples
///
/// ```rust
/// use toon::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let toon = "x: 1\ny: 2";
/// let point: Point = from_str(toon).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid TOON, or cannot be
/// deserialized to type `T`. Decode errors carry line and column
/// information via [`Error::kind`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    from_str_with_options(s, &DecodeOptions::default())
}

/// Deserializes an instance of type `T` from a string of TOON text, using
/// custom `options`.
///
/// # Examples
///
/// ```rust
/// use toon::{from_str_with_options, DecodeOptions};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let toon = "x: 1\ny: 2";
/// let point: Point = from_str_with_options(toon, &DecodeOptions::new().lenient()).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid TOON, or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: &DecodeOptions) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    de::from_str_with_options(s, options)
}

/// Deserializes an instance of type `T` from an already-parsed [`Value`]
/// tree.
///
/// # Errors
///
/// Returns an error if the tree's shape doesn't match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    de::from_value(value)
}

/// Deserializes an instance of type `T` from an I/O stream of TOON, using
/// default (strict) [`DecodeOptions`].
///
/// # Examples
///
/// ```rust
/// use toon::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let toon_bytes = b"x: 1\ny: 2";
/// let cursor = Cursor::new(toon_bytes);
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not
/// valid TOON, or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    from_reader_with_options(reader, &DecodeOptions::default())
}

/// Deserializes an instance of type `T` from an I/O stream of TOON, using
/// custom `options`.
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not
/// valid TOON, or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader_with_options<R, T>(mut reader: R, options: &DecodeOptions) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    from_str_with_options(&string, options)
}

/// Deserializes an instance of type `T` from bytes of TOON text, using
/// default (strict) [`DecodeOptions`].
///
/// # Examples
///
/// ```rust
/// use toon::from_slice;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let toon_bytes = b"x: 1\ny: 2";
/// let point: Point = from_slice(toon_bytes).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid TOON, or
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::message(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let toon = to_string(&point).unwrap();
        let point_back: Point = from_str(&toon).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let toon = to_string(&user).unwrap();
        let user_back: User = from_str(&toon).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_pretty_printing_round_trips() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let toon = to_string_pretty(&user).unwrap();
        let user_back: User = from_str(&toon).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_to_value() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("x").unwrap().as_i64(), Some(1));
        assert_eq!(obj.get("y").unwrap().as_i64(), Some(2));
    }

    #[test]
    fn test_from_value_round_trips_to_value() {
        let point = Point { x: 1, y: 2 };
        let value = to_value(&point).unwrap();
        let point_back: Point = from_value(value).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_arrays() {
        let numbers = vec![1, 2, 3, 4, 5];
        let toon = to_string(&numbers).unwrap();
        let numbers_back: Vec<i32> = from_str(&toon).unwrap();
        assert_eq!(numbers, numbers_back);
    }

    #[test]
    fn test_custom_options_round_trip() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let options = EncodeOptions::new()
            .with_delimiter(Delimiter::Tab)
            .with_length_marker('#');

        let toon = to_string_with_options(&user, options).unwrap();
        let user_back: User = from_str(&toon).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_from_str_lenient_allows_length_mismatch() {
        let value: Vec<i32> =
            from_str_with_options("[3]: 1,2", &DecodeOptions::new().lenient()).unwrap();
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn test_to_writer_and_from_reader_round_trip() {
        let point = Point { x: 1, y: 2 };
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &point).unwrap();
        let point_back: Point = from_reader(buffer.as_slice()).unwrap();
        assert_eq!(point, point_back);
    }
}

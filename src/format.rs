//! TOON Format Reference
//!
//! This module documents the TOON (Token-Oriented Object Notation) format as
//! implemented by this library. It has no runtime behavior; see
//! [`crate::decoder`] and [`crate::encoder`] for the actual grammar
//! implementation.
//!
//! # Overview
//!
//! TOON is a compact, line-oriented textual serialization format for
//! JSON-equivalent data, designed to reduce token usage when data is sent to
//! Large Language Models while remaining human-readable.
//!
//! ## Design Philosophy
//!
//! - **Token efficiency**: eliminate syntactic overhead (braces, brackets,
//!   redundant quotes)
//! - **Readability**: maintain clarity through indentation and structure
//! - **Structural typing**: leverage homogeneous data patterns for tabular
//!   compression
//!
//! # Core Syntax
//!
//! ## Objects
//!
//! Objects use newline-delimited key-value pairs with colon separation:
//!
//! ```text
//! name: Alice
//! age: 30
//! active: true
//! ```
//!
//! **Rules**:
//! - Keys must match the identifier pattern `/^[a-zA-Z_][a-zA-Z0-9_.]*$/` or
//!   be quoted: start with a letter or underscore, then only letters,
//!   digits, underscores, or dots. Keys starting with digits or containing
//!   hyphens must be quoted: `"2ndPlace"`, `"user-id"`.
//! - Values follow the `:` separator (a single space after `:` is
//!   conventional but optional).
//! - Nested objects are indented (2 spaces per level).
//! - Field order is preserved exactly as given to the encoder — this
//!   implementation never reorders keys.
//!
//! ## Primitives
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Null | `null` | `value: null` |
//! | Boolean | `true` or `false` | `active: true` |
//! | Integer | Decimal digits, optional `-`, arbitrary precision | `count: 42` |
//! | Float | Decimal with `.`, always finite | `price: 19.99` |
//! | String | Unquoted or `"quoted"` | `name: Alice` |
//!
//! `NaN` and `±Infinity` cannot appear in TOON output: they are normalized to
//! `null` before encoding (see [`crate::normalize`]), mirroring how
//! `serde_json` treats non-finite floats.
//!
//! ## Strings
//!
//! Strings are **unquoted by default** to minimize tokens. Quoting is
//! required when a string:
//!
//! - is empty or contains only whitespace
//! - contains the active delimiter for its context (comma by default, or tab
//!   / pipe when configured — other delimiters remain safe unquoted)
//! - contains a colon, quote, backslash, bracket, brace, `#`, or any control
//!   character (U+0000..U+001F)
//! - starts or ends with whitespace
//! - matches a reserved word: `true`, `false`, `null`
//! - parses as a number (would be ambiguous on decode): `"42"`, `"-3.14"`
//! - starts with `-` (would look like a list item marker or a negative number)
//!
//! **Escape sequences** recognized inside quoted strings: `\\`, `\"`, `\n`,
//! `\t`, `\r`, `\b`, `\f`. There is no `\uXXXX` escape — a `\` followed by
//! anything else is a decode error.
//!
//! # Array Formats
//!
//! TOON uses three array formats depending on content shape.
//!
//! ## Inline Arrays
//!
//! For arrays of primitive values:
//!
//! ```text
//! [3]: 1,2,3
//! [2]: Alice,Bob
//! [4]: true,false,null,42
//! ```
//!
//! `[N]: element1,element2,...` — `N` is the declared length, elements are
//! delimiter-separated.
//!
//! ## List Arrays
//!
//! For heterogeneous or complex elements:
//!
//! ```text
//! [2]:
//!   -
//!     name: Alice
//!     role: admin
//!   -
//!     name: Bob
//!     role: user
//! ```
//!
//! A scalar item shares its line with the dash (`- 42`), as does a nested
//! array (`- [2]: a,b`). An object item puts `-` alone on its line, with the
//! object itself written one level deeper:
//!
//! ```text
//! [1]:
//!   -
//!     a:
//!       b: "123"
//! ```
//!
//! ## Tabular Arrays
//!
//! For arrays of objects that all share the same fields, in the same order,
//! with only primitive values — TOON's signature compression:
//!
//! ```text
//! [3]{id,name,price}:
//!   1,Widget,9.99
//!   2,Gadget,14.99
//!   3,Tool,19.99
//! ```
//!
//! `[N]{field1,field2,...}:` followed by one delimiter-separated row per
//! line. Field order in the header is the insertion order of the first
//! element's keys — never alphabetically sorted.
//!
//! # Delimiters
//!
//! | Delimiter | Character | Header encoding |
//! |-----------|-----------|------------------|
//! | Comma (default) | `,` | (none) |
//! | Tab | `\t` | a literal tab byte inside the brackets: `[3\t]` |
//! | Pipe | `\|` | a literal `\|` inside the brackets: `[3\|]` |
//!
//! ```text
//! [3]: 1,2,3       // comma (default)
//! [3|]: 1|2|3      // pipe
//! [3]{a|b|c}:      // pipe-delimited table header
//!   1|2|3
//! ```
//!
//! The tab delimiter is always a literal tab character, never a run of
//! spaces.
//!
//! # Length Markers
//!
//! An optional character may be prefixed to an array's declared length for
//! visual emphasis, e.g. `[#3]: 1,2,3`. It carries no semantic meaning beyond
//! being echoed back on decode.
//!
//! # Indentation
//!
//! Two spaces per nesting level by default. A line's leading whitespace must
//! be a whole multiple of the indent unit and must not mix tabs and spaces;
//! either violation is a decode error.
//!
//! # Edge Cases
//!
//! ```text
//! empty_array: [0]:
//! empty_object:
//! ```
//!
//! A key with no value and nothing indented beneath it decodes to `null`.
//!
//! # Strict vs. Lenient Decoding
//!
//! By default ([`crate::DecodeOptions::default`]) the decoder is strict: a
//! tabular row with the wrong number of fields, an array whose declared
//! length doesn't match its actual element count, or a blank line inside an
//! array body are all decode errors. [`crate::DecodeOptions::lenient`]
//! disables these checks, accepting whatever the rows actually contain.
//!
//! # Rust-Specific Serialization
//!
//! This implementation's handling of Rust enum variants is a library detail,
//! not part of the format itself:
//!
//! - **Unit variants**: serialized as bare strings, e.g. `status: Active`
//! - **Newtype variants**: serialized as a single-key object,
//!   `{ variant_name: inner_value }`
//! - **Tuple and struct variants**: not supported by the serializer
//!
//! # Limitations
//!
//! - Map keys must be strings.
//! - Tabular arrays require identical field order across every element and
//!   exclusively primitive values.
//! - Comments are not supported.

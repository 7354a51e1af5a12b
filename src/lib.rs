//! # json2text
//!
//! Compact, deterministic plain-text rendering of JSON-like value trees,
//! designed for showing structured data to Large Language Models (LLMs) at
//! a fraction of the token cost of JSON.
//!
//! ## What does it do?
//!
//! `json2text` takes a [`JsonValue`] tree — objects, arrays, scalars, null —
//! and renders it as line-oriented text that strips JSON punctuation while
//! preserving the full information content:
//!
//! ```text
//! active true
//! address
//!   city "Oslo"
//!   zip "0150"
//! name "Ada"
//! roles ["admin", "ops"]
//! ```
//!
//! ## Key Features
//!
//! - **Token-Efficient**: drops braces, colons, quoted keys, and separators
//!   wherever the structure stays unambiguous without them
//! - **Deterministic**: identical input and configuration always produce
//!   identical output; keys sort ascending by default
//! - **Robust on hostile input**: ancestor-scoped cycle detection, depth
//!   limiting, per-array/per-string caps, and a hard output-size ceiling
//!   keep the output finite for arbitrary trees
//! - **Serde Compatible**: normalize any `T: Serialize` into the value
//!   model with [`to_value`] or render it directly with [`to_string`]
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! json2text = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Rendering a value tree
//!
//! ```rust
//! use json2text::{serialize, tree};
//!
//! let data = tree!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "llm"]
//! });
//!
//! let text = serialize(&data).unwrap();
//! assert_eq!(text, "age 30\nname \"Alice\"\ntags [\"rust\", \"llm\"]");
//! ```
//!
//! ### Rendering Rust types
//!
//! ```rust
//! use serde::Serialize;
//! use json2text::to_string;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "active true\nid 123\nname \"Alice\"");
//! ```
//!
//! ### Bounding output for untrusted input
//!
//! ```rust
//! use json2text::{serialize_with_config, tree, SerializeConfig};
//!
//! let config = SerializeConfig::new()
//!     .with_max_depth(4)
//!     .with_max_array_items(100)
//!     .with_max_string_length(2_000)
//!     .with_max_chars(20_000);
//!
//! let data = tree!({"payload": [1, 2, 3]});
//! let text = serialize_with_config(&data, &config).unwrap();
//! assert!(text.chars().count() <= 20_000);
//! ```
//!
//! ## Safety mechanisms
//!
//! Anomalies inside the tree never abort a call; they render as local
//! marker tokens (`[Circular reference]`, `[Max depth reached]`, …) while
//! the rest of the tree renders normally. Cycle detection is scoped to the
//! ancestor path, so a shared sub-object referenced from several places
//! renders fully at each site. See the [`format`] module for the complete
//! output format reference.
//!
//! ## Performance Characteristics
//!
//! - **Serialization**: O(n) in the number of rendered nodes
//! - **Memory**: bounded by tree depth and the output buffer; every
//!   dimension of hostile input can be capped via [`SerializeConfig`]
//! - **Purity**: no I/O, no global state; calls on distinct trees are
//!   safe to run concurrently

pub mod budget;
pub mod error;
pub mod escape;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use escape::escape;
pub use map::JsonMap;
pub use options::{ArrayFormat, SerializeConfig, SortKeys};
pub use ser::{
    JsonValueSerializer, Serializer, CIRCULAR_MARKER, DEPTH_MARKER, EMPTY_ARRAY_MARKER,
    EMPTY_OBJECT_MARKER, NODE_LIMIT_MARKER,
};
pub use value::{JsonList, JsonValue, Number};

use serde::Serialize;
use std::io;

/// Renders a value tree to its plain-text form with the default
/// configuration.
///
/// The root must be an object or array; bare scalars are rejected rather
/// than auto-wrapped.
///
/// # Examples
///
/// ```rust
/// use json2text::{serialize, tree};
///
/// let data = tree!({"name": "Alice", "age": 30});
/// assert_eq!(serialize(&data).unwrap(), "age 30\nname \"Alice\"");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when the root is not a container.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize(root: &JsonValue) -> Result<String> {
    serialize_with_config(root, &SerializeConfig::default())
}

/// Renders a value tree to its plain-text form with a custom configuration.
///
/// # Examples
///
/// ```rust
/// use json2text::{serialize_with_config, tree, SerializeConfig, SortKeys};
///
/// let data = tree!({"b": 2, "a": 1});
/// let config = SerializeConfig::new().with_sort_keys(SortKeys::None);
/// assert_eq!(serialize_with_config(&data, &config).unwrap(), "b 2\na 1");
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedConfig`] when the configuration fails
/// validation (checked before any traversal), or [`Error::InvalidInput`]
/// when the root is not a container.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_with_config(root: &JsonValue, config: &SerializeConfig) -> Result<String> {
    Serializer::new(config).serialize(root)
}

/// Normalizes any `T: Serialize` into a [`JsonValue`] tree.
///
/// Useful when the structure isn't known at compile time, or when a tree
/// needs programmatic adjustment before rendering.
///
/// # Examples
///
/// ```rust
/// use json2text::{to_value, JsonValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: JsonValue = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented in the closed value
/// model (e.g. maps with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<JsonValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(JsonValueSerializer)
}

/// Renders any `T: Serialize` to plain text with the default configuration.
///
/// Equivalent to [`to_value`] followed by [`serialize`].
///
/// # Examples
///
/// ```rust
/// use json2text::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, "x 1\ny 2");
/// ```
///
/// # Errors
///
/// Returns an error if normalization fails or the normalized root is not a
/// container.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_config(value, &SerializeConfig::default())
}

/// Renders any `T: Serialize` to plain text with a custom configuration.
///
/// # Errors
///
/// Returns an error if normalization fails, the configuration is invalid,
/// or the normalized root is not a container.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_config<T>(value: &T, config: &SerializeConfig) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    serialize_with_config(&tree, config)
}

/// Renders any `T: Serialize` to a writer with the default configuration.
///
/// # Examples
///
/// ```rust
/// use json2text::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"x 1\ny 2");
/// ```
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
    to_writer_with_config(writer, value, &SerializeConfig::default())
}

/// Renders any `T: Serialize` to a writer with a custom configuration.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_config<W, T>(
    mut writer: W,
    value: &T,
    config: &SerializeConfig,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_config(value, config)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::custom(e.to_string()))?;
    Ok(())
}

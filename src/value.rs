//! Dynamic value representation for JSON-like data.
//!
//! This module provides the [`JsonValue`] enum, the closed set of values the
//! serializer can render, along with [`Number`] (numeric values including the
//! JavaScript-style specials `Infinity`, `-Infinity`, and `NaN`) and
//! [`JsonList`], the shared-handle sequence type.
//!
//! ## Core Types
//!
//! - [`JsonValue`]: any renderable value (null, bool, number, string, array, object)
//! - [`Number`]: integer, float, or special numeric value
//! - [`JsonList`]: an ordered sequence of values with handle semantics
//!
//! ## Sharing model
//!
//! Container variants (`Array`, `Object`) hold cheap-clone handles. Cloning a
//! container value shares the underlying data rather than deep-copying it,
//! so the same sub-tree can legally appear under several parents, and a
//! container can even come to contain itself. The serializer's traversal
//! engine distinguishes those two cases; see
//! [`serialize`](crate::serialize).
//!
//! ## Usage Patterns
//!
//! ```rust
//! use json2text::{tree, JsonValue, Number};
//!
//! // From primitives
//! let null = JsonValue::Null;
//! let boolean = JsonValue::from(true);
//! let number = JsonValue::from(42);
//! let text = JsonValue::from("hello");
//!
//! // Using the tree! macro
//! let obj = tree!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//!
//! // Type checks and extraction
//! assert!(number.is_number());
//! assert_eq!(number.as_i64(), Some(42));
//! ```

use crate::JsonMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A dynamically-typed representation of any renderable value.
///
/// The variant set is closed: no kinds beyond these six exist, and matches on
/// `JsonValue` are exhaustive by construction.
///
/// # Examples
///
/// ```rust
/// use json2text::{JsonValue, Number};
///
/// let null = JsonValue::Null;
/// let num = JsonValue::Number(Number::Integer(42));
/// let text = JsonValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(JsonList),
    Object(JsonMap),
}

/// A numeric value that can be an integer, float, or JavaScript-style
/// special value.
///
/// Upstream data normalized from JavaScript sources can carry `Infinity`,
/// `-Infinity`, and `NaN`; collapsing them to `null` the way common JSON
/// encoders do would silently lose information, so they are first-class here
/// and render under their own names.
///
/// # Examples
///
/// ```rust
/// use json2text::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
/// let infinity = Number::Infinity;
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// assert!(infinity.is_special());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is a special value (Infinity, -Infinity, or NaN).
    ///
    /// `Float` payloads that are themselves non-finite also count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json2text::Number;
    ///
    /// assert!(Number::Infinity.is_special());
    /// assert!(Number::Float(f64::NAN).is_special());
    /// assert!(!Number::Integer(42).is_special());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_special(&self) -> bool {
        match self {
            Number::Infinity | Number::NegativeInfinity | Number::NaN => true,
            Number::Float(f) => !f.is_finite(),
            Number::Integer(_) => false,
        }
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some` for integers and for floats with no fractional part
    /// that fit in `i64` range. Returns `None` for special values and
    /// out-of-range floats.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`.
    ///
    /// Always succeeds; special values map to their `f64` counterparts.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl fmt::Display for Number {
    /// Formats per the output contract: `NaN`, `Infinity`, `-Infinity` under
    /// their own names, `-0` for negative zero, shortest round-trip decimal
    /// otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if *fl == f64::INFINITY {
                    write!(f, "Infinity")
                } else if *fl == f64::NEG_INFINITY {
                    write!(f, "-Infinity")
                } else {
                    // Rust's f64 Display is already shortest-round-trip and
                    // prints -0.0 as "-0".
                    write!(f, "{}", fl)
                }
            }
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// An ordered sequence of values, with handle semantics.
///
/// Like [`JsonMap`], cloning a `JsonList` shares the underlying vector.
///
/// # Examples
///
/// ```rust
/// use json2text::{JsonList, JsonValue};
///
/// let mut list = JsonList::new();
/// list.push(JsonValue::from(1));
/// list.push(JsonValue::from(2));
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct JsonList {
    inner: Rc<RefCell<Vec<JsonValue>>>,
}

impl JsonList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        JsonList {
            inner: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Creates an empty list with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonList {
            inner: Rc::new(RefCell::new(Vec::with_capacity(capacity))),
        }
    }

    /// Appends a value to the end of the list.
    pub fn push(&mut self, value: JsonValue) {
        self.inner.borrow_mut().push(value);
    }

    /// Returns a clone of the value at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<JsonValue> {
        self.inner.borrow().get(index).cloned()
    }

    /// Returns the number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` if the list contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Returns the items of the list as a snapshot.
    #[must_use]
    pub fn items(&self) -> Vec<JsonValue> {
        self.inner.borrow().clone()
    }

    /// Runs `f` with mutable access to the underlying vector.
    ///
    /// Panics if the list is currently borrowed.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Vec<JsonValue>) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    /// Address of the shared allocation; node identity for cycle detection.
    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }

    /// Returns `true` if `self` and `other` are handles to the same list.
    #[must_use]
    pub fn same_list(&self, other: &JsonList) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for JsonList {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner) || *self.inner.borrow() == *other.inner.borrow()
    }
}

impl fmt::Debug for JsonList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.borrow().iter()).finish()
    }
}

impl From<Vec<JsonValue>> for JsonList {
    fn from(values: Vec<JsonValue>) -> Self {
        JsonList {
            inner: Rc::new(RefCell::new(values)),
        }
    }
}

impl FromIterator<JsonValue> for JsonList {
    fn from_iter<T: IntoIterator<Item = JsonValue>>(iter: T) -> Self {
        JsonList::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl IntoIterator for JsonList {
    type Item = JsonValue;
    type IntoIter = std::vec::IntoIter<JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items().into_iter()
    }
}

impl JsonValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns `true` if the value is not a container (null, bool, number,
    /// or string).
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an i64 integer or a whole-number float, returns it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns its `f64` form. Otherwise returns
    /// `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to its list handle.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&JsonList> {
        match self {
            JsonValue::Array(list) => Some(list),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to its map handle.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of this value's kind, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "bool",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}

impl Serialize for JsonValue {
    /// Serde interop. Trees containing reference cycles must not be passed
    /// through serde; use [`serialize`](crate::serialize), which recovers
    /// from cycles.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            JsonValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            JsonValue::Number(Number::Infinity) => serializer.serialize_f64(f64::INFINITY),
            JsonValue::Number(Number::NegativeInfinity) => {
                serializer.serialize_f64(f64::NEG_INFINITY)
            }
            JsonValue::Number(Number::NaN) => serializer.serialize_f64(f64::NAN),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(list) => {
                use serde::ser::SerializeSeq;
                let items = list.items();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in &items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JsonValue::Object(map) => {
                use serde::ser::SerializeMap;
                let entries = map.entries();
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in &entries {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JsonValueVisitor;

        impl<'de> Visitor<'de> for JsonValueVisitor {
            type Value = JsonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON-compatible value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(JsonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(JsonValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(JsonValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(JsonValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(JsonValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(JsonValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(JsonValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(JsonValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(JsonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(JsonValue::Array(JsonList::from(vec)))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = JsonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(JsonValue::Object(values))
            }
        }

        deserializer.deserialize_any(JsonValueVisitor)
    }
}

// TryFrom implementations for extracting values from JsonValue
impl TryFrom<JsonValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Number(Number::Integer(i)) => Ok(i),
            JsonValue::Number(Number::Float(f)) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(crate::Error::custom(format!(
                        "cannot convert float {} to i64",
                        f
                    )))
                }
            }
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<JsonValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<JsonValue> for bool {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<JsonValue> for String {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value.kind()
            ))),
        }
    }
}

// From implementations for creating JsonValue from primitives
impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i8> for JsonValue {
    fn from(value: i8) -> Self {
        JsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for JsonValue {
    fn from(value: i16) -> Self {
        JsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(Number::Integer(value))
    }
}

impl From<u8> for JsonValue {
    fn from(value: u8) -> Self {
        JsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for JsonValue {
    fn from(value: u16) -> Self {
        JsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for JsonValue {
    fn from(value: u32) -> Self {
        JsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        JsonValue::Number(Number::Float(value as f64))
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(Number::Float(value))
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(JsonList::from(value))
    }
}

impl From<JsonList> for JsonValue {
    fn from(value: JsonList) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonMap> for JsonValue {
    fn from(value: JsonMap) -> Self {
        JsonValue::Object(value)
    }
}

//! Ordered map type for object values.
//!
//! This module provides [`JsonMap`], an insertion-ordered map of string keys
//! to [`JsonValue`](crate::JsonValue)s built on [`IndexMap`].
//!
//! ## Why IndexMap?
//!
//! `json2text` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: fields serialize in a consistent order
//! - **Insertion order**: preserved for the `SortKeys::None` ordering mode
//! - **Compatibility**: predictable output makes testing and debugging easier
//!
//! ## Reference semantics
//!
//! A `JsonMap` is a cheap-clone *handle*: cloning it yields a second handle
//! to the same underlying map, not a deep copy. This is what lets one
//! sub-object appear under several parents (aliasing) and lets a map
//! transitively contain itself (a reference cycle) — the two input shapes
//! the serializer's ancestor tracking exists to tell apart.
//!
//! ## Examples
//!
//! ```rust
//! use json2text::{JsonMap, JsonValue};
//!
//! let mut map = JsonMap::new();
//! map.insert("name".to_string(), JsonValue::from("Alice"));
//! map.insert("age".to_string(), JsonValue::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str().map(String::from)), Some("Alice".to_string()));
//!
//! // Clones share the underlying map.
//! let alias = map.clone();
//! alias.with_mut(|m| { m.insert("role".to_string(), JsonValue::from("admin")); });
//! assert_eq!(map.len(), 3);
//! ```

use crate::JsonValue;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// An insertion-ordered map of string keys to values, with handle semantics.
///
/// See the [module docs](self) for the sharing model.
///
/// # Examples
///
/// ```rust
/// use json2text::{JsonMap, JsonValue};
///
/// let mut map = JsonMap::new();
/// map.insert("first".to_string(), JsonValue::from(1));
/// map.insert("second".to_string(), JsonValue::from(2));
///
/// // Iteration snapshots maintain insertion order.
/// assert_eq!(map.keys(), vec!["first".to_string(), "second".to_string()]);
/// ```
#[derive(Clone, Default)]
pub struct JsonMap {
    inner: Rc<RefCell<IndexMap<String, JsonValue>>>,
}

impl JsonMap {
    /// Creates an empty `JsonMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json2text::JsonMap;
    ///
    /// let map = JsonMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        JsonMap {
            inner: Rc::new(RefCell::new(IndexMap::new())),
        }
    }

    /// Creates an empty `JsonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonMap {
            inner: Rc::new(RefCell::new(IndexMap::with_capacity(capacity))),
        }
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json2text::{JsonMap, JsonValue};
    ///
    /// let mut map = JsonMap::new();
    /// assert!(map.insert("key".to_string(), JsonValue::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), JsonValue::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: JsonValue) -> Option<JsonValue> {
        self.inner.borrow_mut().insert(key, value)
    }

    /// Returns a clone of the value corresponding to the key.
    ///
    /// Container values clone as handles, so the returned value still refers
    /// to the same underlying data.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<JsonValue> {
        self.inner.borrow().get(key).cloned()
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.borrow().contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Returns the keys of the map as a snapshot, in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.inner.borrow().keys().cloned().collect()
    }

    /// Returns the entries of the map as a snapshot, in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, JsonValue)> {
        self.inner
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Runs `f` with mutable access to the underlying map.
    ///
    /// Panics if the map is currently borrowed, e.g. from inside a
    /// serialization of a tree containing it.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut IndexMap<String, JsonValue>) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    /// Address of the shared allocation; used as the node identity for
    /// ancestor-scoped cycle detection.
    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }

    /// Returns `true` if `self` and `other` are handles to the same map.
    #[must_use]
    pub fn same_map(&self, other: &JsonMap) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for JsonMap {
    fn eq(&self, other: &Self) -> bool {
        // Identity short-circuit also keeps equality on self-referencing
        // maps from recursing forever.
        Rc::ptr_eq(&self.inner, &other.inner) || *self.inner.borrow() == *other.inner.borrow()
    }
}

impl fmt::Debug for JsonMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.borrow().iter()).finish()
    }
}

impl From<IndexMap<String, JsonValue>> for JsonMap {
    fn from(map: IndexMap<String, JsonValue>) -> Self {
        JsonMap {
            inner: Rc::new(RefCell::new(map)),
        }
    }
}

impl From<HashMap<String, JsonValue>> for JsonMap {
    fn from(map: HashMap<String, JsonValue>) -> Self {
        JsonMap::from(map.into_iter().collect::<IndexMap<_, _>>())
    }
}

impl IntoIterator for JsonMap {
    type Item = (String, JsonValue);
    type IntoIter = std::vec::IntoIter<(String, JsonValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries().into_iter()
    }
}

impl FromIterator<(String, JsonValue)> for JsonMap {
    fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
        JsonMap::from(iter.into_iter().collect::<IndexMap<_, _>>())
    }
}

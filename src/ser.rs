//! Plain-text serialization.
//!
//! This module provides the [`Serializer`] that walks a
//! [`JsonValue`](crate::JsonValue) tree and composes its compact text
//! rendering, plus [`JsonValueSerializer`], the `serde::Serializer`
//! implementation behind [`to_value`](crate::to_value).
//!
//! ## Overview
//!
//! The walk is depth-first and purely recursive. At every node it consults
//! the [`SerializeConfig`](crate::SerializeConfig) for the rendering choice:
//!
//! - **Arrays**: single-line brackets when every kept item is a scalar,
//!   indented block otherwise
//! - **Objects**: one `key value` line per entry, nested blocks for
//!   container values
//! - **Filtering**: `Null` entries dropped under `ignore_falsy`
//! - **Safety**: ancestor-scoped cycle detection, depth limiting, per-array
//!   and per-string caps, an optional node-count ceiling
//!
//! Anomalies render as marker tokens in place; they never abort the call.
//!
//! ## Usage
//!
//! Most users should use the crate-root functions:
//!
//! ```rust
//! use json2text::{serialize, tree};
//!
//! let data = tree!({"name": "Alice", "age": 30});
//! assert_eq!(serialize(&data).unwrap(), "age 30\nname \"Alice\"");
//! ```
//!
//! ## Direct serializer usage
//!
//! ```rust
//! use json2text::{tree, SerializeConfig, Serializer};
//!
//! let config = SerializeConfig::new().with_max_chars(4000);
//! let data = tree!({"items": [1, 2, 3]});
//! let text = Serializer::new(&config).serialize(&data).unwrap();
//! assert_eq!(text, "items [1, 2, 3]");
//! ```

use crate::budget::apply_budget;
use crate::escape::escape;
use crate::{
    ArrayFormat, Error, JsonList, JsonMap, JsonValue, Number, Result, SerializeConfig, SortKeys,
};
use serde::{ser, Serialize};

/// Rendered in place of a container that is its own ancestor.
pub const CIRCULAR_MARKER: &str = "[Circular reference]";
/// Rendered in place of a container nested beyond `max_depth`.
pub const DEPTH_MARKER: &str = "[Max depth reached]";
/// Rendered in place of nodes past the `max_nodes` ceiling.
pub const NODE_LIMIT_MARKER: &str = "[Node limit reached]";
/// Rendered for an array with no items left after filtering.
pub const EMPTY_ARRAY_MARKER: &str = "EmptyArray";
/// Rendered for an object with no entries left after filtering.
pub const EMPTY_OBJECT_MARKER: &str = "EmptyObject";

/// Marker appended inside a string literal cut at `max_string_length`.
const STRING_TRUNCATED_MARKER: &str = "… [truncated]";

fn is_marker(rendered: &str) -> bool {
    matches!(
        rendered,
        CIRCULAR_MARKER | DEPTH_MARKER | NODE_LIMIT_MARKER | EMPTY_ARRAY_MARKER
            | EMPTY_OBJECT_MARKER
    )
}

enum Layout {
    Brackets,
    Block,
}

/// The plain-text serializer.
///
/// Holds the configuration plus the per-call traversal state: the ancestor
/// identity stack used for cycle detection and the visited-node counter.
/// One `Serializer` serves exactly one call; nothing is shared between
/// calls, so distinct trees may be serialized concurrently.
pub struct Serializer<'a> {
    config: &'a SerializeConfig,
    ancestors: Vec<usize>,
    visited: usize,
}

impl<'a> Serializer<'a> {
    pub fn new(config: &'a SerializeConfig) -> Self {
        Serializer {
            config,
            ancestors: Vec::new(),
            visited: 0,
        }
    }

    /// Renders `root` to its plain-text form.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedConfig`] if the configuration fails validation;
    /// [`Error::InvalidInput`] if `root` is not an object or array.
    pub fn serialize(mut self, root: &JsonValue) -> Result<String> {
        self.config.validate()?;
        if !root.is_array() && !root.is_object() {
            return Err(Error::invalid_input(root.kind()));
        }
        let text = self.format_value(root, 0);
        Ok(apply_budget(text, self.config.max_chars))
    }

    /// One node of the depth-first walk. Scalars render directly; containers
    /// pass the depth and cycle guards before expanding at `depth + 1`.
    fn format_value(&mut self, value: &JsonValue, depth: usize) -> String {
        if self.note_node() {
            return NODE_LIMIT_MARKER.to_string();
        }
        match value {
            JsonValue::Null => "null".to_string(),
            JsonValue::Bool(true) => "true".to_string(),
            JsonValue::Bool(false) => "false".to_string(),
            JsonValue::Number(n) => n.to_string(),
            JsonValue::String(s) => self.format_string(s),
            JsonValue::Array(list) => {
                let id = list.addr();
                if let Some(marker) = self.container_guard(id, depth) {
                    return marker.to_string();
                }
                self.ancestors.push(id);
                let out = self.format_array(list, depth);
                self.ancestors.pop();
                out
            }
            JsonValue::Object(map) => {
                let id = map.addr();
                if let Some(marker) = self.container_guard(id, depth) {
                    return marker.to_string();
                }
                self.ancestors.push(id);
                let out = self.format_object(map, depth);
                self.ancestors.pop();
                out
            }
        }
    }

    /// Depth limit first (no identity lookup needed), then the ancestor
    /// check. The ancestor stack is pushed/popped around descent, which is
    /// what keeps sibling aliasing of one shared sub-tree from being
    /// mistaken for a cycle.
    fn container_guard(&self, id: usize, depth: usize) -> Option<&'static str> {
        if let Some(max) = self.config.max_depth {
            if depth > max {
                return Some(DEPTH_MARKER);
            }
        }
        if self.ancestors.contains(&id) {
            return Some(CIRCULAR_MARKER);
        }
        None
    }

    /// Counts a visited node; returns `true` once past the ceiling.
    fn note_node(&mut self) -> bool {
        self.visited += 1;
        match self.config.max_nodes {
            Some(max) => self.visited > max,
            None => false,
        }
    }

    fn format_string(&self, s: &str) -> String {
        match self.config.max_string_length {
            Some(max) if s.chars().count() > max => {
                let prefix: String = s.chars().take(max).collect();
                format!("\"{}{}\"", escape(&prefix), STRING_TRUNCATED_MARKER)
            }
            _ => format!("\"{}\"", escape(s)),
        }
    }

    /// `Null` items dropped under `ignore_falsy`, then the first
    /// `max_array_items` kept; returns the kept items and the omitted count.
    fn prepared_items(&self, list: &JsonList) -> (Vec<JsonValue>, usize) {
        let mut items = list.items();
        if self.config.ignore_falsy {
            items.retain(|v| !v.is_null());
        }
        match self.config.max_array_items {
            Some(max) if items.len() > max => {
                let omitted = items.len() - max;
                items.truncate(max);
                (items, omitted)
            }
            _ => (items, 0),
        }
    }

    /// `Null` entries dropped under `ignore_falsy`, then ordered per
    /// `sort_keys`. Keys render verbatim.
    fn prepared_entries(&self, map: &JsonMap) -> Vec<(String, JsonValue)> {
        let mut entries = map.entries();
        if self.config.ignore_falsy {
            entries.retain(|(_, v)| !v.is_null());
        }
        match self.config.sort_keys {
            SortKeys::None => {}
            SortKeys::Asc => entries.sort_by(|(a, _), (b, _)| a.cmp(b)),
            SortKeys::Desc => entries.sort_by(|(a, _), (b, _)| b.cmp(a)),
        }
        entries
    }

    fn format_array(&mut self, list: &JsonList, depth: usize) -> String {
        let (kept, omitted) = self.prepared_items(list);
        if kept.is_empty() && omitted == 0 {
            return EMPTY_ARRAY_MARKER.to_string();
        }

        let force_brackets = self.config.array_format == ArrayFormat::Brackets;
        let rendered: Vec<String> = kept
            .iter()
            .map(|item| {
                if force_brackets {
                    self.format_inline(item, depth + 1)
                } else {
                    self.format_value(item, depth + 1)
                }
            })
            .collect();

        let layout = match self.config.array_format {
            ArrayFormat::Brackets => Layout::Brackets,
            ArrayFormat::Indented => Layout::Block,
            ArrayFormat::Auto => {
                let all_bracketable = kept
                    .iter()
                    .zip(&rendered)
                    .all(|(item, r)| item.is_scalar() || is_marker(r));
                if all_bracketable {
                    Layout::Brackets
                } else {
                    Layout::Block
                }
            }
        };

        match layout {
            Layout::Brackets => {
                let mut parts = rendered;
                if omitted > 0 {
                    parts.push(format!("... [{} more items]", omitted));
                }
                format!("[{}]", parts.join(", "))
            }
            Layout::Block => {
                let pad = " ".repeat(self.config.indent);
                let mut lines = vec!["[".to_string()];
                for r in &rendered {
                    for line in r.lines() {
                        lines.push(format!("{}{}", pad, line));
                    }
                }
                if omitted > 0 {
                    lines.push(format!("{}... [{} more items]", pad, omitted));
                }
                lines.push("]".to_string());
                lines.join("\n")
            }
        }
    }

    fn format_object(&mut self, map: &JsonMap, depth: usize) -> String {
        let entries = self.prepared_entries(map);
        if entries.is_empty() {
            return EMPTY_OBJECT_MARKER.to_string();
        }

        let pad = " ".repeat(self.config.indent);
        let mut lines = Vec::with_capacity(entries.len());
        for (key, value) in &entries {
            let rendered = self.format_value(value, depth + 1);
            if Self::entry_fits_inline(value, &rendered) {
                lines.push(format!("{} {}", key, rendered));
            } else {
                lines.push(key.clone());
                for line in rendered.lines() {
                    lines.push(format!("{}{}", pad, line));
                }
            }
        }
        lines.join("\n")
    }

    /// An entry renders as `key value` on one line when the value's
    /// rendering is single-line and is a scalar, a marker token, or a
    /// bracket-form array. A one-entry object is single-line too but still
    /// gets its own block, so object shape stays visible.
    fn entry_fits_inline(value: &JsonValue, rendered: &str) -> bool {
        if rendered.contains('\n') {
            return false;
        }
        value.is_scalar() || is_marker(rendered) || value.is_array()
    }

    /// Single-line rendering, used for items of a forced-brackets array.
    /// Containers compress to `[a, b]` / `{k v}` forms; the cycle, depth,
    /// and node guards still apply.
    fn format_inline(&mut self, value: &JsonValue, depth: usize) -> String {
        if self.note_node() {
            return NODE_LIMIT_MARKER.to_string();
        }
        match value {
            JsonValue::Null => "null".to_string(),
            JsonValue::Bool(true) => "true".to_string(),
            JsonValue::Bool(false) => "false".to_string(),
            JsonValue::Number(n) => n.to_string(),
            JsonValue::String(s) => self.format_string(s),
            JsonValue::Array(list) => {
                let id = list.addr();
                if let Some(marker) = self.container_guard(id, depth) {
                    return marker.to_string();
                }
                self.ancestors.push(id);
                let out = self.inline_array(list, depth);
                self.ancestors.pop();
                out
            }
            JsonValue::Object(map) => {
                let id = map.addr();
                if let Some(marker) = self.container_guard(id, depth) {
                    return marker.to_string();
                }
                self.ancestors.push(id);
                let out = self.inline_object(map, depth);
                self.ancestors.pop();
                out
            }
        }
    }

    fn inline_array(&mut self, list: &JsonList, depth: usize) -> String {
        let (kept, omitted) = self.prepared_items(list);
        if kept.is_empty() && omitted == 0 {
            return EMPTY_ARRAY_MARKER.to_string();
        }
        let mut parts: Vec<String> = kept
            .iter()
            .map(|item| self.format_inline(item, depth + 1))
            .collect();
        if omitted > 0 {
            parts.push(format!("... [{} more items]", omitted));
        }
        format!("[{}]", parts.join(", "))
    }

    fn inline_object(&mut self, map: &JsonMap, depth: usize) -> String {
        let entries = self.prepared_entries(map);
        if entries.is_empty() {
            return EMPTY_OBJECT_MARKER.to_string();
        }
        let parts: Vec<String> = entries
            .iter()
            .map(|(key, value)| format!("{} {}", key, self.format_inline(value, depth + 1)))
            .collect();
        format!("{{{}}}", parts.join(", "))
    }
}

/// A `serde::Serializer` that produces a [`JsonValue`].
///
/// This is the normalization bridge behind [`to_value`](crate::to_value):
/// any `T: Serialize` becomes a tree in the closed value model, which the
/// plain-text serializer then renders.
pub struct JsonValueSerializer;

pub struct SerializeVec {
    vec: Vec<JsonValue>,
}

pub struct SerializeMap {
    map: JsonMap,
    current_key: Option<String>,
}

impl ser::Serializer for JsonValueSerializer {
    type Ok = JsonValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<JsonValue> {
        Ok(JsonValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<JsonValue> {
        if v <= i64::MAX as u64 {
            Ok(JsonValue::Number(Number::Integer(v as i64)))
        } else {
            Ok(JsonValue::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<JsonValue> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<JsonValue> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<JsonValue> {
        let vec: Vec<JsonValue> = v
            .iter()
            .map(|&b| JsonValue::Number(Number::Integer(b as i64)))
            .collect();
        Ok(JsonValue::Array(JsonList::from(vec)))
    }

    fn serialize_none(self) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<JsonValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<JsonValue> {
        Ok(JsonValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<JsonValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<JsonValue>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: JsonMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(normalize(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Array(JsonList::from(self.vec)))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(normalize(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Array(JsonList::from(self.vec)))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(normalize(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Array(JsonList::from(self.vec)))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(normalize(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Array(JsonList::from(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match normalize(key)? {
            JsonValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("Map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, normalize(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), normalize(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), normalize(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Object(self.map))
    }
}

fn normalize<T: Serialize + ?Sized>(value: &T) -> Result<JsonValue> {
    value.serialize(JsonValueSerializer)
}

//! Configuration for plain-text serialization.
//!
//! This module provides the types that control rendering:
//!
//! - [`SerializeConfig`]: main configuration struct
//! - [`SortKeys`]: per-object key ordering mode
//! - [`ArrayFormat`]: array layout mode
//!
//! ## Examples
//!
//! ```rust
//! use json2text::{serialize_with_config, tree, ArrayFormat, SerializeConfig, SortKeys};
//!
//! let data = tree!({
//!     "name": "Alice",
//!     "scores": [1, 2, 3]
//! });
//!
//! let config = SerializeConfig::new()
//!     .with_sort_keys(SortKeys::Desc)
//!     .with_max_chars(2000)
//!     .with_array_format(ArrayFormat::Auto);
//!
//! let text = serialize_with_config(&data, &config).unwrap();
//! assert!(text.starts_with("scores"));
//! ```

use crate::budget::truncation_suffix;
use crate::error::{Error, Result};

/// Key ordering applied to every rendered object.
///
/// Insertion order is preserved under `None`; `Asc`/`Desc` sort keys
/// lexicographically. Ordering affects layout only, never key membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortKeys {
    /// Preserve insertion order.
    None,
    /// Lexicographic ascending (default).
    #[default]
    Asc,
    /// Lexicographic descending.
    Desc,
}

/// Layout selection for arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ArrayFormat {
    /// Brackets for all-scalar arrays, indented block otherwise (default).
    #[default]
    Auto,
    /// Always single-line brackets. Non-scalar items render in a compact
    /// inline form; see the [`format`](crate::format) module.
    Brackets,
    /// Always one item per line in an indented block.
    Indented,
}

/// Configuration for one `serialize` call.
///
/// Immutable once built; the serializer only reads it. All limits are opt-in
/// except `max_depth`, which defaults to 10 as a guard against pathologically
/// deep input.
///
/// # Examples
///
/// ```rust
/// use json2text::SerializeConfig;
///
/// // Defaults: drop nulls, sort keys ascending, depth limit 10.
/// let config = SerializeConfig::new();
/// assert!(config.ignore_falsy);
/// assert_eq!(config.max_depth, Some(10));
///
/// // Fully bounded for hostile input.
/// let config = SerializeConfig::new()
///     .with_max_chars(10_000)
///     .with_max_array_items(50)
///     .with_max_string_length(500)
///     .with_max_nodes(5_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SerializeConfig {
    /// Drop object entries and array items whose value is `Null`.
    pub ignore_falsy: bool,
    /// Containers nested deeper than this render `[Max depth reached]`.
    /// `None` means unbounded.
    pub max_depth: Option<usize>,
    /// Per-object key ordering.
    pub sort_keys: SortKeys,
    /// Hard ceiling on total output length, in characters. `None` means
    /// unbounded.
    pub max_chars: Option<usize>,
    /// Array layout mode.
    pub array_format: ArrayFormat,
    /// Cap on items rendered per array; the excess becomes a count marker.
    pub max_array_items: Option<usize>,
    /// Cap on rendered characters of a single string scalar; the excess
    /// becomes a truncation marker.
    pub max_string_length: Option<usize>,
    /// Spaces per nesting level.
    pub indent: usize,
    /// Ceiling on nodes visited in one call; excess nodes render
    /// `[Node limit reached]`. `None` means unbounded.
    pub max_nodes: Option<usize>,
}

impl Default for SerializeConfig {
    fn default() -> Self {
        SerializeConfig {
            ignore_falsy: true,
            max_depth: Some(10),
            sort_keys: SortKeys::default(),
            max_chars: None,
            array_format: ArrayFormat::default(),
            max_array_items: None,
            max_string_length: None,
            indent: 2,
            max_nodes: None,
        }
    }
}

impl SerializeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether `Null` entries and items are dropped. Default `true`.
    #[must_use]
    pub fn with_ignore_falsy(mut self, ignore_falsy: bool) -> Self {
        self.ignore_falsy = ignore_falsy;
        self
    }

    /// Sets the depth limit. `None` removes it.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: impl Into<Option<usize>>) -> Self {
        self.max_depth = max_depth.into();
        self
    }

    /// Sets the key ordering mode.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: SortKeys) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Sets the output character ceiling.
    #[must_use]
    pub fn with_max_chars(mut self, max_chars: impl Into<Option<usize>>) -> Self {
        self.max_chars = max_chars.into();
        self
    }

    /// Sets the array layout mode.
    #[must_use]
    pub fn with_array_format(mut self, array_format: ArrayFormat) -> Self {
        self.array_format = array_format;
        self
    }

    /// Sets the per-array item cap.
    #[must_use]
    pub fn with_max_array_items(mut self, max_array_items: impl Into<Option<usize>>) -> Self {
        self.max_array_items = max_array_items.into();
        self
    }

    /// Sets the per-string length cap.
    #[must_use]
    pub fn with_max_string_length(mut self, max_string_length: impl Into<Option<usize>>) -> Self {
        self.max_string_length = max_string_length.into();
        self
    }

    /// Sets the indentation width. Must be at least 1.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the per-call node ceiling.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: impl Into<Option<usize>>) -> Self {
        self.max_nodes = max_nodes.into();
        self
    }

    /// Checks every field against its valid domain.
    ///
    /// Called by `serialize` before traversal starts; out-of-domain values
    /// are rejected, never clamped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedConfig`] when `indent` is zero or
    /// `max_chars` is too small to hold its own truncation suffix.
    pub fn validate(&self) -> Result<()> {
        if self.indent == 0 {
            return Err(Error::malformed_config("indent must be at least 1"));
        }
        if let Some(max) = self.max_chars {
            let needed = truncation_suffix(max).chars().count();
            if max < needed {
                return Err(Error::malformed_config(&format!(
                    "max_chars {} cannot hold the {}-char truncation suffix",
                    max, needed
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SerializeConfig::default();
        assert!(config.ignore_falsy);
        assert_eq!(config.max_depth, Some(10));
        assert_eq!(config.sort_keys, SortKeys::Asc);
        assert_eq!(config.max_chars, None);
        assert_eq!(config.array_format, ArrayFormat::Auto);
        assert_eq!(config.indent, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = SerializeConfig::new()
            .with_ignore_falsy(false)
            .with_max_depth(None)
            .with_sort_keys(SortKeys::None)
            .with_max_chars(100)
            .with_array_format(ArrayFormat::Indented)
            .with_max_array_items(5)
            .with_max_string_length(20)
            .with_indent(4)
            .with_max_nodes(1000);
        assert!(!config.ignore_falsy);
        assert_eq!(config.max_depth, None);
        assert_eq!(config.max_array_items, Some(5));
        assert_eq!(config.indent, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_indent() {
        let config = SerializeConfig::new().with_indent(0);
        assert!(matches!(
            config.validate(),
            Err(Error::MalformedConfig { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_impossible_max_chars() {
        // Far too small to ever hold the truncation suffix.
        let config = SerializeConfig::new().with_max_chars(5);
        assert!(matches!(
            config.validate(),
            Err(Error::MalformedConfig { .. })
        ));
    }
}

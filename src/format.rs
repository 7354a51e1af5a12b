//! Output Format Reference
//!
//! This module documents the plain-text format emitted by
//! [`serialize`](crate::serialize).
//!
//! # Overview
//!
//! The format is a compact, deterministic, line-oriented rendering of
//! JSON-compatible data. It strips the punctuation JSON spends tokens on —
//! braces, colons, quoted keys, commas between object entries — while
//! keeping the full information content, so structured data can be shown to
//! a language model at a fraction of the token cost.
//!
//! ## Design Philosophy
//!
//! - **Token efficiency**: syntax overhead is dropped wherever the structure
//!   stays unambiguous without it
//! - **Determinism**: identical input and configuration always produce
//!   identical output (keys sort ascending by default)
//! - **Bounded output**: depth, array, string, node, and total-size limits
//!   guarantee finite output on any input, hostile trees included
//!
//! # Objects
//!
//! One entry per line, `key value`, no separator punctuation. Keys render
//! verbatim; they are never translated or quoted.
//!
//! ```text
//! age 30
//! name "Alice"
//! ```
//!
//! An entry whose value renders on multiple lines puts the key on its own
//! line with the value block indented beneath it (2 spaces per level by
//! default):
//!
//! ```text
//! user
//!   age 30
//!   name "Alice"
//! ```
//!
//! Entries whose value is `null` are dropped entirely under the default
//! `ignore_falsy` configuration — they do not render as `key null`.
//!
//! # Scalars
//!
//! | Type | Rendering |
//! |------|-----------|
//! | Null | `null` (where not dropped) |
//! | Boolean | `true` / `false` |
//! | Integer | decimal digits, optional `-` |
//! | Float | shortest round-trip decimal; `-0` keeps its sign |
//! | Special numbers | `NaN`, `Infinity`, `-Infinity` — never collapsed to `null` |
//! | String | double-quoted, escaped (see below) |
//!
//! # Strings
//!
//! Strings are always double-quoted and kept single-line by escaping:
//!
//! ```text
//! \\  \"  \n  \r  \t  \b  \f  \v  \0
//! ```
//!
//! Any other character below 0x20, and DEL (0x7F), renders as `\xHH` with
//! two lowercase hex digits. Printable Unicode passes through unescaped.
//!
//! A string longer than the configured `max_string_length` is cut on a
//! character boundary and ends with `… [truncated]` inside the quotes.
//!
//! # Arrays
//!
//! Two layouts, selected per array:
//!
//! **Brackets** — all kept items are scalars (or single-token markers):
//!
//! ```text
//! [1, 2, 3]
//! ["alpha", "beta"]
//! ```
//!
//! **Indented block** — any kept item is a container:
//!
//! ```text
//! [
//!   a 1
//!   b 2
//! ]
//! ```
//!
//! The opening and closing brackets sit at the array's own indentation;
//! items are indented one level deeper. `array_format` can force either
//! layout. Under forced brackets, container items compress to a single-line
//! form (`{a 1, b 2}` / nested `[…]`) — a documented limitation that keeps
//! the output single-line rather than silently corrupting it.
//!
//! An array with more kept items than `max_array_items` renders the first
//! N and then a count marker stating exactly how many were omitted:
//!
//! ```text
//! [1, 2, ... [7 more items]]
//! ```
//!
//! # Marker tokens
//!
//! | Marker | Meaning |
//! |--------|---------|
//! | `EmptyArray` | array with no items left after filtering |
//! | `EmptyObject` | object with no entries left after filtering |
//! | `[Circular reference]` | container that is its own ancestor |
//! | `[Max depth reached]` | container nested beyond `max_depth` |
//! | `[Node limit reached]` | node past the optional `max_nodes` ceiling |
//! | `... [N more items]` | items omitted by `max_array_items` |
//! | `… [truncated]` | string cut by `max_string_length` |
//! | `[Output truncated at N chars]` | output cut by `max_chars` |
//!
//! Markers are local: one anomalous branch renders as its marker while the
//! rest of the tree renders normally.
//!
//! # Cycles vs. aliasing
//!
//! Cycle detection is scoped to the ancestor path, not to everything seen
//! so far. The same sub-object appearing under two sibling keys renders
//! fully both times; only a container that transitively contains *itself*
//! renders as `[Circular reference]`.
//!
//! # Size ceiling
//!
//! With `max_chars` set, output never exceeds it: an over-budget rendering
//! is cut to exactly `max_chars` characters, ending with the intact
//! `[Output truncated at N chars]` marker on its own line.
//!
//! # Example
//!
//! **JSON** (108 chars):
//!
//! ```json
//! {"name":"Ada","active":true,"roles":["admin","ops"],"manager":null,"address":{"city":"Oslo","zip":"0150"}}
//! ```
//!
//! **Plain text** (68 chars):
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
//! # Limitations
//!
//! - Object keys must be strings
//! - The format is one-way: there is no parser back to JSON
//! - Key order in the output follows the configured `sort_keys` mode, not
//!   necessarily the input order

// This module contains only documentation; no implementation code

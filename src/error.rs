//! Error types for plain-text serialization.
//!
//! The serializer keeps its failure surface small and typed:
//!
//! - **Invalid input**: the root value is not a container (object or array)
//! - **Malformed config**: a [`SerializeConfig`](crate::SerializeConfig)
//!   field is outside its valid domain
//!
//! Anomalies *inside* the tree — reference cycles, excessive depth, oversized
//! arrays — are never errors. They are recovered locally during traversal and
//! show up as marker tokens in the output, so one poisoned branch cannot
//! destroy an otherwise useful rendering.
//!
//! ## Examples
//!
//! ```rust
//! use json2text::{serialize, Error, JsonValue};
//!
//! // Bare scalars are not accepted at the root.
//! let result = serialize(&JsonValue::from(42));
//! assert!(matches!(result, Err(Error::InvalidInput { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The root value handed to `serialize` is not an object or array.
    #[error("invalid input: expected an object or array at the root, found {found}")]
    InvalidInput {
        /// Kind of the rejected root value (e.g. `"string"`, `"null"`).
        found: String,
    },

    /// A configuration field is outside its valid domain.
    ///
    /// Reported before any traversal begins; invalid values are never
    /// silently clamped.
    #[error("malformed config: {msg}")]
    MalformedConfig { msg: String },

    /// A Rust type the normalization bridge cannot represent.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error, mostly raised by the serde normalization bridge.
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an invalid-input error naming the rejected root kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json2text::Error;
    ///
    /// let err = Error::invalid_input("string");
    /// assert!(err.to_string().contains("found string"));
    /// ```
    pub fn invalid_input(found: &str) -> Self {
        Error::InvalidInput {
            found: found.to_string(),
        }
    }

    /// Creates a malformed-config error with a description of the violation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json2text::Error;
    ///
    /// let err = Error::malformed_config("indent must be at least 1");
    /// assert!(err.to_string().contains("indent"));
    /// ```
    pub fn malformed_config(msg: &str) -> Self {
        Error::MalformedConfig {
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported-type error for types the normalization bridge
    /// cannot represent.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

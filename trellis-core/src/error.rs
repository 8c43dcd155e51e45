//! Error types for the accessor engine.
//!
//! The engine itself only raises errors for API misuse (unknown event kinds,
//! malformed listener registrations, array operations on objects) and for the
//! recursion guards. Everything else comes from caller-supplied computed
//! functions and is passed through untouched.

use thiserror::Error;

use crate::reactive::EventKind;
use crate::value::Key;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown event kind: {0:?}")]
    UnknownEvent(String),

    #[error("`{kind}` listeners cannot be filtered by property")]
    MalformedListener { kind: EventKind },

    #[error("only objects and arrays can be wrapped in a node")]
    NotAContainer,

    #[error("operation requires an array-backed node")]
    NotAnArray,

    #[error("`{key}` is not a valid array index")]
    InvalidIndex { key: Key },

    #[error("cyclic dependency while evaluating `{prop}`")]
    Cycle { prop: Key },

    #[error("update propagation exceeded the depth limit of {limit}")]
    DepthExceeded { limit: usize },

    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    External(Box<dyn std::error::Error + Send + Sync>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("MessagePack error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
}

impl Error {
    /// Build an error from a computed function with a plain message.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Wrap any error raised inside a computed function.
    pub fn external<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::External(Box::new(err))
    }
}

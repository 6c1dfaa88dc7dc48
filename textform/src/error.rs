//! Errors at the serialization boundary.
//!
//! Normalization itself cannot fail. Errors only appear when a normalized
//! tree is encoded for a text format and contains something that format
//! cannot express.

use thiserror::Error;

/// Convenience alias used by the fallible encoding entrypoints.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An opaque leaf was reached; `path` locates it (e.g. `$.runs[2].handle`).
    #[error("value at `{path}` is opaque and has no serializable form")]
    Opaque { path: String },

    /// Two keys of one mapping render to the same string; `path` locates the
    /// second of them in key order.
    #[error("mapping keys collide at `{path}` once rendered as text")]
    DuplicateKey { path: String },

    #[cfg(feature = "json")]
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

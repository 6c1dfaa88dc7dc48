//! Normalization traversal and entrypoints.
//!
//! - **`format`**: identifier text formats and the `Normalizer` configuration
//! - **`walk`**: the stack-based rebuild of dynamic `Value` trees
//! - **`traits`**: the typed `Normalize` trait
//! - **`containers`**: `Normalize` implementations for std and foreign types
//! - **`output`**: output types for logging boundaries

mod containers;
mod format;
mod output;
mod traits;
mod walk;

pub use format::{IdFormat, Normalizer};
pub use output::{NormalizedOutput, ToNormalizedOutput};
pub use traits::Normalize;

use crate::Value;

/// Replaces every identifier leaf in `value` with its canonical text form.
///
/// - mappings keep their key set (keys are not rewritten), values are normalized
/// - sequences keep their length and order, elements are normalized
/// - identifiers become lowercase hyphenated `Value::Text`
/// - every other value is returned unchanged; opaque leaves keep their identity
///
/// Text is never re-interpreted as an identifier, so the function is idempotent.
/// Nesting depth is limited only by memory.
pub fn normalize(value: Value) -> Value {
    Normalizer::canonical().normalize(value)
}

/// Same as [`normalize`] without consuming `value`.
pub fn normalize_ref(value: &Value) -> Value {
    Normalizer::canonical().normalize_ref(value)
}

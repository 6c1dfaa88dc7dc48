//! Output types for logging boundaries.
//!
//! - [`NormalizedOutput`]: the output enum (Text or Json)
//! - [`ToNormalizedOutput`]: trait for types that can produce normalized output

#[cfg(feature = "json")]
use serde_json::Value as JsonValue;

use crate::Value;

// =============================================================================
// NormalizedOutput - Output produced at logging boundaries
// =============================================================================

/// Output produced at a logging boundary. Never contains identifier values.
#[derive(Clone, Debug, PartialEq)]
pub enum NormalizedOutput {
    Text(String),
    #[cfg(feature = "json")]
    Json(JsonValue),
}

impl NormalizedOutput {
    /// Flattens the output into a single string.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            #[cfg(feature = "json")]
            Self::Json(json) => json.to_string(),
        }
    }
}

// =============================================================================
// ToNormalizedOutput - Trait for producing serialization-safe output
// =============================================================================

/// Produces the normalized representation of `self` for a sink.
pub trait ToNormalizedOutput {
    #[must_use]
    fn to_normalized_output(&self) -> NormalizedOutput;
}

impl ToNormalizedOutput for NormalizedOutput {
    fn to_normalized_output(&self) -> NormalizedOutput {
        self.clone()
    }
}

impl ToNormalizedOutput for Value {
    #[cfg(feature = "json")]
    fn to_normalized_output(&self) -> NormalizedOutput {
        match self.to_json() {
            Ok(json) => NormalizedOutput::Json(json),
            Err(err) => {
                NormalizedOutput::Text(format!("Failed to serialize normalized value: {err}"))
            }
        }
    }

    #[cfg(not(feature = "json"))]
    fn to_normalized_output(&self) -> NormalizedOutput {
        NormalizedOutput::Text(super::normalize_ref(self).to_string())
    }
}

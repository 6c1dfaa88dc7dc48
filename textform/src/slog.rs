//! Adapters for emitting normalized values through `slog`.
//!
//! This module connects [`crate::Value`] with `slog` by providing
//! `slog::Value` implementations that serialize the normalized tree as
//! structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the normalized one, so identifiers
//!   always reach the sink as text.
//! - Avoiding fallible logging APIs: encoding failures (opaque leaves) are
//!   represented as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog`.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{NormalizedOutput, ToNormalizedOutput, Value};

/// JSON payload that has already been normalized.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedJson(JsonValue);

impl NormalizedJson {
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

impl SlogValue for NormalizedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.0.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

fn emit_output(
    output: &NormalizedOutput,
    record: &Record<'_>,
    key: Key,
    serializer: &mut dyn Serializer,
) -> SlogResult {
    match output {
        NormalizedOutput::Text(text) => serializer.emit_str(key, text),
        NormalizedOutput::Json(json) => {
            let nested = slog::Serde(json.clone());
            SlogValue::serialize(&nested, record, key, serializer)
        }
    }
}

impl SlogValue for NormalizedOutput {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_output(self, record, key, serializer)
    }
}

/// Logs the normalized JSON form of the tree.
impl SlogValue for Value {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_output(&self.to_normalized_output(), record, key, serializer)
    }
}

/// Extension trait for ergonomic slog logging of normalized values as JSON.
///
/// ```ignore
/// use textform::slog::SlogNormalizedExt;
///
/// info!(logger, "run finished"; "run" => run.slog_normalized_json());
/// ```
pub trait SlogNormalizedExt {
    /// Normalizes `self` and returns a `slog::Value` that serializes as structured JSON.
    ///
    /// If the tree cannot be encoded, the returned value stores a JSON string
    /// starting with `"Failed to serialize normalized value"`.
    fn slog_normalized_json(self) -> NormalizedJson;
}

impl SlogNormalizedExt for Value {
    fn slog_normalized_json(self) -> NormalizedJson {
        let json = self.to_json().unwrap_or_else(|err| {
            JsonValue::String(format!("Failed to serialize normalized value: {err}"))
        });
        NormalizedJson::new(json)
    }
}

//! `serde` and `serde_json` support.
//!
//! Identifier leaves are encoded as text, mapping keys are always encoded as
//! strings, and opaque leaves are rejected, as are keys that become equal
//! once rendered as strings. JSON strings coming back in are
//! kept as text; they are never parsed into identifiers.

use std::{collections::BTreeSet, fmt::Write as _};

use serde::{
    Serialize, Serializer,
    ser::{Error as _, SerializeMap},
};
use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::{
    Error, IntoValue, Key, Mapping, Normalize, NormalizedOutput, Normalizer, Result,
    ToNormalizedOutput, Value,
};

// =============================================================================
// Serialize
// =============================================================================

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::UInt(value) => serializer.serialize_u64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::Text(value) => serializer.serialize_str(value),
            Value::Uuid(value) => serializer.collect_str(&value.hyphenated()),
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Mapping(map) => serialize_mapping(map, serializer),
            Value::Other(opaque) => Err(S::Error::custom(format_args!(
                "opaque value of type `{}` has no serializable form",
                opaque.type_name()
            ))),
        }
    }
}

fn serialize_mapping<S>(map: &Mapping, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut rendered = BTreeSet::new();
    let mut state = serializer.serialize_map(Some(map.len()))?;
    for (key, item) in map {
        let text = key.to_string();
        if !rendered.insert(text.clone()) {
            return Err(S::Error::custom(format_args!(
                "mapping keys collide once rendered as text: {text:?}"
            )));
        }
        state.serialize_entry(&text, item)?;
    }
    state.end()
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Value -> JSON
// =============================================================================

enum Segment<'a> {
    Key(&'a Key),
    Index(usize),
}

fn is_plain_name(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn render_path(segments: &[Segment<'_>]) -> String {
    let mut path = String::from("$");
    for segment in segments {
        // Writing into a String cannot fail.
        let _ = match segment {
            Segment::Index(index) => write!(path, "[{index}]"),
            Segment::Key(Key::Text(name)) if is_plain_name(name) => write!(path, ".{name}"),
            Segment::Key(key) => write!(path, "[{:?}]", key.to_string()),
        };
    }
    path
}

fn encode<'a>(
    value: &'a Value,
    normalizer: &Normalizer,
    path: &mut Vec<Segment<'a>>,
) -> Result<JsonValue> {
    Ok(match value {
        Value::Null => JsonValue::Null,
        Value::Bool(value) => JsonValue::Bool(*value),
        Value::Int(value) => JsonValue::from(*value),
        Value::UInt(value) => JsonValue::from(*value),
        // Non-finite floats become `null`.
        Value::Float(value) => JsonValue::from(*value),
        Value::Text(value) => JsonValue::String(value.clone()),
        Value::Uuid(id) => JsonValue::String(normalizer.format_id(*id)),
        Value::Sequence(items) => {
            let mut encoded = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                path.push(Segment::Index(index));
                encoded.push(encode(item, normalizer, path)?);
                path.pop();
            }
            JsonValue::Array(encoded)
        }
        Value::Mapping(map) => {
            let mut encoded = JsonMap::with_capacity(map.len());
            for (key, item) in map {
                path.push(Segment::Key(key));
                let item = encode(item, normalizer, path)?;
                if encoded.insert(key.to_string(), item).is_some() {
                    return Err(Error::DuplicateKey {
                        path: render_path(path),
                    });
                }
                path.pop();
            }
            JsonValue::Object(encoded)
        }
        Value::Other(_) => {
            return Err(Error::Opaque {
                path: render_path(path),
            });
        }
    })
}

impl Value {
    /// Normalizes `self` and converts it into a `serde_json::Value`.
    ///
    /// Fails with [`Error::Opaque`] if the tree holds an opaque leaf, and with
    /// [`Error::DuplicateKey`] if two keys of one mapping render to the same
    /// string (e.g. `Int(1)` and `Text("1")`).
    pub fn to_json(&self) -> Result<JsonValue> {
        self.to_json_with(&Normalizer::canonical())
    }

    /// Same as [`Value::to_json`] with a specific identifier format.
    pub fn to_json_with(&self, normalizer: &Normalizer) -> Result<JsonValue> {
        encode(self, normalizer, &mut Vec::new())
    }

    /// Normalizes `self` and encodes it as compact JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }

    /// Normalizes `self` and encodes it as indented JSON text.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json()?)?)
    }
}

// =============================================================================
// JSON -> Value
// =============================================================================

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(value) => Value::Bool(value),
            JsonValue::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Value::Int(value)
                } else if let Some(value) = number.as_u64() {
                    Value::UInt(value)
                } else {
                    number.as_f64().map_or(Value::Null, Value::Float)
                }
            }
            JsonValue::String(text) => Value::Text(text),
            JsonValue::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, item)| (Key::Text(key), Value::from(item)))
                    .collect(),
            ),
        }
    }
}

impl IntoValue for JsonValue {
    fn into_value(self) -> Value {
        Value::from(self)
    }
}

// =============================================================================
// NormalizedJsonRef - Wrapper for normalized JSON output of typed data
// =============================================================================

/// Wrapper producing normalized JSON output from typed data.
pub struct NormalizedJsonRef<'a, T: ?Sized>(&'a T);

impl<T> ToNormalizedOutput for NormalizedJsonRef<'_, T>
where
    T: Normalize + Clone,
    T::Output: Serialize,
{
    fn to_normalized_output(&self) -> NormalizedOutput {
        let normalized = self.0.clone().normalize();
        match serde_json::to_value(normalized) {
            Ok(json) => NormalizedOutput::Json(json),
            Err(err) => {
                NormalizedOutput::Text(format!("Failed to serialize normalized value: {err}"))
            }
        }
    }
}

/// Extension trait to obtain a normalized JSON output wrapper.
pub trait NormalizedJsonExt {
    /// Wraps the value for normalized JSON output.
    fn normalized_json(&self) -> NormalizedJsonRef<'_, Self>
    where
        Self: Sized;
}

impl<T> NormalizedJsonExt for T
where
    T: Normalize + Clone,
    T::Output: Serialize,
{
    fn normalized_json(&self) -> NormalizedJsonRef<'_, Self> {
        NormalizedJsonRef(self)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::{IdFormat, Opaque, mapping, sequence};

    const RUN: Uuid = Uuid::from_u128(0x5a1d_0000_0000_4000_8000_0000_0000_00aa);

    #[test]
    fn path_rendering() {
        let odd = Key::Text("odd key".into());
        let plain = Key::Text("runs".into());
        let numeric = Key::Int(3);
        let segments = [
            Segment::Key(&plain),
            Segment::Index(2),
            Segment::Key(&odd),
            Segment::Key(&numeric),
        ];
        assert_eq!(render_path(&segments), r#"$.runs[2]["odd key"]["3"]"#);
        assert_eq!(render_path(&[]), "$");
    }

    #[test]
    fn plain_names() {
        assert!(is_plain_name("job_runs"));
        assert!(is_plain_name("_x1"));
        assert!(!is_plain_name("1x"));
        assert!(!is_plain_name(""));
        assert!(!is_plain_name("a-b"));
    }

    #[test]
    fn to_json_with_uses_configured_format() {
        let value = sequence![RUN];
        let simple = Normalizer::canonical().with_format(IdFormat::Simple);
        assert_eq!(
            value.to_json_with(&simple).unwrap(),
            json!(["5a1d00000000400080000000000000aa"])
        );
    }

    #[test]
    fn uuid_keys_render_hyphenated() {
        let value = mapping! { RUN => 1 };
        assert_eq!(
            value.to_json().unwrap(),
            json!({ "5a1d0000-0000-4000-8000-0000000000aa": 1 })
        );
    }

    #[test]
    fn opaque_error_carries_path() {
        let value = mapping! {
            "runs" => sequence![mapping! {}, mapping! { "handle" => Opaque::new(()) }],
        };
        match value.to_json() {
            Err(Error::Opaque { path }) => assert_eq!(path, "$.runs[1].handle"),
            other => panic!("expected opaque error, got {other:?}"),
        }
    }

    #[test]
    fn colliding_keys_are_rejected_with_path() {
        let value = mapping! {
            "runs" => sequence![mapping! { 1 => "int", "1" => "text" }],
        };
        match value.to_json() {
            Err(Error::DuplicateKey { path }) => assert_eq!(path, r#"$.runs[0]["1"]"#),
            other => panic!("expected duplicate key error, got {other:?}"),
        }
    }

    #[test]
    fn uuid_key_colliding_with_its_text_is_rejected() {
        let value = mapping! { RUN => 1, "5a1d0000-0000-4000-8000-0000000000aa" => 2 };
        assert!(matches!(value.to_json(), Err(Error::DuplicateKey { .. })));
        let err = serde_json::to_string(&value).unwrap_err();
        assert!(err.to_string().contains("collide"));
    }

    #[test]
    fn serialize_rejects_opaque() {
        let err = serde_json::to_string(&Value::Other(Opaque::new(1u8))).unwrap_err();
        assert!(err.to_string().contains("opaque value of type `u8`"));
    }
}

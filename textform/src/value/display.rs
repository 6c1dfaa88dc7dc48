//! JSON-like `Display` rendering for value trees.
//!
//! Identifiers render as quoted hyphenated text, mapping keys always render
//! as quoted strings, and opaque leaves render as `<opaque TypeName>`. The
//! output is meant for humans; use the `json` feature for real encoding.

use std::fmt;

use super::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
            Self::Uuid(value) => write!(f, "\"{}\"", value.hyphenated()),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Mapping(map) => {
                f.write_str("{")?;
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {value}", key.to_string())?;
                }
                f.write_str("}")
            }
            Self::Other(opaque) => write!(f, "<opaque {}>", opaque.type_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::{Opaque, Value, mapping, sequence};

    #[test]
    fn renders_nested_tree() {
        let value = mapping! {
            "count" => 3,
            "id" => Uuid::from_u128(0xff),
            "tags" => sequence!["x", Value::Null],
        };
        assert_eq!(
            value.to_string(),
            r#"{"count": 3, "id": "00000000-0000-0000-0000-0000000000ff", "tags": ["x", null]}"#
        );
    }

    #[test]
    fn renders_opaque_type_name() {
        let value = Value::Other(Opaque::new(5u8));
        assert_eq!(value.to_string(), "<opaque u8>");
    }

    #[test]
    fn renders_empty_containers() {
        assert_eq!(mapping! {}.to_string(), "{}");
        assert_eq!(sequence![].to_string(), "[]");
    }
}

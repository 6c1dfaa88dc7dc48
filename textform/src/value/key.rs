//! Mapping keys.

use std::fmt;

use uuid::Uuid;

/// Key of a [`super::Mapping`].
///
/// Keys are never rewritten by normalization, `Key::Uuid` included. They are
/// ordered by variant first, then by payload.
///
/// Integer conversions pick `Int` whenever the value fits in an `i64`, so
/// `UInt` only ever holds values above `i64::MAX`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Text(String),
    Uuid(Uuid),
}

impl Key {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Self::Uuid(id) => Some(*id),
            _ => None,
        }
    }
}

/// Renders the key as the string used for text map keys.
///
/// Identifiers use the canonical lowercase hyphenated form.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Uuid(value) => write!(f, "{}", value.hyphenated()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_map_key_text() {
        assert_eq!(Key::Bool(true).to_string(), "true");
        assert_eq!(Key::Int(-4).to_string(), "-4");
        assert_eq!(Key::UInt(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Key::Text("id".into()).to_string(), "id");
        assert_eq!(
            Key::Uuid(Uuid::from_u128(0xA1A2_A3A4_B1B2_C1C2_D1D2_D3D4_D5D6_D7D8)).to_string(),
            "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8"
        );
    }

    #[test]
    fn ordering_groups_by_variant() {
        let mut keys = vec![
            Key::Text("b".into()),
            Key::UInt(u64::MAX),
            Key::Int(2),
            Key::Text("a".into()),
            Key::Bool(false),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                Key::Bool(false),
                Key::Int(2),
                Key::UInt(u64::MAX),
                Key::Text("a".into()),
                Key::Text("b".into()),
            ]
        );
    }
}

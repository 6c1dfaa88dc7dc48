//! The value tree that normalization operates on.
//!
//! - **`Value`**: closed enumeration of mappings, sequences, identifiers and scalars
//! - **`key`**: mapping keys (`Key`), never touched by normalization
//! - **`opaque`**: shared leaves whose identity survives normalization
//! - **`convert`**: `From`, `IntoValue` and `IntoKey` conversions
//! - **`display`**: JSON-like text rendering
//! - **`macros`**: `mapping!` and `sequence!` literals

mod convert;
mod display;
mod key;
mod macros;
mod opaque;

use std::{collections::BTreeMap, mem};

pub use convert::{IntoKey, IntoValue};
pub use key::Key;
pub use opaque::Opaque;
use uuid::Uuid;

/// Mapping payload of [`Value::Mapping`].
///
/// Keys are unique. Iteration follows key order; insertion order is not kept.
pub type Mapping = BTreeMap<Key, Value>;

// =============================================================================
// Value - The recursive tree
// =============================================================================

/// A node of a value tree.
///
/// `Uuid` leaves are what [`crate::normalize`] rewrites. Every other variant
/// except the two containers is treated as an opaque scalar and passed through.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Uuid(Uuid),
    Sequence(Vec<Value>),
    Mapping(Mapping),
    /// Any other payload. Cloning shares the allocation.
    Other(Opaque),
}

/// Tag of a [`Value`] variant, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    UInt,
    Float,
    Text,
    Uuid,
    Sequence,
    Mapping,
    Other,
}

impl ValueKind {
    /// Returns `true` for the variants normalization descends into.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Sequence | Self::Mapping)
    }

    /// Returns `true` for the variants normalization passes through unchanged.
    pub fn is_scalar(self) -> bool {
        !self.is_container() && self != Self::Uuid
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::UInt(_) => ValueKind::UInt,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Uuid(_) => ValueKind::Uuid,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Other(_) => ValueKind::Other,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as `i64` if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::UInt(value) => i64::try_from(*value).ok(),
            _ => None,
        }
    }

    /// Returns the value as `u64` if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(value) => u64::try_from(*value).ok(),
            Self::UInt(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Self::Uuid(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Self::Other(opaque) => Some(opaque),
            _ => None,
        }
    }

    pub fn into_sequence(mut self) -> Option<Vec<Value>> {
        match &mut self {
            Self::Sequence(items) => Some(mem::take(items)),
            _ => None,
        }
    }

    pub fn into_mapping(mut self) -> Option<Mapping> {
        match &mut self {
            Self::Mapping(map) => Some(mem::take(map)),
            _ => None,
        }
    }

    /// Looks up `key` when `self` is a mapping.
    pub fn get<K: IntoKey>(&self, key: K) -> Option<&Value> {
        self.as_mapping()?.get(&key.into_key())
    }

    /// Returns the element at `index` when `self` is a sequence.
    pub fn index(&self, index: usize) -> Option<&Value> {
        self.as_sequence()?.get(index)
    }

    /// Number of direct children of a container, `0` for leaves.
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(map) => map.len(),
            _ => 0,
        }
    }

    /// Returns `true` for leaves and for empty containers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if any `Uuid` leaf remains in the tree.
    ///
    /// Mapping keys are not inspected.
    pub fn contains_uuid(&self) -> bool {
        let mut pending = vec![self];
        while let Some(value) = pending.pop() {
            match value {
                Self::Uuid(_) => return true,
                Self::Sequence(items) => pending.extend(items),
                Self::Mapping(map) => pending.extend(map.values()),
                _ => {}
            }
        }
        false
    }
}

/// Tears containers down on a heap stack so dropping deep trees does not
/// recurse.
///
/// Because of this impl, container payloads are taken with [`mem::take`]
/// rather than moved out of the variant.
impl Drop for Value {
    fn drop(&mut self) {
        let mut pending = match self {
            Self::Sequence(items) if !items.is_empty() => mem::take(items),
            Self::Mapping(map) if !map.is_empty() => mem::take(map).into_values().collect(),
            _ => return,
        };
        while let Some(mut value) = pending.pop() {
            match &mut value {
                Self::Sequence(items) => pending.append(items),
                Self::Mapping(map) => pending.extend(mem::take(map).into_values()),
                _ => {}
            }
        }
    }
}

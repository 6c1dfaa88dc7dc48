//! Conversions into [`Value`] and [`Key`].
//!
//! `From` covers the leaf types and the two container payloads. The
//! [`IntoValue`] trait extends this to generic containers (`Vec<T>`, maps,
//! sets, `Option<T>`) and is what `#[derive(IntoValue)]` calls for each field.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::BuildHasher,
};

use uuid::Uuid;

use super::{Key, Mapping, Opaque, Value};

// =============================================================================
// IntoValue / IntoKey - Generic conversion traits
// =============================================================================

/// Converts a Rust value into a [`Value`] tree.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into a `textform::Value`",
    label = "this type has no value tree representation",
    note = "use `#[derive(IntoValue)]` on the type definition",
    note = "or wrap it in `textform::Opaque` to carry it through unchanged"
)]
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Converts a Rust value into a mapping [`Key`].
pub trait IntoKey {
    fn into_key(self) -> Key;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoKey for Key {
    fn into_key(self) -> Key {
        self
    }
}

// =============================================================================
// Leaf conversions
// =============================================================================

macro_rules! impl_leaf_conversion {
    ($variant:ident as $target:ty: $($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(<$target>::from(value))
                }
            }

            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::from(self)
                }
            }
        )+
    };
}

impl_leaf_conversion!(Bool as bool: bool);
impl_leaf_conversion!(Int as i64: i8, i16, i32, i64);
impl_leaf_conversion!(UInt as u64: u8, u16, u32, u64);
impl_leaf_conversion!(Float as f64: f32, f64);
impl_leaf_conversion!(Text as String: String, &str, char);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Value::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::UInt(value as u64)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Value::Text(value.into_owned())
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Uuid(value)
    }
}

impl From<Opaque> for Value {
    fn from(value: Opaque) -> Self {
        Value::Other(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

macro_rules! impl_into_value_via_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::from(self)
                }
            }
        )+
    };
}

impl_into_value_via_from!(isize, usize, Cow<'_, str>, Uuid, Opaque, ());

impl IntoValue for &String {
    fn into_value(self) -> Value {
        Value::Text(self.clone())
    }
}

// =============================================================================
// Container conversions
// =============================================================================

impl<T> IntoValue for Option<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        self.map_or(Value::Null, IntoValue::into_value)
    }
}

impl<T> IntoValue for Box<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        (*self).into_value()
    }
}

impl<T> IntoValue for Vec<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        Value::Sequence(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T> IntoValue for VecDeque<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        Value::Sequence(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T, const N: usize> IntoValue for [T; N]
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        Value::Sequence(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T> IntoValue for &[T]
where
    T: IntoValue + Clone,
{
    fn into_value(self) -> Value {
        Value::Sequence(self.iter().cloned().map(IntoValue::into_value).collect())
    }
}

impl<T> IntoValue for BTreeSet<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        Value::Sequence(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T, S> IntoValue for HashSet<T, S>
where
    T: IntoValue,
    S: BuildHasher,
{
    fn into_value(self) -> Value {
        Value::Sequence(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<K, V> IntoValue for BTreeMap<K, V>
where
    K: IntoKey,
    V: IntoValue,
{
    fn into_value(self) -> Value {
        self.into_iter().collect()
    }
}

impl<K, V, S> IntoValue for HashMap<K, V, S>
where
    K: IntoKey,
    V: IntoValue,
    S: BuildHasher,
{
    fn into_value(self) -> Value {
        self.into_iter().collect()
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().collect())
    }
}

impl<K, V> FromIterator<(K, V)> for Value
where
    K: IntoKey,
    V: IntoValue,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Mapping(
            iter.into_iter()
                .map(|(key, value)| (key.into_key(), value.into_value()))
                .collect(),
        )
    }
}

// =============================================================================
// Key conversions
// =============================================================================

macro_rules! impl_key_conversion {
    ($variant:ident as $target:ty: $($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Key {
                fn from(value: $ty) -> Self {
                    Key::$variant(<$target>::from(value))
                }
            }

            impl IntoKey for $ty {
                fn into_key(self) -> Key {
                    Key::from(self)
                }
            }
        )+
    };
}

impl_key_conversion!(Bool as bool: bool);
impl_key_conversion!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
impl_key_conversion!(Text as String: String, &str, char);

fn wide_integer_key(value: i128) -> Key {
    if let Ok(value) = i64::try_from(value) {
        Key::Int(value)
    } else if let Ok(value) = u64::try_from(value) {
        Key::UInt(value)
    } else {
        Key::Text(value.to_string())
    }
}

macro_rules! impl_wide_key_conversion {
    ($($ty:ty => $widen:expr),+ $(,)?) => {
        $(
            impl From<$ty> for Key {
                fn from(value: $ty) -> Self {
                    $widen(value)
                }
            }

            impl IntoKey for $ty {
                fn into_key(self) -> Key {
                    Key::from(self)
                }
            }
        )+
    };
}

impl_wide_key_conversion!(
    u64 => |value: u64| wide_integer_key(i128::from(value)),
    i128 => wide_integer_key,
    usize => |value: usize| {
        i128::try_from(value).map_or_else(|_| Key::Text(value.to_string()), wide_integer_key)
    },
    u128 => |value: u128| {
        i128::try_from(value).map_or_else(|_| Key::Text(value.to_string()), wide_integer_key)
    },
);

impl From<Uuid> for Key {
    fn from(value: Uuid) -> Self {
        Key::Uuid(value)
    }
}

impl IntoKey for Uuid {
    fn into_key(self) -> Key {
        Key::Uuid(self)
    }
}

impl IntoKey for Cow<'_, str> {
    fn into_key(self) -> Key {
        Key::Text(self.into_owned())
    }
}

impl IntoKey for &String {
    fn into_key(self) -> Key {
        Key::Text(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap, HashSet};

    use uuid::Uuid;

    use super::*;

    #[test]
    fn leaves_pick_signedness_by_source_type() {
        assert_eq!(Value::from(-3i8), Value::Int(-3));
        assert_eq!(Value::from(3u16), Value::UInt(3));
        assert_eq!(Value::from(3usize), Value::UInt(3));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from('x'), Value::Text("x".into()));
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Some("a").into_value(), Value::Text("a".into()));
    }

    #[test]
    fn vec_of_uuids_keeps_identifiers() {
        let ids = vec![Uuid::from_u128(1), Uuid::from_u128(2)];
        assert_eq!(
            ids.into_value(),
            Value::Sequence(vec![
                Value::Uuid(Uuid::from_u128(1)),
                Value::Uuid(Uuid::from_u128(2)),
            ])
        );
    }

    #[test]
    fn maps_convert_keys_and_values() {
        let mut runs = HashMap::new();
        runs.insert(Uuid::from_u128(9), "done");
        let value = runs.into_value();
        assert_eq!(
            value.get(Uuid::from_u128(9)),
            Some(&Value::Text("done".into()))
        );

        let mut ordered = BTreeMap::new();
        ordered.insert(2u8, true);
        assert_eq!(ordered.into_value().get(2), Some(&Value::Bool(true)));
    }

    #[test]
    fn wide_integer_keys_prefer_signed() {
        assert_eq!(Key::from(5u64), Key::Int(5));
        assert_eq!(Key::from(7usize), Key::Int(7));
        assert_eq!(Key::from(u64::MAX), Key::UInt(u64::MAX));
        assert_eq!(Key::from(-2i128), Key::Int(-2));
        assert_eq!(Key::from(i128::from(u64::MAX)), Key::UInt(u64::MAX));
        assert_eq!(
            Key::from(i128::MIN),
            Key::Text("-170141183460469231731687303715884105728".into())
        );
        assert_eq!(
            Key::from(u128::MAX),
            Key::Text("340282366920938463463374607431768211455".into())
        );
    }

    #[test]
    fn maps_with_wide_integer_keys_convert() {
        let mut sizes: HashMap<u64, &str> = HashMap::new();
        sizes.insert(5, "small");
        sizes.insert(u64::MAX, "huge");
        let value = sizes.into_value();
        assert_eq!(value.get(5), Some(&Value::Text("small".into())));
        assert_eq!(value.get(u64::MAX), Some(&Value::Text("huge".into())));

        let by_index: BTreeMap<usize, bool> = BTreeMap::from([(0, true)]);
        assert_eq!(by_index.into_value().get(0usize), Some(&Value::Bool(true)));
    }

    #[test]
    fn sets_become_sequences() {
        let set: HashSet<i64> = [4].into_iter().collect();
        assert_eq!(set.into_value(), Value::Sequence(vec![Value::Int(4)]));
    }

    #[test]
    fn slices_clone_elements() {
        let items = ["a".to_string(), "b".to_string()];
        let value = items.as_slice().into_value();
        assert_eq!(value.len(), 2);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn collect_builds_containers() {
        let seq: Value = (1..=3).map(Value::from).collect();
        assert_eq!(seq.len(), 3);

        let map: Value = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map.get("b"), Some(&Value::Int(2)));
    }
}

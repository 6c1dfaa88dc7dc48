//! Literal construction of value trees.

/// Builds a [`Value::Mapping`](crate::Value::Mapping).
///
/// Keys go through [`IntoKey`](crate::IntoKey), values through
/// [`IntoValue`](crate::IntoValue). A repeated key keeps the last value.
///
/// ```rust
/// use textform::{Value, mapping};
///
/// let run = mapping! { "status" => "queued", "attempts" => 0 };
/// assert_eq!(run.get("attempts"), Some(&Value::Int(0)));
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::Value::Mapping($crate::Mapping::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Mapping::new();
        $(
            map.insert(
                $crate::IntoKey::into_key($key),
                $crate::IntoValue::into_value($value),
            );
        )+
        $crate::Value::Mapping(map)
    }};
}

/// Builds a [`Value::Sequence`](crate::Value::Sequence).
///
/// ```rust
/// use textform::{Value, sequence};
///
/// let tags = sequence!["nightly", 2];
/// assert_eq!(tags.index(1), Some(&Value::Int(2)));
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Value::Sequence(::std::vec::Vec::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Value::Sequence(::std::vec![$($crate::IntoValue::into_value($value)),+])
    };
}

//! Adapters for emitting normalized values through `tracing`.
//!
//! - **`TracingNormalizedExt`**: logs normalized values as display strings. Works
//!   with any tracing subscriber but loses structure.
//!
//! - **`TracingValuableExt`** (requires `tracing-valuable` feature): logs normalized
//!   values as structured data via the `valuable` crate.
//!
//! # Example
//!
//! ```ignore
//! use textform::tracing::{TracingNormalizedExt, TracingValuableExt};
//!
//! tracing::info!(run = %run.tracing_normalized());
//! tracing::info!(run = run.tracing_normalized_valuable());
//! ```

use tracing::field::{DisplayValue, display};

use crate::normalize::ToNormalizedOutput;

/// Extension trait for logging normalized values as display strings.
pub trait TracingNormalizedExt {
    /// Wraps the normalized form of the value as a `tracing` display value.
    fn tracing_normalized(&self) -> DisplayValue<String>;
}

impl<T> TracingNormalizedExt for T
where
    T: ToNormalizedOutput,
{
    fn tracing_normalized(&self) -> DisplayValue<String> {
        display(self.to_normalized_output().into_text())
    }
}

#[cfg(feature = "tracing-valuable")]
mod structured {
    use std::mem;

    use valuable::{Valuable, Value as Structured, Visit};

    use crate::{Key, Value, normalize_ref};

    /// Identifier keys of a tree that was not wrapped in
    /// [`NormalizedValuable`] are exposed as `u128`, like identifier leaves.
    impl Valuable for Key {
        fn as_value(&self) -> Structured<'_> {
            match self {
                Key::Bool(value) => Structured::Bool(*value),
                Key::Int(value) => Structured::I64(*value),
                Key::UInt(value) => Structured::U64(*value),
                Key::Text(value) => Structured::String(value),
                Key::Uuid(value) => Structured::U128(value.as_u128()),
            }
        }

        fn visit(&self, visit: &mut dyn Visit) {
            visit.visit_value(self.as_value());
        }
    }

    /// Identifiers that were not normalized first are exposed as `u128`;
    /// opaque leaves as unit.
    impl Valuable for Value {
        fn as_value(&self) -> Structured<'_> {
            match self {
                Value::Null | Value::Other(_) => Structured::Unit,
                Value::Bool(value) => Structured::Bool(*value),
                Value::Int(value) => Structured::I64(*value),
                Value::UInt(value) => Structured::U64(*value),
                Value::Float(value) => Structured::F64(*value),
                Value::Text(value) => Structured::String(value),
                Value::Uuid(value) => Structured::U128(value.as_u128()),
                Value::Sequence(items) => Structured::Listable(items),
                Value::Mapping(map) => Structured::Mappable(map),
            }
        }

        fn visit(&self, visit: &mut dyn Visit) {
            match self {
                Value::Sequence(items) => items.visit(visit),
                Value::Mapping(map) => map.visit(visit),
                _ => visit.visit_value(self.as_value()),
            }
        }
    }

    /// Rewrites identifier keys as canonical text, the form JSON output uses.
    fn uuid_keys_as_text(root: &mut Value) {
        let mut pending = vec![root];
        while let Some(value) = pending.pop() {
            match value {
                Value::Sequence(items) => pending.extend(items.iter_mut()),
                Value::Mapping(map) => {
                    if map.keys().any(|key| key.as_uuid().is_some()) {
                        *map = mem::take(map)
                            .into_iter()
                            .map(|(key, item)| match key {
                                Key::Uuid(id) => (Key::Text(id.hyphenated().to_string()), item),
                                key => (key, item),
                            })
                            .collect();
                    }
                    pending.extend(map.values_mut());
                }
                _ => {}
            }
        }
    }

    /// A normalized value that implements `valuable::Valuable`.
    ///
    /// Identifier keys are held as canonical text so no identifier reaches a
    /// subscriber in binary form.
    #[derive(Clone, Debug)]
    pub struct NormalizedValuable {
        normalized: Value,
    }

    impl NormalizedValuable {
        /// Creates a new `NormalizedValuable` from an already-normalized value.
        pub fn new(mut normalized: Value) -> Self {
            uuid_keys_as_text(&mut normalized);
            Self { normalized }
        }

        pub fn inner(&self) -> &Value {
            &self.normalized
        }
    }

    impl Valuable for NormalizedValuable {
        fn as_value(&self) -> Structured<'_> {
            self.normalized.as_value()
        }

        fn visit(&self, visit: &mut dyn Visit) {
            self.normalized.visit(visit);
        }
    }

    /// Extension trait for logging normalized values as structured `valuable` data.
    pub trait TracingValuableExt {
        /// Normalizes the value and wraps it for structured tracing output.
        fn tracing_normalized_valuable(&self) -> NormalizedValuable;
    }

    impl TracingValuableExt for Value {
        fn tracing_normalized_valuable(&self) -> NormalizedValuable {
            NormalizedValuable::new(normalize_ref(self))
        }
    }
}

#[cfg(feature = "tracing-valuable")]
pub use structured::{NormalizedValuable, TracingValuableExt};

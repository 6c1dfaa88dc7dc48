//! `Normalize` implementations for standard library and foreign types.
//!
//! Containers normalize their contents and keep their shape. Scalars pass
//! through with `Output = Self`. `Uuid` is the only leaf that changes type.
//!
//! ## Map Keys Are Not Normalized
//!
//! For `HashMap` and `BTreeMap`, only **values** are normalized. A map keyed
//! by `Uuid` keeps its `Uuid` keys; convert the keys yourself if they have to
//! reach a text-only format.
//!
//! ## Sets Keep Their Size
//!
//! Set elements are normalized and collected back into a set. Distinct
//! identifiers always have distinct text forms, so no elements merge.

mod identifiers;
mod maps;
mod passthrough;
mod sets;
mod wrappers;

#[cfg(test)]
mod tests;

// =============================================================================
// Passthrough implementation helper
// =============================================================================

macro_rules! impl_normalize_passthrough {
    ($ty:ty) => {
        impl crate::normalize::traits::Normalize for $ty {
            type Output = Self;

            fn normalize_with(self, _normalizer: &crate::normalize::Normalizer) -> Self {
                self
            }
        }
    };
}

pub(super) use impl_normalize_passthrough;

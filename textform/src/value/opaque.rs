//! Shared leaves for payloads the value model does not know about.

use std::{any::Any, fmt, sync::Arc};

/// A reference-counted payload of any `Send + Sync` type.
///
/// Normalization passes opaque leaves through untouched: the normalized tree
/// holds the same allocation as the input. Equality is identity, not content.
#[derive(Clone)]
pub struct Opaque {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Opaque {
    /// Wraps `value` in a new shared allocation.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wraps an existing allocation without copying it.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            inner: value,
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Name of the wrapped type, as reported by `std::any::type_name`.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Opaque").field(&self.type_name).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Opaque;

    #[derive(Debug, PartialEq)]
    struct Handle(u32);

    #[test]
    fn clones_share_identity() {
        let opaque = Opaque::new(Handle(7));
        let clone = opaque.clone();
        assert!(opaque.ptr_eq(&clone));
        assert_eq!(opaque, clone);
    }

    #[test]
    fn equal_contents_are_not_equal_handles() {
        assert_ne!(Opaque::new(Handle(7)), Opaque::new(Handle(7)));
    }

    #[test]
    fn downcast_reaches_payload() {
        let opaque = Opaque::from_arc(Arc::new(Handle(3)));
        assert!(opaque.is::<Handle>());
        assert_eq!(opaque.downcast_ref::<Handle>(), Some(&Handle(3)));
        assert_eq!(opaque.downcast_ref::<String>(), None);
        assert!(opaque.type_name().ends_with("Handle"));
    }
}

//! Normalization for wrapper and sequence container types.

use std::{collections::VecDeque, rc::Rc, sync::Arc};

use crate::normalize::{Normalizer, traits::Normalize};

// =============================================================================
// Wrapper container implementations
// =============================================================================

impl<T> Normalize for Option<T>
where
    T: Normalize,
{
    type Output = Option<T::Output>;

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        self.map(|value| value.normalize_with(normalizer))
    }
}

impl<T, E> Normalize for Result<T, E>
where
    T: Normalize,
    E: Normalize,
{
    type Output = Result<T::Output, E::Output>;

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        match self {
            Ok(value) => Ok(value.normalize_with(normalizer)),
            Err(err) => Err(err.normalize_with(normalizer)),
        }
    }
}

impl<T> Normalize for Box<T>
where
    T: Normalize,
{
    type Output = Box<T::Output>;

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        Box::new((*self).normalize_with(normalizer))
    }
}

impl<T> Normalize for Arc<T>
where
    T: Normalize + Clone,
{
    type Output = Arc<T::Output>;

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        Arc::new(Arc::unwrap_or_clone(self).normalize_with(normalizer))
    }
}

impl<T> Normalize for Rc<T>
where
    T: Normalize + Clone,
{
    type Output = Rc<T::Output>;

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        Rc::new(Rc::unwrap_or_clone(self).normalize_with(normalizer))
    }
}

// =============================================================================
// Sequence container implementations
// =============================================================================

impl<T> Normalize for Vec<T>
where
    T: Normalize,
{
    type Output = Vec<T::Output>;

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        self.into_iter()
            .map(|value| value.normalize_with(normalizer))
            .collect()
    }
}

impl<T> Normalize for VecDeque<T>
where
    T: Normalize,
{
    type Output = VecDeque<T::Output>;

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        self.into_iter()
            .map(|value| value.normalize_with(normalizer))
            .collect()
    }
}

impl<T, const N: usize> Normalize for [T; N]
where
    T: Normalize,
{
    type Output = [T::Output; N];

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        self.map(|value| value.normalize_with(normalizer))
    }
}

//! Normalization for set containers.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::normalize::{Normalizer, traits::Normalize};

impl<T, S> Normalize for HashSet<T, S>
where
    T: Normalize + Hash + Eq,
    T::Output: Hash + Eq,
    S: BuildHasher + Clone,
{
    type Output = HashSet<T::Output, S>;

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        let hasher = self.hasher().clone();
        let mut result = HashSet::with_capacity_and_hasher(self.len(), hasher);
        result.extend(self.into_iter().map(|value| value.normalize_with(normalizer)));
        result
    }
}

impl<T> Normalize for BTreeSet<T>
where
    T: Normalize + Ord,
    T::Output: Ord,
{
    type Output = BTreeSet<T::Output>;

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        self.into_iter()
            .map(|value| value.normalize_with(normalizer))
            .collect()
    }
}

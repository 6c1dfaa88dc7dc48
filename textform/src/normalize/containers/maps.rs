//! Normalization for map containers (values only).

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::normalize::{Normalizer, traits::Normalize};

// =============================================================================
// Map implementations (values only, keys unchanged)
// =============================================================================

impl<K, V, S> Normalize for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Normalize,
    S: BuildHasher + Clone,
{
    type Output = HashMap<K, V::Output, S>;

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        let hasher = self.hasher().clone();
        let mut result = HashMap::with_capacity_and_hasher(self.len(), hasher);
        result.extend(
            self.into_iter()
                .map(|(k, v)| (k, v.normalize_with(normalizer))),
        );
        result
    }
}

impl<K, V> Normalize for BTreeMap<K, V>
where
    K: Ord,
    V: Normalize,
{
    type Output = BTreeMap<K, V::Output>;

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        self.into_iter()
            .map(|(k, v)| (k, v.normalize_with(normalizer)))
            .collect()
    }
}

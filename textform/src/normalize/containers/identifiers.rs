//! Identifier leaves.

use uuid::Uuid;

use crate::normalize::{Normalizer, traits::Normalize};

impl Normalize for Uuid {
    type Output = String;

    fn normalize_with(self, normalizer: &Normalizer) -> String {
        normalizer.format_id(self)
    }
}

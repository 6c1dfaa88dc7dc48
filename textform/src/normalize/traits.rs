//! The typed normalization trait.

use super::Normalizer;
use crate::Value;

/// A type whose identifier leaves can be rewritten as text.
///
/// This is the typed counterpart of [`crate::normalize`]: `Uuid` becomes
/// `String`, containers map their elements, everything else passes through.
/// The output type mirrors the input shape, so `Vec<Option<Uuid>>` normalizes
/// to `Vec<Option<String>>` and `HashMap<K, Uuid>` to `HashMap<K, String>`.
///
/// Map keys keep their type and are never rewritten.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Normalize`",
    label = "this type cannot be walked for identifiers",
    note = "convert it into a `textform::Value` first, or implement `Normalize` for it"
)]
pub trait Normalize: Sized {
    /// Same shape as `Self`, with identifiers replaced by `String`.
    type Output;

    /// Normalizes using a specific configuration.
    #[must_use]
    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output;

    /// Normalizes to the canonical lowercase hyphenated form.
    #[must_use]
    fn normalize(self) -> Self::Output {
        self.normalize_with(&Normalizer::canonical())
    }
}

impl Normalize for Value {
    type Output = Value;

    fn normalize_with(self, normalizer: &Normalizer) -> Self::Output {
        normalizer.normalize(self)
    }
}

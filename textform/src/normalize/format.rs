//! Identifier text formats and the [`Normalizer`] configuration.

use uuid::Uuid;

use super::walk;
use crate::Value;

/// Text encoding used for identifier leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IdFormat {
    /// `67e55044-10b1-426f-9247-bb680e5fe0c8`
    #[default]
    Hyphenated,
    /// `67e5504410b1426f9247bb680e5fe0c8`
    Simple,
    /// `{67e55044-10b1-426f-9247-bb680e5fe0c8}`
    Braced,
    /// `urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8`
    Urn,
}

/// Configured normalization.
///
/// The default is the canonical form: lowercase [`IdFormat::Hyphenated`].
/// [`crate::normalize`] is `Normalizer::canonical().normalize(value)`.
///
/// ```rust
/// use textform::{IdFormat, Normalizer, Value};
/// use uuid::Uuid;
///
/// let normalizer = Normalizer::canonical()
///     .with_format(IdFormat::Simple)
///     .with_uppercase(true);
/// let id = Uuid::from_u128(0xABCD);
/// assert_eq!(
///     normalizer.normalize(Value::Uuid(id)),
///     Value::from("0000000000000000000000000000ABCD")
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Normalizer {
    format: IdFormat,
    uppercase: bool,
}

impl Normalizer {
    /// Lowercase hyphenated output, same as `Normalizer::default()`.
    pub const fn canonical() -> Self {
        Self {
            format: IdFormat::Hyphenated,
            uppercase: false,
        }
    }

    /// Uses a specific identifier format.
    #[must_use]
    pub fn with_format(mut self, format: IdFormat) -> Self {
        self.format = format;
        self
    }

    /// Emits uppercase hexadecimal digits. The `urn:uuid:` prefix stays lowercase.
    #[must_use]
    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    pub fn format(&self) -> IdFormat {
        self.format
    }

    pub fn is_uppercase(&self) -> bool {
        self.uppercase
    }

    /// Renders a single identifier in the configured format.
    pub fn format_id(&self, id: Uuid) -> String {
        let mut buffer = Uuid::encode_buffer();
        let text = match (self.format, self.uppercase) {
            (IdFormat::Hyphenated, false) => id.hyphenated().encode_lower(&mut buffer),
            (IdFormat::Hyphenated, true) => id.hyphenated().encode_upper(&mut buffer),
            (IdFormat::Simple, false) => id.simple().encode_lower(&mut buffer),
            (IdFormat::Simple, true) => id.simple().encode_upper(&mut buffer),
            (IdFormat::Braced, false) => id.braced().encode_lower(&mut buffer),
            (IdFormat::Braced, true) => id.braced().encode_upper(&mut buffer),
            (IdFormat::Urn, false) => id.urn().encode_lower(&mut buffer),
            (IdFormat::Urn, true) => id.urn().encode_upper(&mut buffer),
        };
        text.to_owned()
    }

    /// Returns a copy of `value` with every identifier leaf rendered as text.
    ///
    /// Consumes the input tree; containers are rebuilt, other leaves move over.
    pub fn normalize(&self, value: Value) -> Value {
        walk::normalize_owned(value, self)
    }

    /// Same as [`Normalizer::normalize`] without consuming `value`.
    ///
    /// Leaves are cloned; opaque leaves share their allocation with the input.
    pub fn normalize_ref(&self, value: &Value) -> Value {
        walk::normalize_borrowed(value, self)
    }
}

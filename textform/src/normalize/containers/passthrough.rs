//! Passthrough `Normalize` implementations for scalar-like types.

use std::{
    borrow::Cow,
    cmp::Ordering,
    marker::PhantomData,
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
    },
    time::{Duration, SystemTime},
};

use super::impl_normalize_passthrough;
use crate::{
    Key, Opaque,
    normalize::{Normalizer, traits::Normalize},
};

// =============================================================================
// Passthrough implementations (scalars and primitives)
// =============================================================================

impl_normalize_passthrough!(String);
impl_normalize_passthrough!(bool);
impl_normalize_passthrough!(char);

// Signed integers
impl_normalize_passthrough!(i8);
impl_normalize_passthrough!(i16);
impl_normalize_passthrough!(i32);
impl_normalize_passthrough!(i64);
impl_normalize_passthrough!(i128);
impl_normalize_passthrough!(isize);

// Unsigned integers
impl_normalize_passthrough!(u8);
impl_normalize_passthrough!(u16);
impl_normalize_passthrough!(u32);
impl_normalize_passthrough!(u64);
impl_normalize_passthrough!(u128);
impl_normalize_passthrough!(usize);

// Floating point
impl_normalize_passthrough!(f32);
impl_normalize_passthrough!(f64);

// Unit type
impl_normalize_passthrough!(());

// =============================================================================
// NonZero integer passthrough implementations
// =============================================================================

impl_normalize_passthrough!(NonZeroI8);
impl_normalize_passthrough!(NonZeroI16);
impl_normalize_passthrough!(NonZeroI32);
impl_normalize_passthrough!(NonZeroI64);
impl_normalize_passthrough!(NonZeroI128);
impl_normalize_passthrough!(NonZeroIsize);
impl_normalize_passthrough!(NonZeroU8);
impl_normalize_passthrough!(NonZeroU16);
impl_normalize_passthrough!(NonZeroU32);
impl_normalize_passthrough!(NonZeroU64);
impl_normalize_passthrough!(NonZeroU128);
impl_normalize_passthrough!(NonZeroUsize);

// =============================================================================
// Other std and crate passthrough implementations
// =============================================================================

impl_normalize_passthrough!(Duration);
impl_normalize_passthrough!(SystemTime);
impl_normalize_passthrough!(Ordering);

// Keys are never rewritten, and opaque payloads are never looked into.
impl_normalize_passthrough!(Key);
impl_normalize_passthrough!(Opaque);

impl<T> Normalize for PhantomData<T> {
    type Output = Self;

    fn normalize_with(self, _normalizer: &Normalizer) -> Self {
        self
    }
}

impl Normalize for Cow<'_, str> {
    type Output = Self;

    fn normalize_with(self, _normalizer: &Normalizer) -> Self {
        self
    }
}

impl Normalize for &str {
    type Output = Self;

    fn normalize_with(self, _normalizer: &Normalizer) -> Self {
        self
    }
}

// =============================================================================
// Date/time passthrough implementations (feature-gated)
// =============================================================================

#[cfg(feature = "chrono")]
mod chrono_passthrough {
    use chrono::{
        DateTime, Duration, FixedOffset, Local, Month, NaiveDate, NaiveDateTime, NaiveTime, Utc,
        Weekday,
    };

    use super::impl_normalize_passthrough;

    // DateTime variants
    impl_normalize_passthrough!(DateTime<Utc>);
    impl_normalize_passthrough!(DateTime<Local>);
    impl_normalize_passthrough!(DateTime<FixedOffset>);

    // Naive date/time types
    impl_normalize_passthrough!(NaiveDateTime);
    impl_normalize_passthrough!(NaiveDate);
    impl_normalize_passthrough!(NaiveTime);

    impl_normalize_passthrough!(Duration);

    // Calendar enums
    impl_normalize_passthrough!(Month);
    impl_normalize_passthrough!(Weekday);
}

#[cfg(feature = "time")]
mod time_passthrough {
    use time::{
        Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset, Weekday,
    };

    use super::impl_normalize_passthrough;

    impl_normalize_passthrough!(OffsetDateTime);
    impl_normalize_passthrough!(PrimitiveDateTime);
    impl_normalize_passthrough!(Date);
    impl_normalize_passthrough!(Time);
    impl_normalize_passthrough!(Duration);
    impl_normalize_passthrough!(UtcOffset);
    impl_normalize_passthrough!(Month);
    impl_normalize_passthrough!(Weekday);
}

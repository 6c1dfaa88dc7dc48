//! Normalization of value trees into a text-serializable form.
//!
//! This crate separates:
//! - **The value model** ([`Value`], [`Key`], [`Opaque`]): a closed tree of
//!   mappings, sequences, scalars and UUIDs.
//! - **Normalization** ([`normalize`], [`Normalizer`], [`Normalize`]): a pure
//!   walk that replaces every UUID leaf with its canonical text form and leaves
//!   everything else exactly as it was.
//!
//! What this crate does:
//! - builds value trees from Rust data (`From`, [`IntoValue`], `#[derive(IntoValue)]`)
//! - rewrites identifiers as text, in dynamic trees and in typed containers
//! - provides serialization and logging integrations behind feature flags
//!   (`json`, `tracing`, `slog`)
//!
//! What it does not do:
//! - perform I/O or logging on its own
//! - act as a general-purpose serialization library
//!
//! # Example
//!
//! ```rust
//! use textform::{Value, mapping, normalize, sequence};
//! use uuid::Uuid;
//!
//! let id = Uuid::from_u128(0x936d_a01f_9abd_4d9d_80c7_02af_85c8_22a8);
//! let run = mapping! {
//!     "id" => id,
//!     "tags" => sequence![id, "x"],
//!     "count" => 3,
//! };
//!
//! let normalized = normalize(run);
//! assert_eq!(
//!     normalized.get("id"),
//!     Some(&Value::from("936da01f-9abd-4d9d-80c7-02af85c822a8"))
//! );
//! assert_eq!(normalized.get("count"), Some(&Value::Int(3)));
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else,
    clippy::from_over_into
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use textform_derive::IntoValue;

#[allow(unused_extern_crates)]
extern crate self as textform;

// Module declarations
mod error;
#[cfg(feature = "json")]
mod json;
mod normalize;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;
mod value;

pub use error::{Error, Result};
#[cfg(feature = "json")]
pub use json::{NormalizedJsonExt, NormalizedJsonRef};
pub use normalize::{
    IdFormat, Normalize, NormalizedOutput, Normalizer, ToNormalizedOutput, normalize,
    normalize_ref,
};
pub use value::{IntoKey, IntoValue, Key, Mapping, Opaque, Value, ValueKind};

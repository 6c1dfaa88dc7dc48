//! Derive macros for `textform`.
//!
//! This crate generates the conversion code behind `#[derive(IntoValue)]`. It:
//! - reads `#[textform(...)]` attributes on fields and enum variants
//! - emits `textform::IntoValue` and `From<T> for textform::Value` impls
//!
//! It does **not** normalize anything. Normalization lives in the main
//! `textform` crate and runs on the produced `Value`.

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
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input};

mod attrs;
mod derive_enum;
mod derive_struct;
mod fields;
mod generics;
mod types;
use attrs::reject_container_attrs;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_into_value_bounds;

/// Derives `textform::IntoValue` (and `From<T> for textform::Value`) for
/// structs and enums.
///
/// # Conversion
///
/// - Structs with named fields become a `Mapping` keyed by field name.
/// - Tuple structs become a `Sequence`; a single-field tuple struct becomes
///   the inner field's value.
/// - Unit structs become `Null`.
/// - Unit enum variants become `Text` holding the variant name. Other
///   variants become a single-entry `Mapping` from the variant name to the
///   converted payload.
///
/// Every converted field must implement `IntoValue`. Generic parameters that
/// appear in converted fields receive an `IntoValue` bound.
///
/// # Field Attributes
///
/// - `#[textform(rename = "name")]`: use `name` as the key instead of the
///   field name. Only valid on named fields.
/// - `#[textform(skip)]`: leave the field out. `PhantomData` fields are always
///   left out.
///
/// # Variant Attributes
///
/// - `#[textform(rename = "name")]`: use `name` instead of the variant name.
///
/// Unions and container-level `#[textform(...)]` attributes are rejected at
/// compile time.
#[proc_macro_derive(IntoValue, attributes(textform))]
pub fn derive_into_value(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_attrs(&attrs)?;

    let mut used_generics = Vec::new();
    let body = match &data {
        Data::Struct(data) => derive_struct(data, &generics, &mut used_generics)?,
        Data::Enum(data) => derive_enum(data, &generics, &mut used_generics)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span,
                "`IntoValue` cannot be derived for unions",
            ));
        }
    };

    let root = crate_root();
    let bounded = add_into_value_bounds(generics, &used_generics);
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    Ok(quote! {
        impl #impl_generics #root::IntoValue for #ident #ty_generics #where_clause {
            fn into_value(self) -> #root::Value {
                #body
            }
        }

        impl #impl_generics ::core::convert::From<#ident #ty_generics> for #root::Value #where_clause {
            fn from(value: #ident #ty_generics) -> Self {
                #root::IntoValue::into_value(value)
            }
        }
    })
}

/// Returns the token stream to reference the textform crate root.
///
/// Handles crate renaming (e.g., `my_textform = { package = "textform", ... }`).
fn crate_root() -> TokenStream {
    match crate_name("textform") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::textform },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item = format_ident!("{}", item);
    quote! { #root::#item }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(tokens: TokenStream) -> Result<String> {
        let input: DeriveInput = syn::parse2(tokens)?;
        expand(input).map(|tokens| tokens.to_string().split_whitespace().collect())
    }

    #[test]
    fn emits_into_value_and_from_impls() {
        let expanded = expand_str(quote! {
            struct Run { id: u32 }
        })
        .unwrap();
        assert!(expanded.contains("IntoValueforRun"));
        assert!(expanded.contains("From<Run>"));
    }

    #[test]
    fn bounds_only_used_generics() {
        let expanded = expand_str(quote! {
            struct Wrapper<T, U> { inner: T, #[textform(skip)] extra: U }
        })
        .unwrap();
        assert!(expanded.contains("T:::textform::IntoValue"));
        assert!(!expanded.contains("U:::textform::IntoValue"));
    }

    #[test]
    fn unions_are_rejected() {
        let err = expand_str(quote! {
            union Bits { a: u32, b: f32 }
        })
        .unwrap_err();
        assert!(err.to_string().contains("cannot be derived for unions"));
    }

    #[test]
    fn container_attributes_are_rejected() {
        let err = expand_str(quote! {
            #[textform(rename = "x")]
            struct Run;
        })
        .unwrap_err();
        assert!(err.to_string().contains("only supported on fields"));
    }
}

//! Struct-specific `IntoValue` derivation.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{DataStruct, Result};

use crate::fields::{FieldsOutput, convert_fields};

/// Generates the `into_value` body for a struct.
///
/// The struct is destructured by move so every field is converted without
/// cloning.
pub(crate) fn derive_struct(
    data: &DataStruct,
    generics: &syn::Generics,
    used_generics: &mut Vec<Ident>,
) -> Result<TokenStream> {
    let FieldsOutput {
        pattern,
        value,
        is_unit,
    } = convert_fields(&data.fields, generics, used_generics)?;

    if is_unit {
        return Ok(quote! {
            let _ = self;
            #value
        });
    }

    Ok(quote! {
        let Self #pattern = self;
        #value
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn body(tokens: TokenStream) -> String {
        let input: DeriveInput = syn::parse2(tokens).unwrap();
        let syn::Data::Struct(data) = input.data else {
            panic!("expected a struct");
        };
        let mut used = Vec::new();
        derive_struct(&data, &input.generics, &mut used)
            .unwrap()
            .to_string()
    }

    #[test]
    fn named_fields_use_their_names() {
        let out = body(quote! {
            struct Run { id: u32, #[textform(rename = "runName")] name: String }
        });
        assert!(out.contains("\"id\""));
        assert!(out.contains("\"runName\""));
        assert!(!out.contains("\"name\""));
    }

    #[test]
    fn raw_identifiers_are_unprefixed() {
        let out = body(quote! {
            struct Item { r#type: u8 }
        });
        assert!(out.contains("\"type\""));
    }

    #[test]
    fn skipped_fields_are_ignored() {
        let out = body(quote! {
            struct Run { id: u32, #[textform(skip)] cache: Vec<u8> }
        });
        assert!(out.contains("cache : _"));
        assert!(!out.contains("\"cache\""));
    }

    #[test]
    fn newtype_converts_to_inner_value() {
        let out = body(quote! { struct RunId(u32); });
        assert!(!out.contains("Sequence"));
    }

    #[test]
    fn tuple_struct_converts_to_sequence() {
        let out = body(quote! { struct Pair(u32, String); });
        assert!(out.contains("Sequence"));
    }

    #[test]
    fn unit_struct_converts_to_null() {
        let out = body(quote! { struct Marker; });
        assert!(out.contains("Null"));
    }

    #[test]
    fn rename_on_tuple_field_is_rejected() {
        let input: DeriveInput = syn::parse2(quote! {
            struct Pair(#[textform(rename = "a")] u32, u32);
        })
        .unwrap();
        let syn::Data::Struct(data) = input.data else {
            panic!("expected a struct");
        };
        let err = derive_struct(&data, &input.generics, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("only supported on named fields"));
    }
}

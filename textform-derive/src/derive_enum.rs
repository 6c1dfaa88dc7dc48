//! Enum-specific `IntoValue` derivation.
//!
//! Unit variants become their name as text. Variants with data become a
//! single-entry mapping from the variant name to the converted payload.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{DataEnum, Result, spanned::Spanned};

use crate::{
    attrs::parse_variant_options,
    crate_root,
    fields::{FieldsOutput, convert_fields, map_binding},
};

pub(crate) fn derive_enum(
    data: &DataEnum,
    generics: &syn::Generics,
    used_generics: &mut Vec<Ident>,
) -> Result<TokenStream> {
    let root = crate_root();
    let map = map_binding();
    let mut arms = Vec::new();

    for variant in &data.variants {
        let span = variant.span();
        let options = parse_variant_options(variant)?;
        let variant_ident = &variant.ident;
        let name = options
            .rename
            .unwrap_or_else(|| variant_ident.to_string());

        let FieldsOutput {
            pattern,
            value,
            is_unit,
        } = convert_fields(&variant.fields, generics, used_generics)?;

        let arm = if is_unit {
            quote_spanned! { span =>
                Self::#variant_ident => #root::Value::Text(::std::string::String::from(#name)),
            }
        } else {
            quote_spanned! { span =>
                Self::#variant_ident #pattern => {
                    let mut #map = #root::Mapping::new();
                    #map.insert(
                        #root::Key::Text(::std::string::String::from(#name)),
                        #value,
                    );
                    #root::Value::Mapping(#map)
                }
            }
        };
        arms.push(arm);
    }

    Ok(quote! {
        match self {
            #(#arms)*
        }
    })
}

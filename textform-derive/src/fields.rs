//! Shared field conversion logic for struct and enum derivation.
//!
//! Both derivations destructure `self` (or a variant) into bindings and then
//! build a `Value` from them, so they share the pattern and expression
//! generated here.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{Fields, Result, ext::IdentExt, spanned::Spanned};

use crate::{attrs::parse_field_options, crate_root, generics::collect_generics_from_type};

/// Destructuring pattern plus the expression that converts the bindings.
pub(crate) struct FieldsOutput {
    /// `{ a, b: _ }`, `(field_0, _)`, or empty for unit shapes.
    pub(crate) pattern: TokenStream,
    /// Expression of type `Value` built from the pattern's bindings.
    pub(crate) value: TokenStream,
    /// `true` for unit structs and unit variants.
    pub(crate) is_unit: bool,
}

/// Name of the mapping under construction in generated code.
///
/// Mixed-site hygiene keeps it apart from user bindings, so a field called
/// `map` does not shadow it.
pub(crate) fn map_binding() -> Ident {
    Ident::new("map", Span::mixed_site())
}

/// Generates the conversion for one set of fields.
///
/// ## Conversion Rules
///
/// | Shape                      | Value                                  |
/// |----------------------------|----------------------------------------|
/// | `{ a, b }`                 | `Mapping` keyed by field name          |
/// | `(x)`                      | the single field's value               |
/// | `(x, y, ...)`              | `Sequence` in field order              |
/// | unit                       | `Null`                                 |
pub(crate) fn convert_fields(
    fields: &Fields,
    generics: &syn::Generics,
    used_generics: &mut Vec<Ident>,
) -> Result<FieldsOutput> {
    match fields {
        Fields::Named(named) => convert_named(named, generics, used_generics),
        Fields::Unnamed(unnamed) => convert_unnamed(unnamed, generics, used_generics),
        Fields::Unit => {
            let root = crate_root();
            Ok(FieldsOutput {
                pattern: TokenStream::new(),
                value: quote! { #root::Value::Null },
                is_unit: true,
            })
        }
    }
}

fn convert_named(
    fields: &syn::FieldsNamed,
    generics: &syn::Generics,
    used_generics: &mut Vec<Ident>,
) -> Result<FieldsOutput> {
    let root = crate_root();
    let map = map_binding();
    let mut patterns = Vec::new();
    let mut inserts = Vec::new();

    for field in &fields.named {
        let span = field.span();
        let options = parse_field_options(field)?;
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(span, "named field without an identifier"))?;

        if options.skip {
            patterns.push(quote! { #ident: _ });
            continue;
        }

        collect_generics_from_type(&field.ty, generics, used_generics);
        let name = options
            .rename
            .unwrap_or_else(|| ident.unraw().to_string());
        inserts.push(quote_spanned! { span =>
            #map.insert(
                #root::Key::Text(::std::string::String::from(#name)),
                #root::IntoValue::into_value(#ident),
            );
        });
        patterns.push(quote! { #ident });
    }

    Ok(FieldsOutput {
        pattern: quote! { { #(#patterns),* } },
        value: quote! {{
            #[allow(unused_mut)]
            let mut #map = #root::Mapping::new();
            #(#inserts)*
            #root::Value::Mapping(#map)
        }},
        is_unit: false,
    })
}

fn convert_unnamed(
    fields: &syn::FieldsUnnamed,
    generics: &syn::Generics,
    used_generics: &mut Vec<Ident>,
) -> Result<FieldsOutput> {
    let root = crate_root();
    let mut patterns = Vec::new();
    let mut elements = Vec::new();

    for (index, field) in fields.unnamed.iter().enumerate() {
        let span = field.span();
        let options = parse_field_options(field)?;
        if options.rename.is_some() {
            return Err(syn::Error::new(
                span,
                "`rename` is only supported on named fields",
            ));
        }

        if options.skip {
            patterns.push(quote! { _ });
            continue;
        }

        collect_generics_from_type(&field.ty, generics, used_generics);
        let binding = format_ident!("field_{index}");
        elements.push(quote_spanned! { span =>
            #root::IntoValue::into_value(#binding)
        });
        patterns.push(quote! { #binding });
    }

    // A newtype converts to its inner value; anything else is a sequence.
    let value = match (fields.unnamed.len(), elements.as_slice()) {
        (1, [single]) => single.clone(),
        _ => quote! {
            #root::Value::Sequence(::std::vec![#(#elements),*])
        },
    };

    Ok(FieldsOutput {
        pattern: quote! { ( #(#patterns),* ) },
        value,
        is_unit: false,
    })
}

//! Parsing of `#[textform(...)]` attributes.
//!
//! This module maps attribute syntax to conversion decisions and produces
//! structured errors for invalid forms.

use syn::{Attribute, LitStr, Result, spanned::Spanned};

use crate::types::is_phantom_data;

/// Conversion options for a single field.
///
/// | Attribute                        | Effect                               |
/// |----------------------------------|--------------------------------------|
/// | None                             | converted under its own name         |
/// | `#[textform(rename = "name")]`   | converted under `name`               |
/// | `#[textform(skip)]`              | left out of the value                |
///
/// `PhantomData` fields are always left out.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) rename: Option<String>,
    pub(crate) skip: bool,
}

/// Conversion options for an enum variant.
#[derive(Clone, Debug, Default)]
pub(crate) struct VariantOptions {
    pub(crate) rename: Option<String>,
}

fn textform_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("textform"))
}

pub(crate) fn parse_field_options(field: &syn::Field) -> Result<FieldOptions> {
    let mut options = FieldOptions {
        skip: is_phantom_data(&field.ty),
        ..FieldOptions::default()
    };
    for attr in textform_attrs(&field.attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if options.rename.is_some() {
                    return Err(meta.error("duplicate `rename` on the same field"));
                }
                let name: LitStr = meta.value()?.parse()?;
                options.rename = Some(name.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else {
                Err(meta.error(
                    "unknown field attribute: expected #[textform(rename = \"...\")] \
                     or #[textform(skip)]",
                ))
            }
        })?;
    }
    Ok(options)
}

pub(crate) fn parse_variant_options(variant: &syn::Variant) -> Result<VariantOptions> {
    let mut options = VariantOptions::default();
    for attr in textform_attrs(&variant.attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if options.rename.is_some() {
                    return Err(meta.error("duplicate `rename` on the same variant"));
                }
                let name: LitStr = meta.value()?.parse()?;
                options.rename = Some(name.value());
                Ok(())
            } else {
                Err(meta.error("unknown variant attribute: expected #[textform(rename = \"...\")]"))
            }
        })?;
    }
    Ok(options)
}

/// Rejects `#[textform(...)]` on the type itself; there are no container options.
pub(crate) fn reject_container_attrs(attrs: &[Attribute]) -> Result<()> {
    match textform_attrs(attrs).next() {
        Some(attr) => Err(syn::Error::new(
            attr.span(),
            "#[textform(...)] is only supported on fields and enum variants",
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn first_field(tokens: proc_macro2::TokenStream) -> syn::Field {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        match input.data {
            syn::Data::Struct(data) => data
                .fields
                .into_iter()
                .next()
                .expect("struct should have a field"),
            _ => panic!("expected a struct"),
        }
    }

    #[test]
    fn no_attribute_keeps_field() {
        let field = first_field(quote! { struct Dummy { id: u32 } });
        let options = parse_field_options(&field).unwrap();
        assert!(!options.skip);
        assert!(options.rename.is_none());
    }

    #[test]
    fn rename_is_parsed() {
        let field = first_field(quote! {
            struct Dummy { #[textform(rename = "runId")] run_id: u32 }
        });
        let options = parse_field_options(&field).unwrap();
        assert_eq!(options.rename.as_deref(), Some("runId"));
    }

    #[test]
    fn skip_and_rename_combine() {
        let field = first_field(quote! {
            struct Dummy { #[textform(skip, rename = "x")] secret: String }
        });
        let options = parse_field_options(&field).unwrap();
        assert!(options.skip);
        assert_eq!(options.rename.as_deref(), Some("x"));
    }

    #[test]
    fn phantom_data_is_skipped() {
        let field = first_field(quote! {
            struct Dummy<T> { marker: std::marker::PhantomData<T> }
        });
        assert!(parse_field_options(&field).unwrap().skip);
    }

    #[test]
    fn duplicate_rename_is_rejected() {
        let field = first_field(quote! {
            struct Dummy {
                #[textform(rename = "a")]
                #[textform(rename = "b")]
                id: u32
            }
        });
        let err = parse_field_options(&field).unwrap_err();
        assert!(err.to_string().contains("duplicate `rename`"));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let field = first_field(quote! {
            struct Dummy { #[textform(flatten)] id: u32 }
        });
        let err = parse_field_options(&field).unwrap_err();
        assert!(err.to_string().contains("unknown field attribute"));
    }

    #[test]
    fn variant_rename_is_parsed() {
        let input: DeriveInput = syn::parse2(quote! {
            enum Dummy { #[textform(rename = "done")] Done }
        })
        .unwrap();
        let syn::Data::Enum(data) = input.data else {
            panic!("expected an enum");
        };
        let options = parse_variant_options(&data.variants[0]).unwrap();
        assert_eq!(options.rename.as_deref(), Some("done"));
    }

    #[test]
    fn container_attributes_are_rejected() {
        let input: DeriveInput = syn::parse2(quote! {
            #[textform(rename = "x")]
            struct Dummy;
        })
        .unwrap();
        assert!(reject_container_attrs(&input.attrs).is_err());
    }
}

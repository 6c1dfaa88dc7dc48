//! Type utilities for the derive macro.

/// Checks if a type is `PhantomData<...>` or `std::marker::PhantomData<...>`.
///
/// `PhantomData<T>` never carries data, so such fields are left out of the
/// generated value and `T` does not need an `IntoValue` bound.
pub(crate) fn is_phantom_data(ty: &syn::Type) -> bool {
    if let syn::Type::Path(path) = ty {
        // Accept both bare `PhantomData<T>` and qualified paths like
        // `std::marker::PhantomData<T>` or `::core::marker::PhantomData<T>`.
        if let Some(last_segment) = path.path.segments.last() {
            return last_segment.ident == "PhantomData"
                && matches!(
                    last_segment.arguments,
                    syn::PathArguments::AngleBracketed(_)
                );
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn parse_type(tokens: proc_macro2::TokenStream) -> syn::Type {
        syn::parse2(tokens).expect("should parse as type")
    }

    #[test]
    fn phantom_data_bare() {
        assert!(is_phantom_data(&parse_type(quote! { PhantomData<T> })));
    }

    #[test]
    fn phantom_data_qualified() {
        assert!(is_phantom_data(&parse_type(
            quote! { ::core::marker::PhantomData<fn() -> T> }
        )));
    }

    #[test]
    fn other_types_are_not_phantom() {
        assert!(!is_phantom_data(&parse_type(quote! { Vec<T> })));
        assert!(!is_phantom_data(&parse_type(quote! { PhantomData })));
        assert!(!is_phantom_data(&parse_type(quote! { &'static str })));
    }
}

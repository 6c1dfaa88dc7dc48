//! Generic parameter discovery and `IntoValue` bounds.
//!
//! Bounds are added only for generics that appear in converted fields.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` fields are left out of the generated value, and the
//! visitor does not look inside them:
//!
//! ```ignore
//! #[derive(IntoValue)]
//! struct TypedId<T> {
//!     id: Uuid,
//!     _marker: PhantomData<T>,  // T does NOT require IntoValue
//! }
//! ```

use syn::{GenericArgument, Ident, PathArguments, ReturnType, Type, TypeParamBound, parse_quote};

use crate::crate_path;

/// Records every declared type parameter that a field type mentions.
struct UsedGenerics<'a> {
    declared: &'a syn::Generics,
    found: &'a mut Vec<Ident>,
}

impl UsedGenerics<'_> {
    fn record(&mut self, ident: &Ident) {
        let declared = self.declared.type_params().any(|param| param.ident == *ident);
        if declared && !self.found.contains(ident) {
            self.found.push(ident.clone());
        }
    }

    fn bound(&mut self, bound: &TypeParamBound) {
        if let TypeParamBound::Trait(trait_bound) = bound {
            self.path(&trait_bound.path);
        }
    }

    fn output(&mut self, output: &ReturnType) {
        if let ReturnType::Type(_, ty) = output {
            self.ty(ty);
        }
    }

    fn arguments(&mut self, arguments: &PathArguments) {
        match arguments {
            PathArguments::AngleBracketed(bracketed) => {
                for argument in &bracketed.args {
                    match argument {
                        GenericArgument::Type(ty) => self.ty(ty),
                        GenericArgument::AssocType(assoc) => self.ty(&assoc.ty),
                        GenericArgument::Constraint(constraint) => {
                            constraint.bounds.iter().for_each(|bound| self.bound(bound));
                        }
                        _ => {}
                    }
                }
            }
            PathArguments::Parenthesized(parenthesized) => {
                parenthesized.inputs.iter().for_each(|input| self.ty(input));
                self.output(&parenthesized.output);
            }
            PathArguments::None => {}
        }
    }

    fn path(&mut self, path: &syn::Path) {
        // `PhantomData<T>` is never converted, so `T` needs no bound.
        if path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "PhantomData")
        {
            return;
        }
        for segment in &path.segments {
            self.record(&segment.ident);
            self.arguments(&segment.arguments);
        }
    }

    fn ty(&mut self, ty: &Type) {
        match ty {
            Type::Path(type_path) => {
                if let Some(qself) = &type_path.qself {
                    self.ty(&qself.ty);
                }
                self.path(&type_path.path);
            }
            Type::Reference(inner) => self.ty(&inner.elem),
            Type::Ptr(inner) => self.ty(&inner.elem),
            Type::Slice(inner) => self.ty(&inner.elem),
            Type::Array(inner) => self.ty(&inner.elem),
            Type::Paren(inner) => self.ty(&inner.elem),
            Type::Group(inner) => self.ty(&inner.elem),
            Type::Tuple(tuple) => tuple.elems.iter().for_each(|elem| self.ty(elem)),
            Type::TraitObject(object) => object.bounds.iter().for_each(|bound| self.bound(bound)),
            Type::ImplTrait(opaque) => opaque.bounds.iter().for_each(|bound| self.bound(bound)),
            Type::BareFn(function) => {
                function.inputs.iter().for_each(|input| self.ty(&input.ty));
                self.output(&function.output);
            }
            _ => {}
        }
    }
}

/// Appends the type parameters of `generics` that `ty` mentions to `result`,
/// in first-seen order and without duplicates.
pub(crate) fn collect_generics_from_type(
    ty: &Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    UsedGenerics {
        declared: generics,
        found: result,
    }
    .ty(ty);
}

/// Adds `IntoValue` bounds to generic parameters used in converted fields.
pub(crate) fn add_into_value_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
) -> syn::Generics {
    let into_value = crate_path("IntoValue");
    for param in generics.type_params_mut() {
        if used_generics.contains(&param.ident) {
            param.bounds.push(parse_quote!(#into_value));
        }
    }
    generics
}

//! Generic type parameter handling and trait bound management.
//!
//! `Walk` bounds are added only for generics that appear in walked fields.
//! Fields marked `#[redact(skip)]` never contribute bounds, and neither does
//! anything inside `PhantomData<T>`, a set, or a map's key and hasher:
//!
//! ```ignore
//! #[derive(Redact)]
//! struct TypedId<T> {
//!     id: String,
//!     _marker: PhantomData<T>,  // T is not required to implement Walk
//! }
//! ```

use syn::{parse_quote, Ident};

use crate::crate_path;

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            let Some(segment) = path.path.segments.last() else {
                return;
            };
            let walked_args = match segment.ident.to_string().as_str() {
                "PhantomData" | "HashSet" | "BTreeSet" => return,
                // Only the value type is walked; keys and the hasher are not.
                "HashMap" | "BTreeMap" => 1..2,
                _ => 0..usize::MAX,
            };

            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                let types = args.args.iter().filter_map(|arg| match arg {
                    syn::GenericArgument::Type(inner_ty) => Some(inner_ty),
                    _ => None,
                });
                for (index, inner_ty) in types.enumerate() {
                    if walked_args.contains(&index) {
                        collect_generics_from_type(inner_ty, generics, result);
                    }
                }
            }

            for param in generics.type_params() {
                if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                    result.push(param.ident.clone());
                }
            }
        }
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        syn::Type::Group(group) => collect_generics_from_type(&group.elem, generics, result),
        _ => {}
    }
}

/// Adds `Walk` bounds to generic parameters used in walked fields.
pub(crate) fn add_walk_bounds(mut generics: syn::Generics, used_generics: &[Ident]) -> syn::Generics {
    let walk_path = crate_path("Walk");
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(#walk_path));
        }
    }
    generics
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn collect(ty: proc_macro2::TokenStream, generics: proc_macro2::TokenStream) -> Vec<String> {
        let ty: syn::Type = syn::parse2(ty).expect("should parse as Type");
        let generics: syn::Generics = syn::parse2(generics).expect("should parse as Generics");
        let mut result = Vec::new();
        collect_generics_from_type(&ty, &generics, &mut result);
        result.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn nested_generic_is_collected() {
        assert_eq!(collect(quote! { Vec<Option<T>> }, quote! { <T, U> }), vec!["T"]);
    }

    #[test]
    fn phantom_data_is_skipped() {
        assert!(collect(quote! { PhantomData<T> }, quote! { <T> }).is_empty());
    }

    #[test]
    fn array_element_is_collected() {
        assert_eq!(collect(quote! { [T; 4] }, quote! { <T> }), vec!["T"]);
    }

    #[test]
    fn map_value_parameter_is_collected_once() {
        assert_eq!(
            collect(quote! { HashMap<K, Vec<K>> }, quote! { <K> }),
            vec!["K"]
        );
    }

    #[test]
    fn map_key_and_hasher_are_skipped() {
        assert!(collect(quote! { HashMap<K, String, S> }, quote! { <K, S> }).is_empty());
        assert_eq!(
            collect(quote! { std::collections::BTreeMap<K, V> }, quote! { <K, V> }),
            vec!["V"]
        );
    }

    #[test]
    fn set_members_are_skipped() {
        assert!(collect(quote! { HashSet<T> }, quote! { <T> }).is_empty());
        assert!(collect(quote! { Option<BTreeSet<T>> }, quote! { <T> }).is_empty());
    }
}

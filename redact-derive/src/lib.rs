//! Derive macro for `redact`.
//!
//! This crate generates the traversal code behind `#[derive(Redact)]`. It:
//! - reads `#[redact(...)]` field attributes
//! - emits a `Walk` implementation that visits each field with its tag
//!
//! It does **not** define tags, policies or the registry. Those live in the
//! main `redact` crate and are applied at runtime.

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
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::{Ident, Span, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
mod types;
use container::reject_container_attributes;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::add_walk_bounds;
use transform::{AMBIENT, POLICY};

/// Derives `redact::Walk` for structs and enums.
///
/// # Field Attributes
///
/// - **No annotation**: the field is walked with the empty tag. String leaves
///   reached through it are redacted by the opt-out and opt-in policies.
///
/// - `#[redact("value")]`: the field is walked with `value` as its tag. The
///   reserved values are `"nonsecret"` (kept by the opt-out policies) and
///   `"snapshot"` (kept by the opt-in policy); anything else is a registry key.
///   The tag also governs strings inside the field's own `Option`, `Box`,
///   sequence or map values.
///
/// - `#[redact(skip)]`: the field is never visited. Its type does not need to
///   implement `Walk`.
///
/// Every other field type must implement `Walk`.
///
/// # String wrappers
///
/// A struct with a named field `string` of type `String` is a string wrapper.
/// When such a struct is reached through a tagged field under
/// `redact::sanitize_named`, only that payload is transformed, with the
/// field's tag.
///
/// Unions are rejected at compile time, as is `#[redact]` on the type itself.
#[proc_macro_derive(Redact, attributes(redact))]
pub fn derive_redact(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the redact crate root.
///
/// Handles crate renaming (e.g., `my_redact = { package = "redact", ... }`).
/// Inside the `redact` crate itself the path still starts with `::redact`,
/// which resolves through its `extern crate self as redact;`.
fn crate_root() -> TokenStream {
    match crate_name("redact") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::redact },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

struct DeriveOutput {
    walk_body: TokenStream,
    used_generics: Vec<Ident>,
    wrapped_field: Option<Ident>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_attributes(&attrs)?;

    let crate_root = crate_root();

    let derive_output = match data {
        Data::Struct(data) => {
            let output = derive_struct(data, &generics)?;
            DeriveOutput {
                walk_body: output.walk_body,
                used_generics: output.used_generics,
                wrapped_field: output.wrapped_field,
            }
        }
        Data::Enum(data) => {
            let output = derive_enum(data, &generics)?;
            DeriveOutput {
                walk_body: output.walk_body,
                used_generics: output.used_generics,
                wrapped_field: None,
            }
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Redact` cannot be derived for unions",
            ));
        }
    };

    let walk_generics = add_walk_bounds(generics, &derive_output.used_generics);
    let (impl_generics, ty_generics, where_clause) = walk_generics.split_for_impl();
    let walk_body = &derive_output.walk_body;
    let ambient = Ident::new(AMBIENT, Span::call_site());
    let policy = Ident::new(POLICY, Span::call_site());

    let wrapped_text = derive_output.wrapped_field.map(|field| {
        quote! {
            fn wrapped_text(&mut self) -> ::core::option::Option<&mut ::std::string::String> {
                ::core::option::Option::Some(&mut self.#field)
            }
        }
    });

    Ok(quote! {
        impl #impl_generics #crate_root::Walk for #ident #ty_generics #where_clause {
            const SHAPE: #crate_root::Shape = #crate_root::Shape::Struct;

            #[allow(unused_variables, non_camel_case_types)]
            fn walk<__RedactPolicy: #crate_root::Policy + ?Sized>(
                &mut self,
                #ambient: #crate_root::Ambient<'_>,
                #policy: &__RedactPolicy,
            ) -> ::core::result::Result<(), #crate_root::WalkError> {
                #walk_body
                ::core::result::Result::Ok(())
            }

            #wrapped_text
        }
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::expand;

    fn expand_str(tokens: proc_macro2::TokenStream) -> String {
        let input = syn::parse2(tokens).expect("should parse as DeriveInput");
        expand(input)
            .expect("derive should succeed")
            .to_string()
            .replace(' ', "")
    }

    #[test]
    fn struct_visits_tagged_and_untagged_fields() {
        let output = expand_str(quote! {
            struct Login {
                password: String,
                #[redact("nonsecret")]
                username: String,
                #[redact(skip)]
                attempts: Counter,
            }
        });
        assert!(output.contains("TagValue::Empty"));
        assert!(output.contains("TagValue::parse(\"nonsecret\")"));
        assert!(!output.contains("attempts"));
    }

    #[test]
    fn string_field_makes_a_wrapper() {
        let output = expand_str(quote! {
            struct Wrapper {
                string: String,
                valid: bool,
            }
        });
        assert!(output.contains("fnwrapped_text"));
    }

    #[test]
    fn skipped_string_field_is_not_a_wrapper() {
        let output = expand_str(quote! {
            struct Wrapper {
                #[redact(skip)]
                string: String,
            }
        });
        assert!(!output.contains("fnwrapped_text"));
    }

    #[test]
    fn generic_in_walked_field_gets_walk_bound() {
        let output = expand_str(quote! {
            struct Page<T, M> {
                items: Vec<T>,
                #[redact(skip)]
                meta: M,
            }
        });
        assert!(output.contains("T:::redact::Walk"));
        assert!(!output.contains("M:::redact::Walk"));
    }

    #[test]
    fn union_is_rejected() {
        let input = syn::parse2(quote! {
            union Bits { a: u32, b: f32 }
        })
        .expect("should parse as DeriveInput");
        let err = expand(input).unwrap_err();
        assert!(err.to_string().contains("cannot be derived for unions"));
    }

    #[test]
    fn container_attribute_is_rejected() {
        let input = syn::parse2(quote! {
            #[redact("nonsecret")]
            struct Whole { value: String }
        })
        .expect("should parse as DeriveInput");
        assert!(expand(input).is_err());
    }
}

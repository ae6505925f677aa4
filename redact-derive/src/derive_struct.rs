//! Struct-specific `Walk` derivation.
//!
//! This module generates the field visits for a struct, detects the string
//! wrapper shape, and collects generic parameters that require trait bounds.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataStruct, Fields, Result};

use crate::{
    strategy::{parse_field_tag, FieldTag},
    transform::{generate_field_visit, DeriveContext},
    types::{is_string_type, WRAPPED_FIELD},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) walk_body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
    /// The `string: String` field, when the struct is a string wrapper.
    pub(crate) wrapped_field: Option<Ident>,
}

pub(crate) fn derive_struct(data: DataStruct, generics: &syn::Generics) -> Result<StructDeriveOutput> {
    match data.fields {
        Fields::Named(fields) => derive_named_struct(fields, generics),
        Fields::Unnamed(fields) => derive_unnamed_struct(fields, generics),
        Fields::Unit => Ok(StructDeriveOutput {
            walk_body: quote! {},
            used_generics: Vec::new(),
            wrapped_field: None,
        }),
    }
}

fn derive_named_struct(fields: syn::FieldsNamed, generics: &syn::Generics) -> Result<StructDeriveOutput> {
    let mut bindings = Vec::new();
    let mut visits = Vec::new();
    let mut used_generics = Vec::new();
    let mut wrapped_field = None;

    let mut ctx = DeriveContext {
        generics,
        used_generics: &mut used_generics,
    };

    for field in fields.named {
        let span = field.span();
        let tag = parse_field_tag(&field.attrs)?;
        let Some(ident) = field.ident else {
            continue;
        };
        let name = ident.to_string();

        if name == WRAPPED_FIELD && is_string_type(&field.ty) && !matches!(tag, FieldTag::Skip) {
            wrapped_field = Some(ident.clone());
        }

        if let Some(visit) = generate_field_visit(&mut ctx, &field.ty, &ident, &name, span, &tag) {
            bindings.push(ident);
            visits.push(visit);
        }
    }

    Ok(StructDeriveOutput {
        walk_body: quote! {
            let Self { #(#bindings,)* .. } = self;
            #(#visits)*
        },
        used_generics,
        wrapped_field,
    })
}

fn derive_unnamed_struct(fields: syn::FieldsUnnamed, generics: &syn::Generics) -> Result<StructDeriveOutput> {
    let mut patterns = Vec::new();
    let mut visits = Vec::new();
    let mut used_generics = Vec::new();

    let mut ctx = DeriveContext {
        generics,
        used_generics: &mut used_generics,
    };

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let span = field.span();
        let binding = format_ident!("field_{index}");
        let tag = parse_field_tag(&field.attrs)?;

        match generate_field_visit(&mut ctx, &field.ty, &binding, &index.to_string(), span, &tag) {
            Some(visit) => {
                patterns.push(quote! { #binding });
                visits.push(visit);
            }
            None => patterns.push(quote! { _ }),
        }
    }

    Ok(StructDeriveOutput {
        walk_body: quote! {
            let Self ( #(#patterns),* ) = self;
            #(#visits)*
        },
        used_generics,
        wrapped_field: None,
    })
}

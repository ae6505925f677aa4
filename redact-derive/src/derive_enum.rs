//! Enum-specific `Walk` derivation.
//!
//! Every variant is walked like a struct: its fields are visited with their
//! own tags. Unit variants have nothing to visit.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{spanned::Spanned, DataEnum, Fields, Result};

use crate::{
    strategy::parse_field_tag,
    transform::{generate_field_visit, DeriveContext},
};

pub(crate) struct EnumDeriveOutput {
    pub(crate) walk_body: TokenStream,
    pub(crate) used_generics: Vec<Ident>,
}

pub(crate) fn derive_enum(data: DataEnum, generics: &syn::Generics) -> Result<EnumDeriveOutput> {
    let mut arms = Vec::new();
    let mut used_generics = Vec::new();

    for variant in data.variants {
        let variant_ident = variant.ident;
        let mut ctx = DeriveContext {
            generics,
            used_generics: &mut used_generics,
        };

        let arm = match variant.fields {
            Fields::Unit => quote! { Self::#variant_ident => {} },
            Fields::Named(fields) => derive_named_variant(&mut ctx, &variant_ident, fields)?,
            Fields::Unnamed(fields) => derive_unnamed_variant(&mut ctx, &variant_ident, fields)?,
        };
        arms.push(arm);
    }

    // An empty enum has no values, so there is nothing to match on.
    let walk_body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms)*
            }
        }
    };

    Ok(EnumDeriveOutput {
        walk_body,
        used_generics,
    })
}

fn derive_named_variant(
    ctx: &mut DeriveContext<'_>,
    variant_ident: &Ident,
    fields: syn::FieldsNamed,
) -> Result<TokenStream> {
    let mut bindings = Vec::new();
    let mut visits = Vec::new();

    for field in fields.named {
        let span = field.span();
        let tag = parse_field_tag(&field.attrs)?;
        let Some(ident) = field.ident else {
            continue;
        };
        let name = format!("{variant_ident}.{ident}");

        if let Some(visit) = generate_field_visit(ctx, &field.ty, &ident, &name, span, &tag) {
            bindings.push(ident);
            visits.push(visit);
        }
    }

    Ok(quote! {
        Self::#variant_ident { #(#bindings,)* .. } => {
            #(#visits)*
        }
    })
}

fn derive_unnamed_variant(
    ctx: &mut DeriveContext<'_>,
    variant_ident: &Ident,
    fields: syn::FieldsUnnamed,
) -> Result<TokenStream> {
    let mut patterns = Vec::new();
    let mut visits = Vec::new();

    for (index, field) in fields.unnamed.into_iter().enumerate() {
        let span = field.span();
        let binding = format_ident!("field_{index}");
        let tag = parse_field_tag(&field.attrs)?;
        let name = format!("{variant_ident}.{index}");

        match generate_field_visit(ctx, &field.ty, &binding, &name, span, &tag) {
            Some(visit) => {
                patterns.push(quote! { #binding });
                visits.push(visit);
            }
            None => patterns.push(quote! { _ }),
        }
    }

    Ok(quote! {
        Self::#variant_ident ( #(#patterns),* ) => {
            #(#visits)*
        }
    })
}

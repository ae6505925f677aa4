//! Shared field visiting logic for struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote_spanned;

use crate::{crate_path, generics::collect_generics_from_type, strategy::FieldTag};

/// Identifiers the generated `walk` uses for its parameters. Prefixed so they
/// cannot collide with field bindings.
pub(crate) const AMBIENT: &str = "__redact_ambient";
pub(crate) const POLICY: &str = "__redact_policy";

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) used_generics: &'a mut Vec<Ident>,
}

/// Generates the visit for a single field.
///
/// Returns `None` for `#[redact(skip)]` fields, which are not bound at all.
///
/// | Tag | Generated call |
/// |-----|----------------|
/// | None | `visit_field(binding, name, TagValue::Empty, ..)` |
/// | `#[redact("v")]` | `visit_field(binding, name, TagValue::parse("v"), ..)` |
/// | `#[redact(skip)]` | nothing |
pub(crate) fn generate_field_visit(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    name: &str,
    span: Span,
    tag: &FieldTag,
) -> Option<TokenStream> {
    let visit_path = crate_path("visit_field");
    let tag_path = crate_path("TagValue");
    let ambient = Ident::new(AMBIENT, Span::call_site());
    let policy = Ident::new(POLICY, Span::call_site());

    let tag_value = match tag {
        FieldTag::Skip => return None,
        FieldTag::Untagged => quote_spanned! { span => #tag_path::Empty },
        FieldTag::Tagged(value) => quote_spanned! { span => #tag_path::parse(#value) },
    };

    collect_generics_from_type(ty, ctx.generics, ctx.used_generics);
    Some(quote_spanned! { span =>
        #visit_path(#binding, #name, #tag_value, #ambient, #policy);
    })
}

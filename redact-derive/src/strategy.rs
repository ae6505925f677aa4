//! Parsing of `#[redact(...)]` field attributes.
//!
//! This module maps attribute syntax to a field's tag and produces structured
//! errors for invalid forms.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Ident, LitStr, Meta, Result};

/// How a field takes part in the walk.
///
/// | Attribute | Variant | Behavior |
/// |-----------|---------|----------|
/// | None | `Untagged` | Walked with the empty tag |
/// | `#[redact("value")]` | `Tagged(value)` | Walked with `value` as its tag |
/// | `#[redact(skip)]` | `Skip` | Never visited |
#[derive(Clone, Debug)]
pub(crate) enum FieldTag {
    Untagged,
    Tagged(LitStr),
    /// The field's type does not need to implement `Walk`.
    Skip,
}

fn set_tag(target: &mut Option<FieldTag>, next: FieldTag, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[redact] attributes specified on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

fn parse_list(tokens: proc_macro2::TokenStream, span: Span) -> Result<FieldTag> {
    if let Ok(value) = syn::parse2::<LitStr>(tokens.clone()) {
        return Ok(FieldTag::Tagged(value));
    }
    match syn::parse2::<Ident>(tokens) {
        Ok(ident) if ident == "skip" => Ok(FieldTag::Skip),
        _ => Err(syn::Error::new(
            span,
            "expected a tag string (e.g., #[redact(\"nonsecret\")]) or `skip`",
        )),
    }
}

pub(crate) fn parse_field_tag(attrs: &[Attribute]) -> Result<FieldTag> {
    let mut tag: Option<FieldTag> = None;
    for attr in attrs {
        if !attr.path().is_ident("redact") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "#[redact] needs a tag value, e.g. #[redact(\"nonsecret\")]",
                ));
            }
            Meta::List(list) => {
                let next = parse_list(list.tokens.clone(), attr.span())?;
                set_tag(&mut tag, next, attr.span())?;
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[redact]; use #[redact(\"...\")]",
                ));
            }
        }
    }

    Ok(tag.unwrap_or(FieldTag::Untagged))
}

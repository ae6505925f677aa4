//! Container-level attribute checks for `#[derive(Redact)]`.
//!
//! Tags belong to fields. A `#[redact]` on the struct or enum itself has no
//! meaning, so it is rejected instead of silently ignored.

use syn::{spanned::Spanned, Attribute, Result};

pub(crate) fn reject_container_attributes(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("redact")) {
        Some(attr) => Err(syn::Error::new(
            attr.span(),
            "#[redact] is only supported on fields, not on the type itself",
        )),
        None => Ok(()),
    }
}

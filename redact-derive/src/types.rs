//! Type utilities for the derive macro.

/// Name of the field that makes a struct a string wrapper.
pub(crate) const WRAPPED_FIELD: &str = "string";

/// Checks if a type is written as `String`.
///
/// Accepts the bare name and qualified paths ending in `String`
/// (`std::string::String`, `alloc::string::String`). Type aliases are not
/// resolved.
pub(crate) fn is_string_type(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() {
        return false;
    }
    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "String" && segment.arguments.is_empty())
}

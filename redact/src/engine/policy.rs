//! Redaction policies.
//!
//! A policy decides what happens to a single string leaf given the tag that
//! governs it. Policies do not traverse anything; the walker calls them once
//! per leaf.

use super::registry::Registry;
use crate::tag::TagValue;

/// Replacement written wherever no exemption and no registered transform
/// applies.
pub const REDACTED_MARKER: &str = "REDACTED";

/// How a policy treats a struct-shaped field that carries its own tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaggedStruct {
    /// Ignore the tag and walk the struct's fields normally.
    Recurse,
    /// Treat the whole subtree as one leaf governed by the field's tag.
    Pin,
    /// Transform the struct's wrapped string payload with the field's tag
    /// when it has one, otherwise walk it normally.
    Unwrap,
}

/// Per-leaf string transformation.
pub trait Policy {
    /// Returns the replacement for `input` under `tag`.
    fn transform(&self, input: &str, tag: TagValue<'_>) -> String;

    /// Dispatch mode for tagged struct fields.
    fn tagged_struct(&self) -> TaggedStruct {
        TaggedStruct::Recurse
    }
}

impl<P: Policy + ?Sized> Policy for &P {
    fn transform(&self, input: &str, tag: TagValue<'_>) -> String {
        (**self).transform(input, tag)
    }

    fn tagged_struct(&self) -> TaggedStruct {
        (**self).tagged_struct()
    }
}

fn redact_unless_nonsecret(registry: &Registry, input: &str, tag: TagValue<'_>) -> String {
    match tag {
        TagValue::NonSecret => input.to_owned(),
        TagValue::Empty | TagValue::Snapshot | TagValue::Key(_) => registry
            .lookup(tag.as_str())
            .map_or_else(|| REDACTED_MARKER.to_owned(), |transform| transform(input)),
    }
}

/// Redact-by-default: every string is replaced unless tagged `nonsecret`.
///
/// Tags other than `nonsecret` select a transform from the registry; an
/// unregistered tag (including no tag at all) yields [`REDACTED_MARKER`].
#[derive(Clone, Copy, Debug)]
pub struct OptOut<'r> {
    registry: &'r Registry,
}

impl<'r> OptOut<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }
}

impl Policy for OptOut<'_> {
    fn transform(&self, input: &str, tag: TagValue<'_>) -> String {
        redact_unless_nonsecret(self.registry, input, tag)
    }
}

/// Snapshot policy: every string collapses to [`REDACTED_MARKER`] unless
/// tagged `snapshot`.
///
/// The registry is never consulted. A tagged struct field pins its whole
/// subtree to that tag, so `#[redact("snapshot")]` on a nested struct keeps
/// all of it.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptIn;

impl Policy for OptIn {
    fn transform(&self, input: &str, tag: TagValue<'_>) -> String {
        match tag {
            TagValue::Snapshot => input.to_owned(),
            TagValue::Empty | TagValue::NonSecret | TagValue::Key(_) => REDACTED_MARKER.to_owned(),
        }
    }

    fn tagged_struct(&self) -> TaggedStruct {
        TaggedStruct::Pin
    }
}

/// The opt-out rule drawn from a separate sanitizer registry, with support
/// for string wrappers such as [`crate::NullString`].
///
/// A tagged field whose type wraps its payload in a field named `string` is
/// treated as a single string leaf.
#[derive(Clone, Copy, Debug)]
pub struct NamedSanitizer<'r> {
    sanitizers: &'r Registry,
}

impl<'r> NamedSanitizer<'r> {
    pub fn new(sanitizers: &'r Registry) -> Self {
        Self { sanitizers }
    }
}

impl Policy for NamedSanitizer<'_> {
    fn transform(&self, input: &str, tag: TagValue<'_>) -> String {
        redact_unless_nonsecret(self.sanitizers, input, tag)
    }

    fn tagged_struct(&self) -> TaggedStruct {
        TaggedStruct::Unwrap
    }
}

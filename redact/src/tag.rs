//! Field tag values.
//!
//! A tag is the string a caller writes in `#[redact("...")]` on a field. Two
//! values are reserved directives that change what a policy does by default;
//! every other non-empty value names a transform in a [`crate::Registry`].

use std::fmt;

/// Directive exempting a string from the opt-out policies.
pub const NONSECRET: &str = "nonsecret";

/// Directive exempting a string from the opt-in policy.
pub const SNAPSHOT: &str = "snapshot";

/// A resolved field tag.
///
/// The annotation itself stays a plain string; this enum lets policies match
/// on the directive space exhaustively.
///
/// ```rust
/// use redact::TagValue;
///
/// assert_eq!(TagValue::parse(""), TagValue::Empty);
/// assert_eq!(TagValue::parse("nonsecret"), TagValue::NonSecret);
/// assert_eq!(TagValue::parse("email"), TagValue::Key("email"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TagValue<'a> {
    /// No annotation on the field.
    #[default]
    Empty,
    /// The `nonsecret` directive.
    NonSecret,
    /// The `snapshot` directive.
    Snapshot,
    /// Any other value, used as a registry key.
    Key(&'a str),
}

impl<'a> TagValue<'a> {
    /// Resolves a raw annotation string.
    pub fn parse(raw: &'a str) -> Self {
        match raw {
            "" => Self::Empty,
            NONSECRET => Self::NonSecret,
            SNAPSHOT => Self::Snapshot,
            key => Self::Key(key),
        }
    }

    /// Returns the annotation string this tag was parsed from.
    pub fn as_str(self) -> &'a str {
        match self {
            Self::Empty => "",
            Self::NonSecret => NONSECRET,
            Self::Snapshot => SNAPSHOT,
            Self::Key(key) => key,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for TagValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{TagValue, NONSECRET, SNAPSHOT};

    #[test]
    fn reserved_directives_resolve_to_variants() {
        assert_eq!(TagValue::parse(NONSECRET), TagValue::NonSecret);
        assert_eq!(TagValue::parse(SNAPSHOT), TagValue::Snapshot);
    }

    #[test]
    fn directives_are_case_sensitive() {
        assert_eq!(TagValue::parse("NonSecret"), TagValue::Key("NonSecret"));
    }

    #[test]
    fn as_str_returns_original_annotation() {
        for raw in ["", "nonsecret", "snapshot", "email", "last4"] {
            assert_eq!(TagValue::parse(raw).as_str(), raw);
        }
    }

    #[test]
    fn default_is_empty() {
        assert!(TagValue::default().is_empty());
        assert!(!TagValue::parse("x").is_empty());
        assert_eq!(TagValue::Key("x").to_string(), "x");
    }
}

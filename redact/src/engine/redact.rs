//! Public traversal entry points.
//!
//! Each entry point takes a mutable reference to a struct (or a pointer to
//! one), walks it with a policy, and mutates its string leaves in place. The
//! only error is [`WalkError::NotAddressable`] for a root that is not
//! struct-shaped; nothing is mutated in that case.

use super::{
    policy::{NamedSanitizer, OptIn, OptOut, Policy},
    registry::Registry,
    walk::Walk,
};
use crate::error::WalkError;

/// Walks `value` with a caller-supplied policy.
pub fn walk_with<T, P>(value: &mut T, policy: &P) -> Result<(), WalkError>
where
    T: Walk + ?Sized,
    P: Policy + ?Sized,
{
    value.walk_root(policy)
}

/// Redacts every string not tagged `nonsecret`.
///
/// Strings tagged with a key registered in `registry` are passed through that
/// transform; all others become [`crate::REDACTED_MARKER`].
///
/// ```rust
/// use redact::{redact_opt_out, Redact, Registry, REDACTED_MARKER};
///
/// #[derive(Redact)]
/// struct Login {
///     password: String,
///     #[redact("nonsecret")]
///     username: String,
/// }
///
/// let mut login = Login {
///     password: "hunter2".into(),
///     username: "alice".into(),
/// };
/// redact_opt_out(&mut login, &Registry::new()).unwrap();
/// assert_eq!(login.password, REDACTED_MARKER);
/// assert_eq!(login.username, "alice");
/// ```
pub fn redact_opt_out<T>(value: &mut T, registry: &Registry) -> Result<(), WalkError>
where
    T: Walk + ?Sized,
{
    walk_with(value, &OptOut::new(registry))
}

/// Redacts every string not tagged `snapshot`, ignoring any other tag.
///
/// A struct-shaped field tagged `snapshot` is kept whole, including fields
/// inside it that carry other tags.
pub fn redact_opt_in<T>(value: &mut T) -> Result<(), WalkError>
where
    T: Walk + ?Sized,
{
    walk_with(value, &OptIn)
}

/// Same traversal as [`redact_opt_out`], drawing transforms from a separate
/// sanitizer registry and treating tagged string wrappers as leaves.
pub fn sanitize_named<T>(value: &mut T, sanitizers: &Registry) -> Result<(), WalkError>
where
    T: Walk + ?Sized,
{
    walk_with(value, &NamedSanitizer::new(sanitizers))
}

/// Method-call form of the entry points.
///
/// Blanket-implemented for every [`Walk`] type.
pub trait Redactable: Walk {
    /// See [`redact_opt_out`].
    fn redact(&mut self, registry: &Registry) -> Result<(), WalkError> {
        redact_opt_out(self, registry)
    }

    /// See [`redact_opt_in`].
    fn snapshot(&mut self) -> Result<(), WalkError> {
        redact_opt_in(self)
    }

    /// See [`sanitize_named`].
    fn sanitize(&mut self, sanitizers: &Registry) -> Result<(), WalkError> {
        sanitize_named(self, sanitizers)
    }
}

impl<T> Redactable for T where T: Walk + ?Sized {}

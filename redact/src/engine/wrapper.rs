//! String wrapper shape.

use super::{
    policy::Policy,
    walk::{Ambient, Shape, Walk},
};
use crate::error::WalkError;

/// A string that may be absent, carried alongside a validity flag.
///
/// This is the wrapper shape [`crate::sanitize_named`] understands: a tagged
/// field of this type is sanitized as if it were the `string` payload itself.
/// Derived structs with a `string: String` field get the same treatment.
///
/// Under the other policies it walks like any struct: the untagged payload is
/// a string field of its own.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "slog", derive(serde::Serialize))]
pub struct NullString {
    pub string: String,
    pub valid: bool,
}

impl NullString {
    /// A present value.
    pub fn new(string: impl Into<String>) -> Self {
        Self {
            string: string.into(),
            valid: true,
        }
    }

    /// An absent value.
    pub fn null() -> Self {
        Self::default()
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.valid.then_some(self.string.as_str())
    }
}

impl Walk for NullString {
    const SHAPE: Shape = Shape::Struct;

    fn walk<P: Policy + ?Sized>(
        &mut self,
        ambient: Ambient<'_>,
        policy: &P,
    ) -> Result<(), WalkError> {
        let ambient = if ambient.is_pinned() {
            ambient
        } else {
            Ambient::root()
        };
        self.string.walk(ambient, policy)
    }

    fn wrapped_text(&mut self) -> Option<&mut String> {
        Some(&mut self.string)
    }
}

//! The type walker.
//!
//! Every walkable type declares its [`Shape`] once, as an associated constant,
//! and implements [`Walk::walk`] for in-place traversal. Derived structs and
//! enums are [`Shape::Struct`]; the std impls below cover strings, pointers
//! (`Option`, `Box`), sequences and maps.
//!
//! ## Tag context
//!
//! The [`Ambient`] passed down a walk carries the tag of the field currently
//! being visited. It governs that field's own string, pointer and
//! string-container values. Nested structs ignore it and resolve their own
//! field tags, and non-leaf container elements are re-entered through
//! [`Walk::walk_root`] with no tag at all.
//!
//! A pinned ambient (see [`crate::TaggedStruct::Pin`]) overrides all of this:
//! every string beneath it uses the pinned tag.
//!
//! ## Failures
//!
//! The only failure is [`WalkError::NotAddressable`], raised when a value that
//! is not struct-shaped is walked as a root. Inside a traversal those errors
//! are discarded: the failing branch is left as it was and its siblings are
//! still visited.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    marker::PhantomData,
};

use super::policy::{Policy, TaggedStruct};
use crate::{error::WalkError, tag::TagValue};

/// Shape categories the walker dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// A derived struct or enum.
    Struct,
    /// An owned string leaf.
    String,
    /// A pointer whose pointee is a string.
    StringPointer,
    /// A pointer whose pointee is struct-shaped.
    StructPointer,
    /// Any other pointer.
    Pointer,
    /// A sequence or map whose elements are strings or string pointers.
    StringContainer,
    /// A sequence or map of anything else.
    Container,
    /// Values with no string content to visit.
    Other,
}

impl Shape {
    /// Strings and string pointers: transformed in place by containers
    /// rather than re-walked as roots.
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::String | Self::StringPointer)
    }

    /// Structs and pointers to structs: accepted by [`Walk::walk_root`].
    pub const fn is_struct_like(self) -> bool {
        matches!(self, Self::Struct | Self::StructPointer)
    }

    /// Shape of a pointer to a value of shape `pointee`.
    pub const fn pointer_to(pointee: Self) -> Self {
        match pointee {
            Self::String => Self::StringPointer,
            Self::Struct | Self::StructPointer => Self::StructPointer,
            _ => Self::Pointer,
        }
    }

    /// Shape of a sequence or map holding values of shape `element`.
    pub const fn container_of(element: Self) -> Self {
        if element.is_leaf() {
            Self::StringContainer
        } else {
            Self::Container
        }
    }
}

/// Tag context for the value being walked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ambient<'a> {
    tag: TagValue<'a>,
    pinned: bool,
}

impl<'a> Ambient<'a> {
    /// Context for a top-level value: no tag.
    pub fn root() -> Self {
        Self::default()
    }

    /// Context in which every string beneath uses `tag`.
    pub fn pinned(tag: TagValue<'a>) -> Self {
        Self { tag, pinned: true }
    }

    /// Context for a field carrying `tag`. A pinned context stays pinned.
    pub fn field(self, tag: TagValue<'a>) -> Self {
        if self.pinned {
            self
        } else {
            Self { tag, pinned: false }
        }
    }

    pub fn tag(self) -> TagValue<'a> {
        self.tag
    }

    pub fn is_pinned(self) -> bool {
        self.pinned
    }
}

/// A value the redaction walker can traverse in place.
///
/// Implemented by `#[derive(Redact)]` for structs and enums and by this crate
/// for strings, pointers, sequences, maps and scalars.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be walked for redaction",
    label = "this type does not implement `Walk`",
    note = "use `#[derive(Redact)]` on the type definition",
    note = "or mark the field `#[redact(skip)]` to leave it untouched"
)]
pub trait Walk {
    /// Shape category used for dispatch.
    const SHAPE: Shape;

    /// Walks `self` under `ambient`, transforming string leaves through
    /// `policy`.
    fn walk<P: Policy + ?Sized>(
        &mut self,
        ambient: Ambient<'_>,
        policy: &P,
    ) -> Result<(), WalkError>;

    /// Walks `self` as a fresh top-level value.
    ///
    /// Fails with [`WalkError::NotAddressable`] unless `self` is a struct or a
    /// pointer to one; nothing is mutated in that case.
    fn walk_root<P: Policy + ?Sized>(&mut self, policy: &P) -> Result<(), WalkError> {
        if Self::SHAPE.is_struct_like() {
            self.walk(Ambient::root(), policy)
        } else {
            Err(WalkError::not_addressable::<Self>())
        }
    }

    /// The string payload of a wrapper struct, if this type is one.
    ///
    /// The derive returns the field named `string` when it has type `String`;
    /// see [`crate::NullString`].
    fn wrapped_text(&mut self) -> Option<&mut String> {
        None
    }
}

/// Drops the result of a nested walk, logging the failure.
///
/// Traversal is best-effort below the root: a branch that cannot be walked is
/// left as it was and the caller moves on to its siblings.
pub(crate) fn discard(result: Result<(), WalkError>, location: &str) {
    if let Err(error) = result {
        tracing::debug!(location, %error, "skipped a branch that could not be walked");
    }
}

/// Visits one struct or enum field. Called from derived `Walk` impls.
#[doc(hidden)]
pub fn visit_field<'a, T, P>(
    value: &mut T,
    name: &'static str,
    tag: TagValue<'a>,
    ambient: Ambient<'a>,
    policy: &P,
) where
    T: Walk + ?Sized,
    P: Policy + ?Sized,
{
    let ambient = ambient.field(tag);
    let result = if ambient.is_pinned() || tag.is_empty() || !T::SHAPE.is_struct_like() {
        value.walk(ambient, policy)
    } else {
        match policy.tagged_struct() {
            TaggedStruct::Recurse => value.walk(ambient, policy),
            TaggedStruct::Pin => value.walk(Ambient::pinned(tag), policy),
            TaggedStruct::Unwrap => {
                if let Some(text) = value.wrapped_text() {
                    *text = policy.transform(text, tag);
                    Ok(())
                } else {
                    value.walk(ambient, policy)
                }
            }
        }
    };
    discard(result, name);
}

fn walk_elements<'e, T, P, I>(elements: I, ambient: Ambient<'_>, policy: &P)
where
    T: Walk + ?Sized + 'e,
    P: Policy + ?Sized,
    I: IntoIterator<Item = &'e mut T>,
{
    // Scalars and sets hold no text; skip them without visiting each element.
    if matches!(T::SHAPE, Shape::Other) {
        return;
    }
    if ambient.is_pinned() || T::SHAPE.is_leaf() {
        for element in elements {
            discard(element.walk(ambient, policy), "element");
        }
    } else {
        for element in elements {
            discard(element.walk_root(policy), "element");
        }
    }
}

// =============================================================================
// Leaves
// =============================================================================

impl Walk for String {
    const SHAPE: Shape = Shape::String;

    fn walk<P: Policy + ?Sized>(
        &mut self,
        ambient: Ambient<'_>,
        policy: &P,
    ) -> Result<(), WalkError> {
        *self = policy.transform(self, ambient.tag());
        Ok(())
    }
}

impl Walk for Cow<'_, str> {
    const SHAPE: Shape = Shape::String;

    fn walk<P: Policy + ?Sized>(
        &mut self,
        ambient: Ambient<'_>,
        policy: &P,
    ) -> Result<(), WalkError> {
        *self = Cow::Owned(policy.transform(self, ambient.tag()));
        Ok(())
    }
}

macro_rules! impl_walk_other {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Walk for $ty {
                const SHAPE: Shape = Shape::Other;

                fn walk<P: Policy + ?Sized>(
                    &mut self,
                    _ambient: Ambient<'_>,
                    _policy: &P,
                ) -> Result<(), WalkError> {
                    Ok(())
                }
            }
        )*
    };
}

impl_walk_other!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, (),
);

// Set members are keys: they are never rewritten.
impl<T, S> Walk for HashSet<T, S> {
    const SHAPE: Shape = Shape::Other;

    fn walk<P: Policy + ?Sized>(
        &mut self,
        _ambient: Ambient<'_>,
        _policy: &P,
    ) -> Result<(), WalkError> {
        Ok(())
    }
}

impl<T> Walk for BTreeSet<T> {
    const SHAPE: Shape = Shape::Other;

    fn walk<P: Policy + ?Sized>(
        &mut self,
        _ambient: Ambient<'_>,
        _policy: &P,
    ) -> Result<(), WalkError> {
        Ok(())
    }
}

impl<T: ?Sized> Walk for PhantomData<T> {
    const SHAPE: Shape = Shape::Other;

    fn walk<P: Policy + ?Sized>(
        &mut self,
        _ambient: Ambient<'_>,
        _policy: &P,
    ) -> Result<(), WalkError> {
        Ok(())
    }
}

// =============================================================================
// Pointers
// =============================================================================

impl<T: Walk> Walk for Option<T> {
    const SHAPE: Shape = Shape::pointer_to(T::SHAPE);

    fn walk<P: Policy + ?Sized>(
        &mut self,
        ambient: Ambient<'_>,
        policy: &P,
    ) -> Result<(), WalkError> {
        match self {
            Some(value) => value.walk(ambient, policy),
            None => Ok(()),
        }
    }

    fn wrapped_text(&mut self) -> Option<&mut String> {
        self.as_mut().and_then(Walk::wrapped_text)
    }
}

impl<T: Walk + ?Sized> Walk for Box<T> {
    const SHAPE: Shape = Shape::pointer_to(T::SHAPE);

    fn walk<P: Policy + ?Sized>(
        &mut self,
        ambient: Ambient<'_>,
        policy: &P,
    ) -> Result<(), WalkError> {
        (**self).walk(ambient, policy)
    }

    fn wrapped_text(&mut self) -> Option<&mut String> {
        (**self).wrapped_text()
    }
}

// =============================================================================
// Sequences
// =============================================================================

impl<T: Walk> Walk for Vec<T> {
    const SHAPE: Shape = Shape::container_of(T::SHAPE);

    fn walk<P: Policy + ?Sized>(
        &mut self,
        ambient: Ambient<'_>,
        policy: &P,
    ) -> Result<(), WalkError> {
        walk_elements(self.iter_mut(), ambient, policy);
        Ok(())
    }
}

impl<T: Walk> Walk for VecDeque<T> {
    const SHAPE: Shape = Shape::container_of(T::SHAPE);

    fn walk<P: Policy + ?Sized>(
        &mut self,
        ambient: Ambient<'_>,
        policy: &P,
    ) -> Result<(), WalkError> {
        walk_elements(self.iter_mut(), ambient, policy);
        Ok(())
    }
}

impl<T: Walk> Walk for [T] {
    const SHAPE: Shape = Shape::container_of(T::SHAPE);

    fn walk<P: Policy + ?Sized>(
        &mut self,
        ambient: Ambient<'_>,
        policy: &P,
    ) -> Result<(), WalkError> {
        walk_elements(self.iter_mut(), ambient, policy);
        Ok(())
    }
}

impl<T: Walk, const N: usize> Walk for [T; N] {
    const SHAPE: Shape = Shape::container_of(T::SHAPE);

    fn walk<P: Policy + ?Sized>(
        &mut self,
        ambient: Ambient<'_>,
        policy: &P,
    ) -> Result<(), WalkError> {
        walk_elements(self.iter_mut(), ambient, policy);
        Ok(())
    }
}

// =============================================================================
// Maps
// =============================================================================

// Values are rewritten through `values_mut`, so keys and entry counts never
// change.

impl<K, V: Walk, S> Walk for HashMap<K, V, S> {
    const SHAPE: Shape = Shape::container_of(V::SHAPE);

    fn walk<P: Policy + ?Sized>(
        &mut self,
        ambient: Ambient<'_>,
        policy: &P,
    ) -> Result<(), WalkError> {
        walk_elements(self.values_mut(), ambient, policy);
        Ok(())
    }
}

impl<K, V: Walk> Walk for BTreeMap<K, V> {
    const SHAPE: Shape = Shape::container_of(V::SHAPE);

    fn walk<P: Policy + ?Sized>(
        &mut self,
        ambient: Ambient<'_>,
        policy: &P,
    ) -> Result<(), WalkError> {
        walk_elements(self.values_mut(), ambient, policy);
        Ok(())
    }
}

//! Errors returned by the traversal entry points.

use thiserror::Error;

/// Errors that can occur when walking a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalkError {
    /// The value handed to an entry point is neither a struct nor a pointer
    /// to one.
    #[error("cannot walk `{type_name}`: expected a struct or a pointer to a struct")]
    NotAddressable {
        /// Rust type name of the rejected value.
        type_name: &'static str,
    },
}

impl WalkError {
    pub(crate) fn not_addressable<T: ?Sized>() -> Self {
        Self::NotAddressable {
            type_name: std::any::type_name::<T>(),
        }
    }
}

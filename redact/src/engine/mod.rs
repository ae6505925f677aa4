//! Traversal, policies and entry points.
//!
//! - **`walk`**: the type walker (`Walk`, `Shape`, `Ambient`) and its std impls
//! - **`policy`**: per-leaf decisions (`Policy`, `OptOut`, `OptIn`, `NamedSanitizer`)
//! - **`registry`**: named transforms consulted by the opt-out policies
//! - **`redact`**: the public entry points
//! - **`wrapper`**: the `NullString` wrapper shape
//!
//! Tag values live in `crate::tag`.

mod policy;
mod redact;
mod registry;
mod walk;
mod wrapper;

pub use policy::{NamedSanitizer, OptIn, OptOut, Policy, TaggedStruct, REDACTED_MARKER};
pub use redact::{redact_opt_in, redact_opt_out, sanitize_named, walk_with, Redactable};
pub use registry::{Registry, Transform};
pub use walk::{visit_field, Ambient, Shape, Walk};
pub use wrapper::NullString;

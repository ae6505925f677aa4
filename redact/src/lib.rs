//! Tag-driven structural redaction.
//!
//! Callers annotate string fields of their own types and walk a value with
//! one of the entry points before logging or serializing it. The walker
//! finds every string leaf (inside nested structs, `Option`/`Box` pointers,
//! sequences and map values) and rewrites it in place according to the tag
//! of the field it was reached through.
//!
//! Key rules:
//! - `#[derive(Redact)]` generates the walker for a struct or enum.
//! - `#[redact("tag")]` sets a field's tag; untagged fields have the empty tag.
//! - [`redact_opt_out`] replaces every string not tagged `nonsecret`, using a
//!   registered transform when the tag names one.
//! - [`redact_opt_in`] replaces every string not tagged `snapshot`.
//! - [`sanitize_named`] is the opt-out rule over a separate registry, with
//!   tagged string wrappers ([`NullString`]) treated as leaves.
//! - `#[redact(skip)]` leaves a field untouched; its type need not implement
//!   [`Walk`].
//!
//! Containers are walked in place: lengths, map keys and `None` pointers are
//! never changed. Strings inside a container use the tag of the field that
//! holds the container; structs inside a container resolve their own tags.
//!
//! What this crate does not do:
//! - detect cycles (a self-referential graph recurses without bound)
//! - walk trait objects
//! - perform I/O or install a logger
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use redact::{redact_opt_out, transforms, Redact, Registry, REDACTED_MARKER};
//!
//! #[derive(Redact)]
//! struct Account {
//!     #[redact("nonsecret")]
//!     id: String,
//!     #[redact("last4")]
//!     card: String,
//!     api_keys: HashMap<String, String>,
//! }
//!
//! let registry = Registry::new().with("last4", transforms::keep_last(4, '*'));
//! let mut account = Account {
//!     id: "acct_1".into(),
//!     card: "4111111111111111".into(),
//!     api_keys: HashMap::from([("prod".to_string(), "sk_live_abc".to_string())]),
//! };
//!
//! redact_opt_out(&mut account, &registry).unwrap();
//! assert_eq!(account.id, "acct_1");
//! assert_eq!(account.card, "************1111");
//! assert_eq!(account.api_keys["prod"], REDACTED_MARKER);
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use redact_derive::Redact;

#[allow(unused_extern_crates)]
extern crate self as redact;

mod engine;
mod error;
mod tag;
pub mod transforms;
#[cfg(feature = "slog")]
pub mod slog;

pub use engine::{
    redact_opt_in, redact_opt_out, sanitize_named, walk_with, Ambient, NamedSanitizer,
    NullString, OptIn, OptOut, Policy, Redactable, Registry, Shape, TaggedStruct, Transform,
    Walk, REDACTED_MARKER,
};
#[doc(hidden)]
pub use engine::visit_field;
pub use error::WalkError;
pub use tag::{TagValue, NONSECRET, SNAPSHOT};

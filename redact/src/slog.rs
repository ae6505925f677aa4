//! Adapters for emitting redacted values through `slog`.
//!
//! This module connects the walker with `slog` by producing `slog::Value`s
//! that serialize a redacted copy of a value as structured JSON, via `slog`'s
//! nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation comes from a redacted copy, never from
//!   the original value.
//! - Avoiding fallible logging APIs: walk and serialization failures are
//!   represented as placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or choose which registry a caller should use.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    engine::{redact_opt_in, redact_opt_out, Registry, Walk},
    error::WalkError,
};

const SERIALIZE_FAILED: &str = "Failed to serialize redacted value";
const WALK_FAILED: &str = "Failed to redact value";

/// A `slog::Value` that emits an owned redacted payload as structured JSON.
///
/// The payload is stored as a `serde_json::Value` and emitted through
/// `slog::Serde`.
#[derive(Clone, Debug)]
pub struct RedactedJson {
    value: JsonValue,
}

impl RedactedJson {
    fn from_walk<T: Serialize>(value: &T, walked: Result<(), WalkError>) -> Self {
        let value = match walked {
            Ok(()) => serde_json::to_value(value)
                .unwrap_or_else(|_| JsonValue::String(SERIALIZE_FAILED.to_string())),
            Err(error) => {
                tracing::debug!(%error, "refusing to log a value that could not be redacted");
                JsonValue::String(WALK_FAILED.to_string())
            }
        };
        Self { value }
    }

    /// The JSON that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for RedactedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their redacted form as JSON.
///
/// Both methods consume the value and walk it before serializing. If the walk
/// fails (the value is not struct-shaped) the payload is a placeholder string,
/// so an unredacted value is never logged.
///
/// ## Example
/// ```ignore
/// use redact::slog::IntoRedactedJson;
///
/// info!(logger, "login"; "request" => request.into_redacted_json(&registry));
/// ```
pub trait IntoRedactedJson: Walk + Serialize + Sized {
    /// Redacts with the opt-out policy and `registry`.
    fn into_redacted_json(mut self, registry: &Registry) -> RedactedJson {
        let walked = redact_opt_out(&mut self, registry);
        RedactedJson::from_walk(&self, walked)
    }

    /// Redacts with the opt-in (snapshot) policy.
    fn into_snapshot_json(mut self) -> RedactedJson {
        let walked = redact_opt_in(&mut self);
        RedactedJson::from_walk(&self, walked)
    }
}

impl<T> IntoRedactedJson for T where T: Walk + Serialize {}

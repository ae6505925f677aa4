//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `into_redacted_json()` and `into_snapshot_json()` produce redacted JSON
//! - The `slog::Value` implementation works with slog's serialization API
//! - A value that cannot be walked is never logged in clear text

#![cfg(feature = "slog")]

use std::{collections::HashMap, fmt::Arguments};

use redact::{slog::IntoRedactedJson, transforms, Redact, Registry, REDACTED_MARKER};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Records the last value emitted, as JSON.
#[derive(Default)]
struct JsonCapture {
    last: Option<(String, JsonValue)>,
}

impl slog::Serializer for JsonCapture {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.last = Some((key.into(), JsonValue::String(val.to_string())));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.last = Some((key.into(), json));
        Ok(())
    }
}

/// Emits `value` under `key` through a throwaway record and returns the
/// nested JSON it produced.
fn captured_json(value: &impl slog::Value, key: &'static str) -> JsonValue {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());

    let mut capture = JsonCapture::default();
    value.serialize(&record, key, &mut capture).unwrap();

    match capture.last {
        Some((emitted, json)) if emitted == key => json,
        other => panic!("nothing emitted under {key:?}: {other:?}"),
    }
}

#[derive(Clone, Redact, Serialize)]
struct User {
    #[redact("nonsecret")]
    username: String,
    password: String,
    #[redact("last4")]
    phone: String,
}

fn user() -> User {
    User {
        username: "alice".into(),
        password: "super_secret_password".into(),
        phone: "555-123-4567".into(),
    }
}

#[test]
fn test_into_redacted_json_simple_struct() {
    let registry = Registry::new().with("last4", transforms::keep_last(4, '*'));

    let json = captured_json(&user().into_redacted_json(&registry), "user");

    assert_eq!(json["username"], "alice");
    assert_eq!(json["password"], REDACTED_MARKER);
    assert_eq!(json["phone"], "********4567");
}

#[test]
fn test_into_snapshot_json_redacts_everything_untagged() {
    #[derive(Clone, Redact, Serialize)]
    struct Event {
        #[redact("snapshot")]
        name: String,
        #[redact("nonsecret")]
        actor: String,
    }

    let event = Event {
        name: "login".into(),
        actor: "alice".into(),
    };

    let json = captured_json(&event.into_snapshot_json(), "event");

    assert_eq!(json["name"], "login");
    assert_eq!(json["actor"], REDACTED_MARKER);
}

#[test]
fn test_nested_containers_are_redacted_in_json() {
    #[derive(Clone, Redact, Serialize)]
    struct Session {
        #[redact("nonsecret")]
        id: String,
        headers: HashMap<String, String>,
        users: Vec<User>,
    }

    let session = Session {
        id: "s-1".into(),
        headers: HashMap::from([("authorization".to_string(), "Bearer abc".to_string())]),
        users: vec![user()],
    };

    let json = captured_json(&session.into_redacted_json(&Registry::new()), "session");

    assert_eq!(json["id"], "s-1");
    assert_eq!(json["headers"]["authorization"], REDACTED_MARKER);
    assert_eq!(json["users"][0]["username"], "alice");
    assert_eq!(json["users"][0]["password"], REDACTED_MARKER);
    // No "last4" transform registered: falls back to the marker.
    assert_eq!(json["users"][0]["phone"], REDACTED_MARKER);
}

#[test]
fn test_unwalkable_value_logs_placeholder() {
    let secrets = vec!["sk_live_abc".to_string()];

    let redacted = secrets.into_redacted_json(&Registry::new());

    assert_eq!(
        redacted.as_json(),
        &JsonValue::String("Failed to redact value".to_string())
    );
}

#[test]
fn test_original_value_is_untouched_when_cloned_for_logging() {
    let original = user();

    let json = captured_json(&original.clone().into_redacted_json(&Registry::new()), "user");

    assert_eq!(json["password"], REDACTED_MARKER);
    assert_eq!(original.password, "super_secret_password");
}

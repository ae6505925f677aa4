//! Named string transforms.
//!
//! A [`Registry`] maps tag values to transform functions. It is built once,
//! before any traversal, and then shared by reference: registration takes
//! `&mut self` and traversal borrows it immutably, so a registry can never
//! change underneath an in-flight walk.

use std::{collections::HashMap, fmt, sync::Arc};

/// A registered string transform.
pub type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Mapping from tag value to transform.
///
/// ```rust
/// use redact::Registry;
///
/// let mut registry = Registry::new();
/// registry.register("upper", |value: &str| value.to_uppercase());
///
/// let transform = registry.lookup("upper").unwrap();
/// assert_eq!(transform("abc"), "ABC");
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    transforms: HashMap<String, Transform>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `transform` under `key`, replacing any earlier registration.
    pub fn register<K, F>(&mut self, key: K, transform: F) -> &mut Self
    where
        K: Into<String>,
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let key = key.into();
        let replaced = self
            .transforms
            .insert(key.clone(), Arc::new(transform))
            .is_some();
        tracing::debug!(key = %key, replaced, "registered redaction transform");
        self
    }

    /// Builder form of [`Registry::register`].
    #[must_use]
    pub fn with<K, F>(mut self, key: K, transform: F) -> Self
    where
        K: Into<String>,
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.register(key, transform);
        self
    }

    /// Returns the transform registered under `key`.
    pub fn lookup(&self, key: &str) -> Option<&Transform> {
        self.transforms.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.transforms.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Registry;

    #[test]
    fn lookup_misses_on_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup("email").is_none());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = Registry::new();
        registry
            .register("mask", |_: &str| "first".to_string())
            .register("mask", |_: &str| "second".to_string());

        assert_eq!(registry.len(), 1);
        let transform = registry.lookup("mask").unwrap();
        assert_eq!(transform("value"), "second");
    }

    #[test]
    fn builder_registers_every_key() {
        let registry = Registry::new()
            .with("b", |v: &str| v.to_string())
            .with("a", |v: &str| v.to_string());
        assert!(registry.contains("a"));
        assert!(registry.contains("b"));
        assert_eq!(registry.keys(), vec!["a", "b"]);
    }

    #[test]
    fn debug_lists_keys_only() {
        let registry = Registry::new().with("email", |v: &str| v.to_string());
        assert_eq!(format!("{registry:?}"), r#"Registry { keys: ["email"] }"#);
    }
}

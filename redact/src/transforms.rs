//! Ready-made transforms for [`crate::Registry`].
//!
//! These operate on Unicode scalar values, never on bytes.
//!
//! ```rust
//! use redact::{transforms, Registry};
//!
//! let registry = Registry::new()
//!     .with("last4", transforms::keep_last(4, '*'))
//!     .with("hidden", transforms::fixed("<hidden>"));
//! # assert_eq!(registry.len(), 2);
//! ```

/// Replaces every input with `placeholder`.
pub fn fixed(placeholder: impl Into<String>) -> impl Fn(&str) -> String + Send + Sync + 'static {
    let placeholder = placeholder.into();
    move |_: &str| placeholder.clone()
}

/// Keeps the first `visible` characters and masks the rest with `mask`.
///
/// Values no longer than `visible` are returned unchanged.
pub fn keep_first(visible: usize, mask: char) -> impl Fn(&str) -> String + Send + Sync + 'static {
    move |value: &str| {
        value
            .chars()
            .enumerate()
            .map(|(index, ch)| if index < visible { ch } else { mask })
            .collect()
    }
}

/// Keeps the last `visible` characters and masks the rest with `mask`.
///
/// Values no longer than `visible` are returned unchanged.
pub fn keep_last(visible: usize, mask: char) -> impl Fn(&str) -> String + Send + Sync + 'static {
    move |value: &str| {
        let hidden = value.chars().count().saturating_sub(visible);
        value
            .chars()
            .enumerate()
            .map(|(index, ch)| if index < hidden { mask } else { ch })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{fixed, keep_first, keep_last};

    #[test]
    fn fixed_ignores_input() {
        let transform = fixed("<hidden>");
        assert_eq!(transform("anything"), "<hidden>");
        assert_eq!(transform(""), "<hidden>");
    }

    #[test]
    fn keep_last_masks_prefix() {
        let transform = keep_last(4, '*');
        assert_eq!(transform("4111111111111111"), "************1111");
        assert_eq!(transform("abc"), "abc");
        assert_eq!(transform(""), "");
    }

    #[test]
    fn keep_first_masks_suffix() {
        let transform = keep_first(2, '#');
        assert_eq!(transform("alice@example.com"), "al###############");
        assert_eq!(transform("a"), "a");
    }

    #[test]
    fn masking_counts_characters_not_bytes() {
        let transform = keep_last(2, '*');
        assert_eq!(transform("秘密数据"), "**数据");

        let transform = keep_first(6, '*');
        assert_eq!(transform("secret🔒data"), "secret*****");
    }
}

//! Slug validation.

use regex::Regex;
use std::sync::LazyLock;

/// Lowercase letters and digits in hyphen-separated groups.
static SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is a valid regex")
});

/// Returns true if `slug` can be used as a URL path segment unescaped.
///
/// # Examples
///
/// ```ignore
/// assert!(is_url_safe("rust-in-production"));
/// assert!(!is_url_safe("Rust In Production"));
/// ```
pub fn is_url_safe(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        assert!(is_url_safe("porsche-911-carrera"));
        assert!(is_url_safe("suv"));
        assert!(is_url_safe("2024-review"));
    }

    #[test]
    fn test_invalid_slugs() {
        assert!(!is_url_safe(""));
        assert!(!is_url_safe("-leading"));
        assert!(!is_url_safe("trailing-"));
        assert!(!is_url_safe("double--hyphen"));
        assert!(!is_url_safe("Upper"));
        assert!(!is_url_safe("with space"));
        assert!(!is_url_safe("path/segment"));
    }
}

//! URL slug checking for the page address field.
//!
//! Purely presentational: the value is never rewritten, and typing is never
//! blocked. The server does the authoritative check on submit.

use std::sync::LazyLock;

use regex_lite::Regex;
use smol_str::SmolStr;

/// Letters, digits and hyphens, any case, possibly empty.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9-]*$").expect("slug pattern is valid"));

/// Result of checking a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugCheck {
    Valid,
    /// Contains characters outside `[a-z0-9-]`.
    Invalid,
    /// Well-formed, but the server reserves this address.
    Reserved,
}

impl SlugCheck {
    /// Whether the error styling applies.
    pub fn is_error(&self) -> bool {
        matches!(self, SlugCheck::Invalid)
    }
}

/// Pattern check only.
pub fn is_valid_slug(value: &str) -> bool {
    SLUG_REGEX.is_match(value)
}

/// Full check, including the reserved list.
pub fn check_slug(value: &str, reserved: &[SmolStr]) -> SlugCheck {
    if !is_valid_slug(value) {
        SlugCheck::Invalid
    } else if reserved.iter().any(|r| r.eq_ignore_ascii_case(value)) {
        SlugCheck::Reserved
    } else {
        SlugCheck::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnhancerConfig;

    #[test]
    fn test_accepts_slugs() {
        for ok in ["my-page-2", "", "ABC-def", "-", "2024"] {
            assert!(is_valid_slug(ok), "{ok:?} should be valid");
        }
    }

    #[test]
    fn test_rejects_bad_chars() {
        for bad in ["My Page!", "a_b", "a/b", "über", "trailing "] {
            assert!(!is_valid_slug(bad), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn test_reserved_is_not_an_error() {
        let reserved = EnhancerConfig::default().reserved_slugs;
        assert_eq!(check_slug("edit", &reserved), SlugCheck::Reserved);
        assert_eq!(check_slug("Tags", &reserved), SlugCheck::Reserved);
        assert!(!check_slug("edit", &reserved).is_error());

        assert_eq!(check_slug("editing", &reserved), SlugCheck::Valid);
        assert_eq!(check_slug("a_b", &reserved), SlugCheck::Invalid);
        assert!(check_slug("a_b", &reserved).is_error());
    }
}

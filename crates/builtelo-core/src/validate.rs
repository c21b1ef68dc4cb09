//! Field validators for the lead-capture form
//!
//! Pure functions over strings. `None` means the value passes; `Some`
//! carries the message shown inline under the field.

use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

// Local part, "@", domain, ".", suffix: runs of anything but whitespace
// and "@". Deliberately loose; the endpoint does its own verification.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Validate the visitor's name. Surrounding whitespace never counts
/// toward the minimum length.
pub fn validate_name(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(NAME_REQUIRED);
    }
    if trimmed.chars().count() < 2 {
        return Some(NAME_TOO_SHORT);
    }
    None
}

/// Validate the visitor's email address. Empty input is reported as
/// missing; anything else must have the address shape.
pub fn validate_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(EMAIL_REQUIRED);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some(EMAIL_INVALID);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        assert_eq!(validate_name(""), Some(NAME_REQUIRED));
        assert_eq!(validate_name("   "), Some(NAME_REQUIRED));
        assert_eq!(validate_name("\t\n"), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_name_minimum_length() {
        assert_eq!(validate_name("A"), Some(NAME_TOO_SHORT));
        assert_eq!(validate_name("  B  "), Some(NAME_TOO_SHORT));
        assert_eq!(validate_name("Al"), None);
        assert_eq!(validate_name("  Al  "), None);
        assert_eq!(validate_name("Alice"), None);
    }

    #[test]
    fn test_email_required_only_when_empty() {
        assert_eq!(validate_email(""), Some(EMAIL_REQUIRED));
        // Whitespace is not "missing"; it fails the shape check instead.
        assert_eq!(validate_email("   "), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_email_shape_rejections() {
        for bad in [
            "plain",
            "a@b",
            "@b.c",
            "a@b.c d",
            "a b@c.d",
            "a@b c.d",
            "a@@b.c",
        ] {
            assert_eq!(validate_email(bad), Some(EMAIL_INVALID), "{bad}");
        }
    }

    #[test]
    fn test_email_shape_acceptances() {
        for good in [
            "alice@example.com",
            "a@b.c",
            "first.last@sub.domain.io",
            "weird+tag@host.co",
        ] {
            assert_eq!(validate_email(good), None, "{good}");
        }
    }

    #[test]
    fn test_validators_are_deterministic() {
        for value in ["", "A", "Alice", "bad-email", "alice@example.com"] {
            assert_eq!(validate_name(value), validate_name(value));
            assert_eq!(validate_email(value), validate_email(value));
        }
    }
}

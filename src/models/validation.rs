//! Phone and email format checks
//!
//! Both predicates are pure and never fail: malformed input simply yields `false`.

use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@gmail\.com$").expect("Failed to compile email regex")
});

/// Check that a phone number is exactly 10 ASCII digits
///
/// No separators, country codes or surrounding whitespace are accepted.
pub fn is_valid_phone(s: &str) -> bool {
    PHONE_REGEX.is_match(s)
}

/// Check that an email is a non-empty local part followed by `@gmail.com`
///
/// The domain match is case-sensitive.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

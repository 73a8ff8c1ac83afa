//! Email validation and normalization
//!
//! Shape check only: `local@domain.tld`, matched with
//! `^[^\s@]+@[^\s@]+\.[^\s@]+$`. No DNS or mailbox verification.

use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`, each segment free of whitespace and `@`
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Syntactic email validator
///
/// Pure and total: every input yields a boolean.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Returns true iff `candidate` has the `local@domain.tld` shape.
    pub fn is_valid(candidate: &str) -> bool {
        EMAIL_PATTERN.is_match(candidate)
    }
}

/// Normalize a raw address: trim surrounding whitespace, lower-case.
///
/// Idempotent. Applied before validation, comparison and storage.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

//! # Domain Invariants
//!
//! No two stored entries share a normalized email. Check-then-insert is not
//! atomic, so concurrent sessions enrolling the same address can break this
//! against a store without native uniqueness. These helpers detect it.

use std::collections::HashSet;

use super::entities::WaitlistEntry;

/// Invariant: every normalized email appears at most once.
pub fn invariant_unique_emails(entries: &[WaitlistEntry]) -> bool {
    duplicate_emails(entries).is_empty()
}

/// Emails that occur more than once, in first-duplicate order.
pub fn duplicate_emails(entries: &[WaitlistEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for entry in entries {
        if !seen.insert(entry.email.as_str()) && reported.insert(entry.email.as_str()) {
            duplicates.push(entry.email.clone());
        }
    }

    duplicates
}

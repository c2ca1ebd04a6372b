//! Input validation primitives.
//!
//! Two composable predicates cover every demo. Trimming is the caller's
//! choice: the RSA demo trims its message at collection, the SHA-256 demo
//! keeps it verbatim to allow multi-line input.

use crate::outcome::ValidationOutcome;

/// Invalid when the value is empty; the message references the field by
/// its label.
pub fn non_empty(value: &str, label: &str) -> ValidationOutcome {
    if value.is_empty() {
        ValidationOutcome::invalid(format!("Please enter {}", label))
    } else {
        ValidationOutcome::Valid
    }
}

/// Invalid when any optionally-parsed value is `None`, the parse-failed
/// sentinel of the field readers.
pub fn all_present<T>(values: &[&Option<T>], message: &str) -> ValidationOutcome {
    if values.iter().all(|v| v.is_some()) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::invalid(message)
    }
}

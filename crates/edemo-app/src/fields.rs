//! Field and surface ids, plus the field readers the descriptors share.

use lazy_static::lazy_static;
use num_bigint::BigUint;
use regex::Regex;
use std::str::FromStr;

pub const RSA_MESSAGE: &str = "rsa-message";
pub const RSA_P: &str = "rsa-p";
pub const RSA_Q: &str = "rsa-q";
pub const RSA_RESULTS: &str = "rsa-results";
pub const RSA_RUN_BUTTON: &str = "rsa-run-btn";

pub const SHA256_MESSAGE: &str = "sha256-message";
pub const SHA256_RESULTS: &str = "sha256-results";
pub const SHA256_RUN_BUTTON: &str = "sha256-run-btn";

lazy_static! {
    static ref DIGITS_ONLY: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

/// Whether a message consists only of decimal digits and therefore reads
/// as a numeric plaintext rather than literal text.
pub fn is_numeric_string(value: &str) -> bool {
    DIGITS_ONLY.is_match(value)
}

/// Strict decimal parse of a field value, trimmed. `None` is the
/// parse-failed sentinel the validators check for.
pub fn parse_biguint(raw: &str) -> Option<BigUint> {
    BigUint::from_str(raw.trim()).ok()
}

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

pub const MAX_KEY_LEN: usize = 128;
pub const MAX_VALUE_LEN: usize = 256;

/// Letters, digits and `+ - = . _ : / @`. Emptiness is checked separately.
const KEY_PATTERN: &str = r"^[A-Za-z0-9+\-=._:/@]*$";
/// Same symbols plus interior whitespace; no leading or trailing whitespace.
const VALUE_PATTERN: &str =
    r"^(?:[A-Za-z0-9+\-=._:/@](?:[A-Za-z0-9+\-=._:/@\s]*[A-Za-z0-9+\-=._:/@])?)?$";

static KEY_RE: OnceLock<Regex> = OnceLock::new();
static VALUE_RE: OnceLock<Regex> = OnceLock::new();

/// Row-level validation failure, rendered under the offending row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("A tag key is required")]
    KeyRequired,
    #[error("This tag key is already used")]
    DuplicateKey,
    #[error("The key contains characters that are not allowed")]
    InvalidKey,
    #[error("The value contains characters that are not allowed")]
    InvalidValue,
}

/// Charset and length check for keys. The empty key passes here; it is
/// reported as [`TagError::KeyRequired`] instead.
pub fn is_valid_key(key: &str) -> bool {
    key.chars().count() <= MAX_KEY_LEN
        && KEY_RE
            .get_or_init(|| Regex::new(KEY_PATTERN).expect("tag key pattern compiles"))
            .is_match(key)
}

pub fn is_valid_value(value: &str) -> bool {
    value.chars().count() <= MAX_VALUE_LEN
        && VALUE_RE
            .get_or_init(|| Regex::new(VALUE_PATTERN).expect("tag value pattern compiles"))
            .is_match(value)
}

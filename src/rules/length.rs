//! Length rule - checks password minimum length.

use super::Rule;

pub const MIN_LENGTH: usize = 8;

pub const MIN_LENGTH_RULE: Rule = Rule::new(
    "minLength",
    has_min_length,
    "password must be at least 8 characters",
);

/// Length is measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts as two.
fn has_min_length(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_LENGTH
}

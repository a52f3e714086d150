//! Character class rules - uppercase letters, digits and special characters.
//!
//! Only ASCII counts: `É` is not an uppercase letter here and `٣` is not a
//! digit. Characters outside every class are allowed but satisfy nothing.

use super::Rule;

/// The only characters accepted as "special".
pub const SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

pub const UPPERCASE: Rule = Rule::new(
    "uppercase",
    has_uppercase,
    "password must contain at least 1 uppercase letter",
);

pub const NUMBER: Rule = Rule::new(
    "number",
    has_digit,
    "password must contain at least 1 number",
);

pub const SPECIAL: Rule = Rule::new(
    "special",
    has_special,
    "password must contain at least 1 special character (!@#$%^&*)",
);

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_special(password: &str) -> bool {
    password.contains(SPECIAL_CHARS)
}

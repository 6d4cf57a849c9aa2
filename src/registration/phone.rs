//! Phone number checks and live-input formatting.

use once_cell::sync::Lazy;
use regex::Regex;

/// Digits kept by the formatter
pub const MAX_PHONE_DIGITS: usize = 10;
/// Digits required for a phone number to be accepted
pub const MIN_PHONE_DIGITS: usize = 10;

// Digits, whitespace, hyphens and parentheses only
static PHONE_CHARSET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\s\-()]+$").unwrap());

fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a phone (or emergency contact) number
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_CHARSET.is_match(phone) && digits_only(phone).len() >= MIN_PHONE_DIGITS
}

/// Reformat raw input as `(DDD) DDD-DDDD`, growing with the digits typed so far
pub fn format(raw: &str) -> String {
    let mut digits = digits_only(raw);
    digits.truncate(MAX_PHONE_DIGITS);

    match digits.len() {
        0..=2 => digits,
        3..=5 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

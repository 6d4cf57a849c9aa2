//! Password criteria checks.
//!
//! The five requirements every registration password must meet:
//! - Minimum length
//! - Uppercase, lowercase and digit characters
//! - At least one symbol from the accepted special set

// Constants for password requirements
pub const MIN_PASSWORD_LENGTH: usize = 10;
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Returns true if the password is long enough (counted in characters)
pub fn meets_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Get per-criterion results for a password
pub fn check_criteria(password: &str) -> PasswordCriteria {
    PasswordCriteria {
        meets_length: meets_length(password),
        has_uppercase: has_uppercase(password),
        has_lowercase: has_lowercase(password),
        has_digit: has_digit(password),
        has_special: has_special(password),
    }
}

/// Detailed password criteria results, one flag per live UI indicator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct PasswordCriteria {
    pub meets_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl PasswordCriteria {
    /// Check if all requirements are met
    pub fn is_valid(&self) -> bool {
        self.meets_length
            && self.has_uppercase
            && self.has_lowercase
            && self.has_digit
            && self.has_special
    }

    /// Number of satisfied criteria (0..=5)
    pub fn satisfied(&self) -> u8 {
        [self.meets_length, self.has_uppercase, self.has_lowercase, self.has_digit, self.has_special]
            .iter()
            .filter(|met| **met)
            .count() as u8
    }
}

/// Glyph shown next to a criterion in the checklist
pub fn indicator(met: bool) -> &'static str {
    if met {
        "✓"
    } else {
        "○"
    }
}

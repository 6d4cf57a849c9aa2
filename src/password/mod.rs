//! Password criteria and strength scoring.

pub mod criteria;
pub mod strength;

pub use criteria::{check_criteria, PasswordCriteria};
pub use strength::{score, StrengthLabel, StrengthReport};

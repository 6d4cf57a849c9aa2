//! Advisory password strength scoring.
//!
//! Each satisfied criterion is worth 20 points. The score drives the
//! strength bar and its label; it never decides whether a registration is
//! accepted.

use crate::password::criteria::{check_criteria, PasswordCriteria};
use serde::Serialize;

/// Points awarded per satisfied criterion
pub const POINTS_PER_CRITERION: u8 = 20;

/// Password strength level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Classify an aggregate score; zero has no label
    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            0 => None,
            1..=59 => Some(StrengthLabel::Weak),
            60..=99 => Some(StrengthLabel::Medium),
            _ => Some(StrengthLabel::Strong),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }

    /// Bar and text colour for this level
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "#ef5350",
            StrengthLabel::Medium => "#ffa726",
            StrengthLabel::Strong => "#4caf50",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub criteria: PasswordCriteria,
    /// Aggregate score, 0..=100
    pub score: u8,
    pub label: Option<StrengthLabel>,
}

impl StrengthReport {
    /// Label text for display; empty when there is nothing to show
    pub fn label_text(&self) -> &'static str {
        self.label.map(|label| label.as_str()).unwrap_or("")
    }

    /// Width of the strength bar in percent
    pub fn bar_width(&self) -> u8 {
        self.score
    }

    /// True when every criterion holds
    pub fn meets_all(&self) -> bool {
        self.criteria.is_valid()
    }
}

/// Score a password for the live strength indicator
pub fn score(password: &str) -> StrengthReport {
    let criteria = check_criteria(password);
    let score = criteria.satisfied() * POINTS_PER_CRITERION;

    StrengthReport {
        criteria,
        score,
        label: StrengthLabel::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_has_no_label() {
        let report = score("");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, None);
        assert_eq!(report.label_text(), "");
        assert_eq!(report.bar_width(), 0);
    }

    #[test]
    fn test_full_score_is_strong() {
        let report = score("Abcdefghij1!");
        assert_eq!(report.score, 100);
        assert_eq!(report.label, Some(StrengthLabel::Strong));
        assert!(report.meets_all());
    }

    #[test]
    fn test_label_boundaries() {
        assert_eq!(StrengthLabel::from_score(20), Some(StrengthLabel::Weak));
        assert_eq!(StrengthLabel::from_score(40), Some(StrengthLabel::Weak));
        assert_eq!(StrengthLabel::from_score(60), Some(StrengthLabel::Medium));
        assert_eq!(StrengthLabel::from_score(80), Some(StrengthLabel::Medium));
        assert_eq!(StrengthLabel::from_score(100), Some(StrengthLabel::Strong));
    }

    #[test]
    fn test_short_password_scores_medium() {
        // Everything but length
        let report = score("short1A!");
        assert_eq!(report.score, 80);
        assert_eq!(report.label, Some(StrengthLabel::Medium));
        assert!(!report.meets_all());
    }

    #[test]
    fn test_lowercase_only_is_weak() {
        let report = score("abc");
        assert_eq!(report.score, 20);
        assert_eq!(report.label_text(), "Weak");
        assert_eq!(report.label.map(|l| l.color()), Some("#ef5350"));
    }
}

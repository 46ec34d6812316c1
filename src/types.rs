//! Core result types for password evaluation.

use std::fmt;

use crate::sections::LENGTH_BUCKETS;

/// Normalized strength scores for a single password.
///
/// Both scores are in `[0, 1]`. They are deliberately coarse: the length
/// score takes one of three discrete values and the complexity score one of
/// five, so callers get actionable tiers instead of false precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PasswordEvaluation {
    /// Discrete length tier (0, 1 or 2) divided by 3.
    pub length_score: f64,
    /// Number of character classes present (0 to 4) divided by 4.
    pub complexity_score: f64,
}

impl PasswordEvaluation {
    /// Length score as a two-decimal percentage string, e.g. `66.67%`.
    pub fn length_score_percent(&self) -> String {
        format!("{:.2}%", self.length_score * 100.0)
    }

    /// Complexity score as a two-decimal percentage string, e.g. `75.00%`.
    pub fn complexity_score_percent(&self) -> String {
        format!("{:.2}%", self.complexity_score * 100.0)
    }

    /// Coarse user-facing feedback for the length tier.
    pub fn length_tier(&self) -> LengthTier {
        match (self.length_score * f64::from(LENGTH_BUCKETS)).round() as u32 {
            0 => LengthTier::TooShort,
            1 => LengthTier::Adequate,
            _ => LengthTier::Strong,
        }
    }
}

/// Discrete length feedback tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthTier {
    TooShort,
    Adequate,
    Strong,
}

impl fmt::Display for LengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LengthTier::TooShort => "too short",
            LengthTier::Adequate => "adequate",
            LengthTier::Strong => "strong",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_formatting_two_decimals() {
        let evaluation = PasswordEvaluation {
            length_score: 2.0 / 3.0,
            complexity_score: 0.25,
        };
        assert_eq!(evaluation.length_score_percent(), "66.67%");
        assert_eq!(evaluation.complexity_score_percent(), "25.00%");
    }

    #[test]
    fn test_percent_formatting_full_score() {
        let evaluation = PasswordEvaluation {
            length_score: 1.0 / 3.0,
            complexity_score: 1.0,
        };
        assert_eq!(evaluation.length_score_percent(), "33.33%");
        assert_eq!(evaluation.complexity_score_percent(), "100.00%");
    }

    #[test]
    fn test_length_tiers() {
        let tier = |length_score: f64| {
            PasswordEvaluation {
                length_score,
                complexity_score: 0.0,
            }
            .length_tier()
        };
        assert_eq!(tier(0.0), LengthTier::TooShort);
        assert_eq!(tier(1.0 / 3.0), LengthTier::Adequate);
        assert_eq!(tier(2.0 / 3.0), LengthTier::Strong);
    }

    #[test]
    fn test_length_tier_display() {
        assert_eq!(LengthTier::TooShort.to_string(), "too short");
        assert_eq!(LengthTier::Adequate.to_string(), "adequate");
        assert_eq!(LengthTier::Strong.to_string(), "strong");
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lowest score the engine will report.
pub const SCORE_FLOOR: f64 = 0.1;

/// Score reported when no metric carried any usable weight.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Clamp a raw aggregate into the reportable score range.
///
/// Non-finite input resolves to the neutral score instead of propagating.
pub fn clamp_score(raw: f64, floor: f64) -> f64 {
    if !raw.is_finite() {
        return NEUTRAL_SCORE;
    }
    raw.clamp(floor, 1.0)
}

/// Qualitative band derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Qualifier {
    #[serde(rename = "Exceptional")]
    Exceptional,
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Very good")]
    VeryGood,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "Needs improvement")]
    NeedsImprovement,
}

impl Qualifier {
    /// Band a score according to the fixed thresholds.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Qualifier::Exceptional
        } else if score >= 0.8 {
            Qualifier::Excellent
        } else if score >= 0.7 {
            Qualifier::VeryGood
        } else if score >= 0.6 {
            Qualifier::Good
        } else if score >= 0.5 {
            Qualifier::Average
        } else {
            Qualifier::NeedsImprovement
        }
    }

    /// Label used in reports and serialized results.
    pub fn label(self) -> &'static str {
        match self {
            Qualifier::Exceptional => "Exceptional",
            Qualifier::Excellent => "Excellent",
            Qualifier::VeryGood => "Very good",
            Qualifier::Good => "Good",
            Qualifier::Average => "Average",
            Qualifier::NeedsImprovement => "Needs improvement",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_reportable_range() {
        assert_eq!(clamp_score(1.4, SCORE_FLOOR), 1.0);
        assert_eq!(clamp_score(0.02, SCORE_FLOOR), SCORE_FLOOR);
        assert_eq!(clamp_score(0.73, SCORE_FLOOR), 0.73);
    }

    #[test]
    fn non_finite_input_resolves_to_neutral() {
        assert_eq!(clamp_score(f64::NAN, SCORE_FLOOR), NEUTRAL_SCORE);
        assert_eq!(clamp_score(f64::NEG_INFINITY, SCORE_FLOOR), NEUTRAL_SCORE);
    }

    #[test]
    fn bands_follow_the_fixed_thresholds() {
        assert_eq!(Qualifier::from_score(0.95), Qualifier::Exceptional);
        assert_eq!(Qualifier::from_score(0.9), Qualifier::Exceptional);
        assert_eq!(Qualifier::from_score(0.85), Qualifier::Excellent);
        assert_eq!(Qualifier::from_score(0.7), Qualifier::VeryGood);
        assert_eq!(Qualifier::from_score(0.6), Qualifier::Good);
        assert_eq!(Qualifier::from_score(0.5), Qualifier::Average);
        assert_eq!(Qualifier::from_score(0.1), Qualifier::NeedsImprovement);
    }
}

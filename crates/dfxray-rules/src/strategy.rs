use std::fmt;

use dfxray_core::{EffortLevel, MetricKind, MetricValue};

use crate::model::ValueRange;

/// Score an unexpected value kind as neutral rather than failing.
const WRONG_KIND_SCORE: f64 = 0.5;

/// Scoring strategy: a pure `value -> score in [0, 1]` mapping.
///
/// Implementations must be total and side-effect-free. Out-of-domain or
/// wrong-kind input is clamped into a valid score, never propagated.
pub trait Strategy: fmt::Debug + Send + Sync {
    fn evaluate(&self, value: &MetricValue) -> f64;

    /// Value kind this strategy expects; checked at registry load time.
    fn expected_kind(&self) -> MetricKind;
}

/// Guard a raw strategy output: non-finite becomes 0.0, the rest clamps.
pub(crate) fn guard(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Numeric band scoring around declared optimal/acceptable ranges.
///
/// Values inside the optimal band score 1.0, taper linearly to 0.5 at the
/// acceptable edge, and decay toward 0 beyond it.
#[derive(Debug, Clone, Copy)]
pub struct TargetRange {
    pub optimal: ValueRange,
    pub acceptable: ValueRange,
}

impl Strategy for TargetRange {
    fn evaluate(&self, value: &MetricValue) -> f64 {
        let Some(v) = value.as_f64() else {
            return WRONG_KIND_SCORE;
        };
        if !v.is_finite() {
            return WRONG_KIND_SCORE;
        }
        if self.optimal.contains(v) {
            return 1.0;
        }
        if self.acceptable.contains(v) {
            let (optimal_edge, acceptable_edge) = if v < self.optimal.min {
                (self.optimal.min, self.acceptable.min)
            } else {
                (self.optimal.max, self.acceptable.max)
            };
            let span = (acceptable_edge - optimal_edge).abs();
            if span <= f64::EPSILON {
                return 0.5;
            }
            let t = ((v - optimal_edge).abs() / span).clamp(0.0, 1.0);
            return 1.0 - 0.5 * t;
        }
        let excess = if v < self.acceptable.min {
            self.acceptable.min - v
        } else {
            v - self.acceptable.max
        };
        let span = self.acceptable.width().max(f64::EPSILON);
        0.5 / (1.0 + 2.0 * excess / span)
    }

    fn expected_kind(&self) -> MetricKind {
        MetricKind::Num
    }
}

/// Proportion metrics already expressed in [0, 1]; the value is the score.
#[derive(Debug, Clone, Copy)]
pub struct Proportion;

impl Strategy for Proportion {
    fn evaluate(&self, value: &MetricValue) -> f64 {
        match value.as_f64() {
            Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
            _ => WRONG_KIND_SCORE,
        }
    }

    fn expected_kind(&self) -> MetricKind {
        MetricKind::Num
    }
}

/// Boolean metric with a declared good polarity.
#[derive(Debug, Clone, Copy)]
pub struct Presence {
    /// The value that scores 1.0; the opposite scores 0.0.
    pub expected: bool,
}

impl Strategy for Presence {
    fn evaluate(&self, value: &MetricValue) -> f64 {
        match value.as_bool() {
            Some(v) if v == self.expected => 1.0,
            Some(_) => 0.0,
            None => WRONG_KIND_SCORE,
        }
    }

    fn expected_kind(&self) -> MetricKind {
        MetricKind::Bool
    }
}

/// Categorical ease levels mapped to fixed scores.
#[derive(Debug, Clone, Copy)]
pub struct Ease;

impl Strategy for Ease {
    fn evaluate(&self, value: &MetricValue) -> f64 {
        match value.as_level() {
            Some(EffortLevel::Easy) => 1.0,
            Some(EffortLevel::Moderate) => 0.6,
            Some(EffortLevel::Hard) => 0.25,
            None => WRONG_KIND_SCORE,
        }
    }

    fn expected_kind(&self) -> MetricKind {
        MetricKind::Level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banded() -> TargetRange {
        TargetRange {
            optimal: ValueRange::new(2.0, 10.0),
            acceptable: ValueRange::new(1.0, 20.0),
        }
    }

    #[test]
    fn optimal_band_scores_full() {
        assert_eq!(banded().evaluate(&MetricValue::Num(5.0)), 1.0);
        assert_eq!(banded().evaluate(&MetricValue::Num(2.0)), 1.0);
        assert_eq!(banded().evaluate(&MetricValue::Num(10.0)), 1.0);
    }

    #[test]
    fn acceptable_band_tapers_to_half() {
        let strategy = banded();
        let at_edge = strategy.evaluate(&MetricValue::Num(20.0));
        assert!((at_edge - 0.5).abs() < 1e-9);
        let mid = strategy.evaluate(&MetricValue::Num(15.0));
        assert!(mid > 0.5 && mid < 1.0);
    }

    #[test]
    fn beyond_acceptable_decays_monotonically() {
        let strategy = banded();
        let near = strategy.evaluate(&MetricValue::Num(25.0));
        let far = strategy.evaluate(&MetricValue::Num(40.0));
        assert!(near < 0.5);
        assert!(far < near);
        assert!(far > 0.0);
    }

    #[test]
    fn wrong_kind_input_scores_neutral() {
        assert_eq!(banded().evaluate(&MetricValue::Bool(true)), 0.5);
        assert_eq!(Proportion.evaluate(&MetricValue::Bool(true)), 0.5);
        assert_eq!(Presence { expected: true }.evaluate(&MetricValue::Num(1.0)), 0.5);
        assert_eq!(Ease.evaluate(&MetricValue::Num(1.0)), 0.5);
    }

    #[test]
    fn malformed_numbers_never_escape() {
        assert_eq!(banded().evaluate(&MetricValue::Num(f64::NAN)), 0.5);
        assert_eq!(Proportion.evaluate(&MetricValue::Num(f64::INFINITY)), 0.5);
    }

    #[test]
    fn proportion_clamps_out_of_domain_values() {
        assert_eq!(Proportion.evaluate(&MetricValue::Num(1.8)), 1.0);
        assert_eq!(Proportion.evaluate(&MetricValue::Num(-0.2)), 0.0);
    }

    #[test]
    fn presence_respects_polarity() {
        let wants_absent = Presence { expected: false };
        assert_eq!(wants_absent.evaluate(&MetricValue::Bool(false)), 1.0);
        assert_eq!(wants_absent.evaluate(&MetricValue::Bool(true)), 0.0);
    }

    #[test]
    fn guard_absorbs_non_finite_output() {
        assert_eq!(guard(f64::NAN), 0.0);
        assert_eq!(guard(2.0), 1.0);
        assert_eq!(guard(-0.5), 0.0);
        assert_eq!(guard(0.7), 0.7);
    }
}

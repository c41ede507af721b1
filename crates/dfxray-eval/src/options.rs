use dfxray_core::{NEUTRAL_SCORE, SCORE_FLOOR};
use serde::{Deserialize, Serialize};

/// Options for the evaluation engine.
///
/// The defaults preserve the original heuristic constants; none of them is
/// validated against real manufacturing data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateOptions {
    /// Individual rule score below which a recommendation is emitted.
    pub recommendation_threshold: f64,
    /// Individual rule score below which a recommendation is high priority.
    pub high_priority_threshold: f64,
    /// Metric adjustment applied per net lexical indicator.
    pub indicator_step: f64,
    /// Cap on the total indicator adjustment magnitude.
    pub indicator_cap: f64,
    /// Lowest reportable score.
    pub score_floor: f64,
    /// Score reported when no metric carries usable weight.
    pub neutral_score: f64,
    /// Individual rule score from which a metric counts as a strength.
    pub strength_threshold: f64,
    /// Ceiling for the projected-improvement estimate.
    pub projection_ceiling: f64,
    /// Projected gain per high-priority recommendation.
    pub projection_high_gain: f64,
    /// Projected gain per medium-priority recommendation.
    pub projection_medium_gain: f64,
    /// Seed for fallback phrasing; `None` draws one from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            recommendation_threshold: 0.6,
            high_priority_threshold: 0.4,
            indicator_step: 0.10,
            indicator_cap: 0.30,
            score_floor: SCORE_FLOOR,
            neutral_score: NEUTRAL_SCORE,
            strength_threshold: 0.8,
            projection_ceiling: 0.95,
            projection_high_gain: 0.08,
            projection_medium_gain: 0.04,
            seed: None,
        }
    }
}

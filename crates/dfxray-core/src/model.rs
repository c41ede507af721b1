use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::score::Qualifier;
use crate::value::{MetricValue, Metrics};

/// Evaluation request consumed from the surrounding system.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EvaluateRequest {
    /// Design brief / prompt text.
    pub description: String,
    /// Aspect wire code (`DFA`, `DFM`, `DFS`, `DFSust`).
    pub aspect: String,
    /// Product category label.
    pub category: String,
    /// Reserved for future real image analysis; currently unused.
    #[serde(
        default,
        rename = "rawFeatures",
        skip_serializing_if = "Option::is_none"
    )]
    pub raw_features: Option<serde_json::Value>,
}

/// Recommendation priority bands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
        }
    }
}

/// One prioritized improvement recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    /// Metric rule id this recommendation targets.
    pub rule_id: String,
    /// Display name of the metric rule.
    pub rule_name: String,
    /// Metric value the recommendation was derived from.
    pub current_value: MetricValue,
    /// Individual rule score that triggered the recommendation.
    pub rule_score: f64,
    pub priority: Priority,
    /// Human-readable suggestion text.
    pub suggestion: String,
}

/// Final evaluation result produced for the surrounding system.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EvaluateResult {
    /// Normalized score in [0.1, 1.0].
    pub score: f64,
    /// Qualitative band for the score.
    pub qualifier: Qualifier,
    /// Metric values the score was computed from, keyed by metric id.
    pub metrics: Metrics,
    /// Prioritized recommendations, high priority first.
    pub recommendations: Vec<Recommendation>,
    /// Structured human-readable report.
    pub report: String,
}

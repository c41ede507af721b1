use dfxray_core::{clamp_score, MetricValue, Metrics};
use dfxray_rules::{AspectRules, RuleRegistry};
use serde::Serialize;
use tracing::debug;

use crate::errors::EvalError;
use crate::options::EvaluateOptions;
use crate::sanitize::sanitize_metrics;

/// Weighted contribution of one metric to an aspect score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMetric {
    pub id: String,
    pub name: String,
    pub value: MetricValue,
    /// Individual rule score in [0, 1].
    pub score: f64,
    pub weight: f64,
}

/// Aggregate sanitized metrics into an aspect score.
///
/// Metrics absent from the input contribute to neither sum; if no metric
/// carries weight the neutral default is returned. The final score is
/// clamped into the reportable range and is never NaN.
pub fn score_metrics(
    metrics: &Metrics,
    aspect: &AspectRules,
    options: &EvaluateOptions,
) -> (f64, Vec<ScoredMetric>) {
    let mut weighted_sum = 0.0;
    let mut used_weight = 0.0;
    let mut breakdown = Vec::new();

    for rule in &aspect.rules {
        let Some(value) = metrics.get(rule.id) else {
            continue;
        };
        let score = rule.score(value);
        if !score.is_finite() {
            continue;
        }
        weighted_sum += score * rule.weight;
        used_weight += rule.weight;
        breakdown.push(ScoredMetric {
            id: rule.id.to_string(),
            name: rule.name.to_string(),
            value: value.clone(),
            score,
            weight: rule.weight,
        });
    }

    let raw = if used_weight <= f64::EPSILON {
        options.neutral_score
    } else {
        weighted_sum / used_weight
    };
    let final_score = clamp_score(raw, options.score_floor);
    debug!(
        aspect = aspect.id.code(),
        used_weight,
        score = final_score,
        "aggregated metric scores"
    );
    (final_score, breakdown)
}

/// Score a metrics map for an aspect referenced by wire code.
///
/// The input is sanitized first, so malformed values degrade to absent
/// instead of failing the call; the only error is an unknown aspect.
pub fn score(
    metrics: &Metrics,
    aspect_code: &str,
    registry: &RuleRegistry,
    options: &EvaluateOptions,
) -> Result<f64, EvalError> {
    let aspect = registry
        .aspect(aspect_code)
        .map_err(|_| EvalError::UnknownAspect(aspect_code.to_string()))?;
    let clean = sanitize_metrics(metrics, aspect);
    Ok(score_metrics(&clean, aspect, options).0)
}

use dfxray_core::{MetricValue, Metrics};
use dfxray_rules::{AspectRules, IndicatorSummary};

use crate::options::EvaluateOptions;

/// Bounded adjustment factor from the positive/negative indicator balance.
pub fn indicator_factor(summary: &IndicatorSummary, options: &EvaluateOptions) -> f64 {
    let net = summary.net() as f64;
    (net * options.indicator_step).clamp(-options.indicator_cap, options.indicator_cap)
}

/// Fold lexical evidence into sanitized metric values before aggregation.
///
/// Text evidence moves metric values, it never overrides the final score:
/// numeric metrics are nudged a capped fraction of the distance toward
/// (positive net) or away from (negative net) the rule's optimal midpoint,
/// boolean metrics follow the sign of the net balance. Categorical levels
/// stay untouched.
pub fn apply_indicator_adjustment(
    metrics: &mut Metrics,
    aspect: &AspectRules,
    summary: &IndicatorSummary,
    options: &EvaluateOptions,
) {
    let factor = indicator_factor(summary, options);
    if factor == 0.0 {
        return;
    }
    for rule in &aspect.rules {
        let Some(value) = metrics.get_mut(rule.id) else {
            continue;
        };
        match value {
            MetricValue::Bool(flag) => {
                *flag = factor > 0.0;
            }
            MetricValue::Num(v) => {
                let target = rule.optimal.map_or(1.0, |range| range.midpoint());
                let pull = (target - *v) * factor.abs();
                if factor > 0.0 {
                    *v += pull;
                } else {
                    *v -= pull;
                }
            }
            MetricValue::Level(_) => {}
        }
    }
}

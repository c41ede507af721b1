use dfxray_core::{Metrics, Priority, Qualifier, Recommendation};
use dfxray_rules::{AspectRules, RuleRegistry};

use crate::options::EvaluateOptions;
use crate::sanitize::sanitize_metrics;
use crate::scoring::{score_metrics, ScoredMetric};

/// Inputs for one report synthesis.
#[derive(Debug, Clone, Copy)]
pub struct ReportParams<'a> {
    /// Aspect wire code; unknown codes route to the fallback format.
    pub aspect: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub metrics: &'a Metrics,
    pub score: f64,
    pub recommendations: &'a [Recommendation],
}

/// Render the full evaluation report, deterministically.
///
/// Sparse inputs degrade to explicit "none identified" sentences; an
/// unknown aspect degrades to the short fallback format. The result is
/// never an empty string.
pub fn build_report(
    params: &ReportParams<'_>,
    registry: &RuleRegistry,
    options: &EvaluateOptions,
) -> String {
    match registry.aspect(params.aspect) {
        Ok(aspect) => render_full(params, aspect, options),
        Err(_) => fallback_report(params.aspect, params.metrics, params.score),
    }
}

fn render_full(
    params: &ReportParams<'_>,
    aspect: &AspectRules,
    options: &EvaluateOptions,
) -> String {
    let clean = sanitize_metrics(params.metrics, aspect);
    let (_, breakdown) = score_metrics(&clean, aspect, options);

    let mut lines = Vec::new();

    lines.push(format!("# {} evaluation", aspect.name));
    lines.push(String::new());
    let qualifier = Qualifier::from_score(params.score);
    lines.push(format!(
        "Overall score: {} ({}).",
        percent(params.score),
        qualifier.label()
    ));
    lines.push(format!("- Category: {}", display_or_dash(params.category)));
    lines.push(format!(
        "- Design brief: {}",
        display_or_dash(&excerpt(params.description, 140))
    ));
    lines.push(String::new());

    lines.push("## Metric breakdown".to_string());
    if breakdown.is_empty() {
        lines.push("No metrics were available for this evaluation.".to_string());
    } else {
        lines.push("| metric | value | score | status | weight |".to_string());
        lines.push("| --- | --- | --- | --- | --- |".to_string());
        for metric in &breakdown {
            lines.push(format!(
                "| {} | {} | {} | {} | {:.0}% |",
                metric.name,
                metric.value,
                percent(metric.score),
                Qualifier::from_score(metric.score).label(),
                metric.weight * 100.0
            ));
        }
    }
    lines.push(String::new());

    lines.push("## Strengths".to_string());
    let strengths: Vec<&ScoredMetric> = breakdown
        .iter()
        .filter(|metric| metric.score >= options.strength_threshold)
        .collect();
    if strengths.is_empty() {
        lines.push("None identified.".to_string());
    } else {
        for metric in strengths {
            lines.push(format!(
                "- {}: {} ({})",
                metric.name,
                metric.value,
                percent(metric.score)
            ));
        }
    }
    lines.push(String::new());

    lines.push("## Improvement areas".to_string());
    if params.recommendations.is_empty() {
        lines.push("None identified.".to_string());
    } else {
        for recommendation in params.recommendations {
            lines.push(format!(
                "- {}: {} ({})",
                recommendation.rule_name,
                recommendation.current_value,
                percent(recommendation.rule_score)
            ));
        }
    }
    lines.push(String::new());

    lines.push("## Recommendations".to_string());
    if params.recommendations.is_empty() {
        lines.push("None identified.".to_string());
    } else {
        for priority in [Priority::High, Priority::Medium] {
            let group: Vec<&Recommendation> = params
                .recommendations
                .iter()
                .filter(|recommendation| recommendation.priority == priority)
                .collect();
            if group.is_empty() {
                continue;
            }
            lines.push(format!("### {} priority", capitalize(priority.label())));
            for recommendation in group {
                lines.push(format!("- {}", recommendation.suggestion));
            }
        }
    }
    lines.push(String::new());

    lines.push("## Projected improvement".to_string());
    let projected = projected_score(params.score, params.recommendations, options);
    if params.recommendations.is_empty() {
        lines.push("The design already sits at its evaluated level.".to_string());
    } else {
        lines.push(format!(
            "Addressing the recommendations could raise the score to approximately {}.",
            percent(projected)
        ));
    }
    lines.push(String::new());

    lines.push("## Design tips".to_string());
    for tip in aspect.tips {
        lines.push(format!("- {tip}"));
    }

    lines.join("\n")
}

/// Short report used when the full synthesis path cannot run.
///
/// Still carries the score and the metric list, and is never empty.
pub fn fallback_report(aspect_code: &str, metrics: &Metrics, score: f64) -> String {
    let mut lines = Vec::new();
    lines.push("# Design evaluation summary".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Aspect '{aspect_code}' is not part of the DfX rubric; showing raw results."
    ));
    lines.push(format!(
        "Score: {} ({}).",
        percent(score),
        Qualifier::from_score(score).label()
    ));
    lines.push(String::new());
    lines.push("## Metrics".to_string());
    if metrics.is_empty() {
        lines.push("No metrics were available.".to_string());
    } else {
        for (id, value) in metrics {
            lines.push(format!("- {id}: {value}"));
        }
    }
    lines.join("\n")
}

fn projected_score(
    current: f64,
    recommendations: &[Recommendation],
    options: &EvaluateOptions,
) -> f64 {
    let gain: f64 = recommendations
        .iter()
        .map(|recommendation| match recommendation.priority {
            Priority::High => options.projection_high_gain,
            Priority::Medium => options.projection_medium_gain,
        })
        .sum();
    (current + gain).min(options.projection_ceiling)
}

fn percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

fn display_or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        "-".to_string()
    } else {
        text.trim().to_string()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfxray_core::MetricValue;

    fn registry() -> RuleRegistry {
        RuleRegistry::load().expect("registry loads")
    }

    #[test]
    fn full_report_carries_every_section() {
        let registry = registry();
        let options = EvaluateOptions::default();
        let mut metrics = Metrics::new();
        metrics.insert("part_count".to_string(), MetricValue::Num(5.0));
        metrics.insert("symmetry".to_string(), MetricValue::Bool(true));

        let params = ReportParams {
            aspect: "DFA",
            category: "Mobilier",
            description: "a modular bookshelf",
            metrics: &metrics,
            score: 0.92,
            recommendations: &[],
        };
        let report = build_report(&params, &registry, &options);
        for heading in [
            "# Design for Assembly evaluation",
            "## Metric breakdown",
            "## Strengths",
            "## Improvement areas",
            "## Recommendations",
            "## Projected improvement",
            "## Design tips",
        ] {
            assert!(report.contains(heading), "missing {heading}");
        }
        assert!(report.contains("None identified."));
        assert!(report.contains("92%"));
    }

    #[test]
    fn empty_metrics_degrade_to_sentences_not_errors() {
        let registry = registry();
        let options = EvaluateOptions::default();
        let metrics = Metrics::new();
        let params = ReportParams {
            aspect: "DFS",
            category: "",
            description: "",
            metrics: &metrics,
            score: 0.5,
            recommendations: &[],
        };
        let report = build_report(&params, &registry, &options);
        assert!(!report.is_empty());
        assert!(report.contains("No metrics were available for this evaluation."));
    }

    #[test]
    fn unknown_aspect_uses_the_fallback_format() {
        let registry = registry();
        let options = EvaluateOptions::default();
        let mut metrics = Metrics::new();
        metrics.insert("part_count".to_string(), MetricValue::Num(5.0));
        let params = ReportParams {
            aspect: "DFX",
            category: "Mobilier",
            description: "whatever",
            metrics: &metrics,
            score: 0.5,
            recommendations: &[],
        };
        let report = build_report(&params, &registry, &options);
        assert!(!report.is_empty());
        assert!(report.contains("DFX"));
        assert!(report.contains("part_count: 5"));
        assert!(report.contains("50%"));
    }

    #[test]
    fn projection_is_capped_below_one() {
        let options = EvaluateOptions::default();
        let recommendations: Vec<Recommendation> = (0..10)
            .map(|index| Recommendation {
                rule_id: format!("rule_{index}"),
                rule_name: format!("Rule {index}"),
                current_value: MetricValue::Num(0.0),
                rule_score: 0.1,
                priority: Priority::High,
                suggestion: "fix it".to_string(),
            })
            .collect();
        let projected = projected_score(0.9, &recommendations, &options);
        assert!(projected <= options.projection_ceiling);
    }
}

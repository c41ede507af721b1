use dfxray_core::{MetricValue, Metrics, Priority, Recommendation};
use dfxray_rules::{AspectRules, MetricRule};

use crate::options::EvaluateOptions;

/// Derive prioritized recommendations from the metrics of one evaluation.
///
/// Every metric present is re-scored individually; anything below the
/// recommendation threshold becomes a candidate, high priority below the
/// high-priority boundary. The result is sorted high before medium and is
/// otherwise stable in registry declaration order. Metrics absent from the
/// input never produce a recommendation.
pub fn recommend(
    metrics: &Metrics,
    aspect: &AspectRules,
    options: &EvaluateOptions,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    for rule in &aspect.rules {
        let Some(value) = metrics.get(rule.id) else {
            continue;
        };
        let score = rule.score(value);
        if score >= options.recommendation_threshold {
            continue;
        }
        let priority = if score < options.high_priority_threshold {
            Priority::High
        } else {
            Priority::Medium
        };
        recommendations.push(Recommendation {
            rule_id: rule.id.to_string(),
            rule_name: rule.name.to_string(),
            current_value: value.clone(),
            rule_score: score,
            priority,
            suggestion: suggestion_for(rule, value),
        });
    }
    recommendations.sort_by_key(|recommendation| recommendation.priority);
    recommendations
}

fn suggestion_for(rule: &MetricRule, value: &MetricValue) -> String {
    if let Some(text) = templated_suggestion(rule, value) {
        return text;
    }
    match rule.optimal {
        Some(range) => format!(
            "Bring {} from {value} into the {} range.",
            lowercase_first(rule.name),
            range_text(range.min, range.max, rule.unit)
        ),
        None => format!(
            "Improve {} (currently {value}); it drags the aspect score down.",
            lowercase_first(rule.name)
        ),
    }
}

fn templated_suggestion(rule: &MetricRule, value: &MetricValue) -> Option<String> {
    let range = rule.optimal;
    let text = match rule.id {
        "part_count" => {
            let range = range?;
            format!(
                "Reduce the part count from {value} to the {} range by merging adjacent components.",
                range_text(range.min, range.max, rule.unit)
            )
        }
        "fastener_types" => {
            let range = range?;
            format!(
                "Standardize fasteners: go from {value} types down to {} by reusing one screw size.",
                range_text(range.min, range.max, rule.unit)
            )
        }
        "self_locating_features" => {
            "Add self-locating features such as chamfers, keyed bosses, or snap-fits so parts \
             position themselves during assembly."
                .to_string()
        }
        "assembly_direction" => {
            "Reorient components so the product assembles along a single axis, ideally straight \
             down."
                .to_string()
        }
        "tool_changes" => {
            "Cut tool changes by grouping identical fasteners and favoring tool-free joints."
                .to_string()
        }
        "symmetry" => {
            "Make parts symmetric, or exaggerate their asymmetry so wrong insertion is impossible."
                .to_string()
        }
        "wall_thickness" => {
            let range = range?;
            format!(
                "Adjust wall thickness from {value} into the {} window to avoid sink marks and \
                 short shots.",
                range_text(range.min, range.max, rule.unit)
            )
        }
        "draft_angles" => {
            let range = range?;
            format!(
                "Increase draft toward {} so parts eject cleanly.",
                range_text(range.min, range.max, rule.unit)
            )
        }
        "undercuts" => {
            "Remove undercuts or redesign them as pass-through features to avoid slides and \
             lifters."
                .to_string()
        }
        "uniform_thickness" => {
            "Even out wall thickness; core out thick sections instead of letting variation grow."
                .to_string()
        }
        "material_compatibility" => {
            "Switch to a material that suits the intended process, or adapt the process to the \
             material."
                .to_string()
        }
        "disassembly_steps" => {
            let range = range?;
            format!(
                "Shorten disassembly from {value} steps to {}; one access panel should expose \
                 the service points.",
                range_text(range.min, range.max, rule.unit)
            )
        }
        "component_labeling" => {
            "Label connectors, consumables, and service points where the technician will look."
                .to_string()
        }
        "recyclable_materials" => {
            "Raise the recyclable material share: prefer mono-materials and separable joints \
             over bonded mixed materials."
                .to_string()
        }
        "material_count" => {
            let range = range?;
            format!(
                "Consolidate from {value} materials toward {}; fewer materials simplify sorting \
                 at end of life.",
                range_text(range.min, range.max, rule.unit)
            )
        }
        "mono_material_design" => {
            "Move toward a mono-material construction so the product can be recycled without \
             disassembly."
                .to_string()
        }
        _ => return None,
    };
    Some(text)
}

fn range_text(min: f64, max: f64, unit: Option<&str>) -> String {
    let span = format!("{}-{}", trim_num(min), trim_num(max));
    match unit {
        Some(unit) => format!("{span} {unit}"),
        None => span,
    }
}

fn trim_num(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn lowercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfxray_core::AspectId;
    use dfxray_rules::RuleRegistry;

    #[test]
    fn high_priority_comes_before_medium() {
        let registry = RuleRegistry::load().expect("registry loads");
        let aspect = registry.aspect_rules(AspectId::Assembly);
        let options = EvaluateOptions::default();

        let mut metrics = Metrics::new();
        // assembly_direction 4 scores exactly 0.5 (medium); symmetry false scores 0.0 (high).
        metrics.insert("assembly_direction".to_string(), MetricValue::Num(4.0));
        metrics.insert("symmetry".to_string(), MetricValue::Bool(false));

        let recommendations = recommend(&metrics, aspect, &options);
        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].priority, Priority::High);
        assert_eq!(recommendations[0].rule_id, "symmetry");
        assert_eq!(recommendations[1].priority, Priority::Medium);
        assert_eq!(recommendations[1].rule_id, "assembly_direction");
    }

    #[test]
    fn absent_metrics_never_produce_recommendations() {
        let registry = RuleRegistry::load().expect("registry loads");
        let aspect = registry.aspect_rules(AspectId::Assembly);
        let options = EvaluateOptions::default();

        let recommendations = recommend(&Metrics::new(), aspect, &options);
        assert!(recommendations.is_empty());
    }

    #[test]
    fn suggestions_use_the_declared_range_and_unit() {
        let registry = RuleRegistry::load().expect("registry loads");
        let aspect = registry.aspect_rules(AspectId::Assembly);
        let options = EvaluateOptions::default();

        let mut metrics = Metrics::new();
        metrics.insert("part_count".to_string(), MetricValue::Num(35.0));

        let recommendations = recommend(&metrics, aspect, &options);
        assert_eq!(recommendations.len(), 1);
        let suggestion = &recommendations[0].suggestion;
        assert!(suggestion.contains("35"));
        assert!(suggestion.contains("2-10 parts"));
    }

    #[test]
    fn healthy_metrics_stay_quiet() {
        let registry = RuleRegistry::load().expect("registry loads");
        let aspect = registry.aspect_rules(AspectId::Assembly);
        let options = EvaluateOptions::default();

        let mut metrics = Metrics::new();
        metrics.insert("part_count".to_string(), MetricValue::Num(5.0));
        metrics.insert("symmetry".to_string(), MetricValue::Bool(true));

        let recommendations = recommend(&metrics, aspect, &options);
        assert!(recommendations.is_empty());
    }
}

use dfxray_core::Metrics;
use dfxray_rules::AspectRules;

/// Build one clean metrics map for a single evaluation.
///
/// Undeclared ids, wrong-kind values, and non-finite numbers are dropped so
/// downstream scoring can assume well-typed, finite input. The caller's map
/// is never mutated; absent entries stay absent rather than defaulting.
pub fn sanitize_metrics(raw: &Metrics, aspect: &AspectRules) -> Metrics {
    let mut clean = Metrics::new();
    for rule in &aspect.rules {
        let Some(value) = raw.get(rule.id) else {
            continue;
        };
        if value.kind() != rule.kind || !value.is_finite() {
            continue;
        }
        clean.insert(rule.id.to_string(), value.clone());
    }
    clean
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfxray_core::{AspectId, MetricValue};
    use dfxray_rules::RuleRegistry;

    #[test]
    fn drops_malformed_and_undeclared_entries() {
        let registry = RuleRegistry::load().expect("registry loads");
        let aspect = registry.aspect_rules(AspectId::Assembly);

        let mut raw = Metrics::new();
        raw.insert("part_count".to_string(), MetricValue::Num(5.0));
        raw.insert("fastener_types".to_string(), MetricValue::Num(f64::NAN));
        raw.insert("symmetry".to_string(), MetricValue::Num(1.0));
        raw.insert("made_up_metric".to_string(), MetricValue::Num(3.0));

        let clean = sanitize_metrics(&raw, aspect);
        assert_eq!(clean.len(), 1);
        assert_eq!(clean["part_count"], MetricValue::Num(5.0));
        // The input map is untouched.
        assert_eq!(raw.len(), 4);
    }
}

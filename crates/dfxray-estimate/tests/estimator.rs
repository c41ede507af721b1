use dfxray_core::{AspectId, MetricValue};
use dfxray_estimate::estimate_metrics;
use dfxray_rules::RuleRegistry;

fn registry() -> RuleRegistry {
    RuleRegistry::load().expect("registry loads")
}

#[test]
fn every_declared_metric_gets_a_finite_value() {
    let registry = registry();
    let descriptions = [
        "",
        "a simple wooden stool",
        "an advanced articulated robot arm with injection molding housing, \
         snap-fit brackets and tight tolerance gears",
    ];
    for aspect_id in AspectId::ALL {
        let aspect = registry.aspect_rules(aspect_id);
        for description in descriptions {
            let metrics = estimate_metrics(description, "Mobilier", aspect);
            for rule in &aspect.rules {
                let value = metrics
                    .get(rule.id)
                    .unwrap_or_else(|| panic!("{} missing {}", aspect_id.code(), rule.id));
                assert!(value.is_finite(), "{} produced a bad value", rule.id);
                assert_eq!(value.kind(), rule.kind, "{} kind drifted", rule.id);
            }
        }
    }
}

#[test]
fn empty_description_resolves_to_the_category_baseline() {
    let registry = registry();
    let aspect = registry.aspect_rules(AspectId::Assembly);
    let metrics = estimate_metrics("", "Mobilier", aspect);
    // Furniture baseline: 8 parts, 2 fastener types, no keyword-driven booleans.
    assert_eq!(metrics["part_count"], MetricValue::Num(8.0));
    assert_eq!(metrics["fastener_types"], MetricValue::Num(2.0));
    assert_eq!(metrics["self_locating_features"], MetricValue::Bool(false));
    assert_eq!(metrics["assembly_direction"], MetricValue::Num(1.0));
}

#[test]
fn simplicity_language_shrinks_count_metrics() {
    let registry = registry();
    let aspect = registry.aspect_rules(AspectId::Assembly);
    let plain = estimate_metrics("a wooden storage unit", "Mobilier", aspect);
    let simple = estimate_metrics("a minimal, simple wooden storage unit", "Mobilier", aspect);

    let plain_parts = plain["part_count"].as_f64().expect("num");
    let simple_parts = simple["part_count"].as_f64().expect("num");
    assert!(simple_parts <= plain_parts);
}

#[test]
fn complexity_language_grows_count_metrics() {
    let registry = registry();
    let aspect = registry.aspect_rules(AspectId::Assembly);
    let plain = estimate_metrics("a wooden storage unit", "Mobilier", aspect);
    let complex = estimate_metrics(
        "a complex, advanced wooden storage unit",
        "Mobilier",
        aspect,
    );

    let plain_parts = plain["part_count"].as_f64().expect("num");
    let complex_parts = complex["part_count"].as_f64().expect("num");
    assert!(complex_parts > plain_parts);
}

#[test]
fn sustainability_language_lifts_the_recyclability_estimate() {
    let registry = registry();
    let aspect = registry.aspect_rules(AspectId::Sustainability);
    let description = "a recyclable, eco-friendly bookshelf in solid wood";

    let metrics = estimate_metrics(description, "Mobilier", aspect);
    let share = metrics["recyclable_materials"].as_f64().expect("num");
    assert!(share >= 0.8, "estimate was {share}");

    let indicators = dfxray_rules::analyze_indicators(description, aspect);
    assert!(indicators.positive >= 1);
}

#[test]
fn electronics_bias_toward_more_parts_but_more_modularity() {
    let registry = registry();
    let assembly = registry.aspect_rules(AspectId::Assembly);
    let service = registry.aspect_rules(AspectId::Service);

    let furniture_parts = estimate_metrics("", "Mobilier", assembly)["part_count"]
        .as_f64()
        .expect("num");
    let electronics_parts = estimate_metrics("", "consumer electronics", assembly)["part_count"]
        .as_f64()
        .expect("num");
    assert!(electronics_parts > furniture_parts);

    let furniture_modularity = estimate_metrics("", "Mobilier", service)["modularity"]
        .as_f64()
        .expect("num");
    let electronics_modularity = estimate_metrics("", "consumer electronics", service)
        ["modularity"]
        .as_f64()
        .expect("num");
    assert!(electronics_modularity > furniture_modularity);
}

#[test]
fn keyword_driven_booleans_react_to_the_brief() {
    let registry = registry();
    let aspect = registry.aspect_rules(AspectId::Assembly);
    let metrics = estimate_metrics(
        "symmetric panels with snap joints and clip-on covers",
        "Mobilier",
        aspect,
    );
    assert_eq!(metrics["self_locating_features"], MetricValue::Bool(true));
    assert_eq!(metrics["symmetry"], MetricValue::Bool(true));
}

#[test]
fn estimates_are_deterministic() {
    let registry = registry();
    for aspect_id in AspectId::ALL {
        let aspect = registry.aspect_rules(aspect_id);
        let first = estimate_metrics("a modular desk lamp", "Luminaire", aspect);
        let second = estimate_metrics("a modular desk lamp", "Luminaire", aspect);
        assert_eq!(first, second);
    }
}

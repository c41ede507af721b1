use std::collections::BTreeMap;

use dfxray_core::{
    EffortLevel, EvaluateRequest, EvaluateResult, MetricValue, Priority, Qualifier,
    Recommendation,
};

#[test]
fn serializes_result_deterministically() {
    let mut metrics = BTreeMap::new();
    metrics.insert("part_count".to_string(), MetricValue::Num(5.0));
    metrics.insert("symmetry".to_string(), MetricValue::Bool(true));
    metrics.insert(
        "access_ease".to_string(),
        MetricValue::Level(EffortLevel::Easy),
    );

    let result = EvaluateResult {
        score: 0.92,
        qualifier: Qualifier::Exceptional,
        metrics,
        recommendations: Vec::new(),
        report: "# Report".to_string(),
    };

    let json = serde_json::to_string_pretty(&result).expect("serialize result");
    let expected = r##"{
  "score": 0.92,
  "qualifier": "Exceptional",
  "metrics": {
    "access_ease": "easy",
    "part_count": 5.0,
    "symmetry": true
  },
  "recommendations": [],
  "report": "# Report"
}"##;
    assert_eq!(json, expected);
}

#[test]
fn metric_values_round_trip_untagged() {
    let values = vec![
        MetricValue::Bool(false),
        MetricValue::Num(2.5),
        MetricValue::Level(EffortLevel::Hard),
    ];
    let json = serde_json::to_string(&values).expect("serialize values");
    assert_eq!(json, r#"[false,2.5,"hard"]"#);

    let parsed: Vec<MetricValue> = serde_json::from_str(&json).expect("parse values");
    assert_eq!(parsed, values);
}

#[test]
fn request_accepts_raw_features_and_ignores_absence() {
    let json = r#"{
        "description": "modular chair",
        "aspect": "DFA",
        "category": "Mobilier"
    }"#;
    let request: EvaluateRequest = serde_json::from_str(json).expect("parse request");
    assert!(request.raw_features.is_none());

    let json = r#"{
        "description": "modular chair",
        "aspect": "DFA",
        "category": "Mobilier",
        "rawFeatures": {"edges": 12}
    }"#;
    let request: EvaluateRequest = serde_json::from_str(json).expect("parse request");
    assert!(request.raw_features.is_some());
}

#[test]
fn recommendation_priority_serializes_lowercase() {
    let recommendation = Recommendation {
        rule_id: "part_count".to_string(),
        rule_name: "Part count".to_string(),
        current_value: MetricValue::Num(35.0),
        rule_score: 0.19,
        priority: Priority::High,
        suggestion: "Reduce part count".to_string(),
    };
    let json = serde_json::to_value(&recommendation).expect("serialize recommendation");
    assert_eq!(json["priority"], "high");
}

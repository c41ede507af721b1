use dfxray_core::{AspectId, EffortLevel, MetricValue, Metrics};
use dfxray_rules::AspectRules;
use tracing::debug;

use crate::cues::Cues;
use crate::lexicon::{
    BONDED_TERMS, DURABILITY_TERMS, ECO_NEGATIVE_TERMS, ECO_POSITIVE_TERMS, ENERGY_TERMS,
    EXOTIC_MATERIAL_TERMS, LABELING_TERMS, MODULAR_TERMS, MONO_MATERIAL_TERMS, SEALED_TERMS,
    SELF_LOCATING_TERMS, SERVICE_TERMS, STANDARD_PART_TERMS, SYMMETRY_TERMS, UNDERCUT_TERMS,
};
use crate::profiles::{category_profile, CategoryProfile};

/// Estimate a value for every metric the aspect declares.
///
/// Estimates come from category baselines adjusted by the brief's
/// complexity and lexical cues. Every declared metric id receives a finite
/// value; an empty brief resolves to the unmodified category baseline.
pub fn estimate_metrics(description: &str, category: &str, aspect: &AspectRules) -> Metrics {
    let cues = Cues::from_description(description);
    let profile = category_profile(category);

    let metrics = match aspect.id {
        AspectId::Assembly => estimate_assembly(&cues, &profile),
        AspectId::Manufacturing => estimate_manufacturing(&cues, &profile),
        AspectId::Service => estimate_service(&cues, &profile),
        AspectId::Sustainability => estimate_sustainability(&cues, &profile),
    };

    debug!(
        aspect = aspect.id.code(),
        category,
        complexity = cues.complexity,
        metric_count = metrics.len(),
        "estimated metrics"
    );
    metrics
}

fn estimate_assembly(cues: &Cues, profile: &CategoryProfile) -> Metrics {
    let dc = cues.complexity;
    let mut metrics = Metrics::new();

    let part_count = cues
        .tone_scale(profile.base_parts * (1.0 + 0.6 * dc))
        .round()
        .max(1.0);
    metrics.insert("part_count".to_string(), MetricValue::Num(part_count));

    let fastener_types = cues
        .tone_scale(profile.base_fasteners * (1.0 + 0.4 * dc))
        .round()
        .clamp(0.0, 8.0);
    metrics.insert(
        "fastener_types".to_string(),
        MetricValue::Num(fastener_types),
    );

    metrics.insert(
        "self_locating_features".to_string(),
        MetricValue::Bool(cues.any(SELF_LOCATING_TERMS)),
    );

    let assembly_direction = (1.0 + (2.0 * dc).round()).clamp(1.0, 5.0);
    metrics.insert(
        "assembly_direction".to_string(),
        MetricValue::Num(assembly_direction),
    );

    let tool_changes = cues
        .tone_scale(1.0 + 5.0 * dc)
        .round()
        .clamp(0.0, 10.0);
    metrics.insert("tool_changes".to_string(), MetricValue::Num(tool_changes));

    metrics.insert(
        "symmetry".to_string(),
        MetricValue::Bool(cues.any(SYMMETRY_TERMS)),
    );

    metrics
}

fn estimate_manufacturing(cues: &Cues, profile: &CategoryProfile) -> Metrics {
    let dc = cues.complexity;
    let mut metrics = Metrics::new();

    // Denser briefs imply finer features, so walls trend thinner.
    let wall_thickness = (profile.base_wall * (1.0 - 0.3 * dc)).clamp(0.5, 8.0);
    metrics.insert(
        "wall_thickness".to_string(),
        MetricValue::Num(round2(wall_thickness)),
    );

    let draft_angles = (3.0 - 2.0 * dc).clamp(0.5, 5.0);
    metrics.insert(
        "draft_angles".to_string(),
        MetricValue::Num(round2(draft_angles)),
    );

    let corner_radius = (1.5 * (1.0 - 0.4 * dc)).clamp(0.2, 3.0);
    metrics.insert(
        "corner_radius".to_string(),
        MetricValue::Num(round2(corner_radius)),
    );

    let undercuts = cues.any(UNDERCUT_TERMS) || dc > 0.75;
    metrics.insert("undercuts".to_string(), MetricValue::Bool(undercuts));

    let variation = (0.1 + 0.5 * dc).clamp(0.0, 1.0);
    metrics.insert(
        "uniform_thickness".to_string(),
        MetricValue::Num(round2(variation)),
    );

    metrics.insert(
        "material_compatibility".to_string(),
        MetricValue::Bool(!cues.any(EXOTIC_MATERIAL_TERMS)),
    );

    metrics
}

fn estimate_service(cues: &Cues, profile: &CategoryProfile) -> Metrics {
    let dc = cues.complexity;
    let mut metrics = Metrics::new();

    let access = if cues.any(SERVICE_TERMS) {
        EffortLevel::Easy
    } else {
        level_from_complexity(dc, 0.35, 0.7)
    };
    metrics.insert("access_ease".to_string(), MetricValue::Level(access));

    let modular_boost = if cues.any(MODULAR_TERMS) { 0.2 } else { 0.0 };
    let modularity = (profile.modularity + modular_boost - 0.1 * dc).clamp(0.05, 0.95);
    metrics.insert(
        "modularity".to_string(),
        MetricValue::Num(round2(modularity)),
    );

    let standard_boost = if cues.any(STANDARD_PART_TERMS) { 0.2 } else { 0.0 };
    let standard_parts = (0.6 + standard_boost - 0.2 * dc).clamp(0.05, 0.95);
    metrics.insert(
        "standard_parts".to_string(),
        MetricValue::Num(round2(standard_parts)),
    );

    let sealed_penalty = if cues.any(SEALED_TERMS) { 4.0 } else { 0.0 };
    let disassembly_steps = (3.0 + 8.0 * dc + sealed_penalty).round().clamp(1.0, 25.0);
    metrics.insert(
        "disassembly_steps".to_string(),
        MetricValue::Num(disassembly_steps),
    );

    metrics.insert(
        "component_labeling".to_string(),
        MetricValue::Bool(cues.any(LABELING_TERMS)),
    );

    let wear_access = if cues.any(SERVICE_TERMS) {
        EffortLevel::Easy
    } else {
        level_from_complexity(dc, 0.25, 0.6)
    };
    metrics.insert(
        "wear_part_access".to_string(),
        MetricValue::Level(wear_access),
    );

    metrics
}

fn estimate_sustainability(cues: &Cues, profile: &CategoryProfile) -> Metrics {
    let dc = cues.complexity;
    let mut metrics = Metrics::new();

    let eco_boost = 0.15 * cues.hits(ECO_POSITIVE_TERMS) as f64;
    let eco_penalty = 0.15 * cues.hits(ECO_NEGATIVE_TERMS) as f64;
    let recyclable = (profile.recyclability + eco_boost - eco_penalty).clamp(0.05, 0.95);
    metrics.insert(
        "recyclable_materials".to_string(),
        MetricValue::Num(round2(recyclable)),
    );

    let material_count = cues
        .tone_scale(profile.base_materials * (1.0 + 0.5 * dc))
        .round()
        .max(1.0);
    metrics.insert(
        "material_count".to_string(),
        MetricValue::Num(material_count),
    );

    let recycling_access = if cues.any(BONDED_TERMS) {
        EffortLevel::Hard
    } else {
        level_from_complexity(dc, 0.4, 0.75)
    };
    metrics.insert(
        "disassembly_for_recycling".to_string(),
        MetricValue::Level(recycling_access),
    );

    let energy_boost = if cues.any(ENERGY_TERMS) { 0.15 } else { 0.0 };
    let energy = (profile.energy + energy_boost - 0.1 * dc).clamp(0.05, 0.95);
    metrics.insert(
        "energy_efficiency".to_string(),
        MetricValue::Num(round2(energy)),
    );

    let mono = cues.any(MONO_MATERIAL_TERMS) || material_count <= 1.5;
    metrics.insert("mono_material_design".to_string(), MetricValue::Bool(mono));

    let durability_boost = if cues.any(DURABILITY_TERMS) { 0.15 } else { 0.0 };
    let durability = (profile.durability + durability_boost - 0.1 * dc).clamp(0.05, 0.95);
    metrics.insert(
        "durability_rating".to_string(),
        MetricValue::Num(round2(durability)),
    );

    metrics
}

fn level_from_complexity(dc: f64, easy_below: f64, moderate_below: f64) -> EffortLevel {
    if dc < easy_below {
        EffortLevel::Easy
    } else if dc < moderate_below {
        EffortLevel::Moderate
    } else {
        EffortLevel::Hard
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Static definitions for the four DfX aspects.

use dfxray_core::{AspectId, MetricKind};

use crate::model::{AspectRules, MetricRule, ValueRange};
use crate::strategy::{Ease, Presence, Proportion, TargetRange};

fn banded(
    id: &'static str,
    name: &'static str,
    weight: f64,
    unit: Option<&'static str>,
    optimal: ValueRange,
    acceptable: ValueRange,
) -> MetricRule {
    MetricRule {
        id,
        name,
        weight,
        unit,
        kind: MetricKind::Num,
        optimal: Some(optimal),
        acceptable: Some(acceptable),
        strategy: Box::new(TargetRange {
            optimal,
            acceptable,
        }),
    }
}

fn proportion(id: &'static str, name: &'static str, weight: f64) -> MetricRule {
    MetricRule {
        id,
        name,
        weight,
        unit: None,
        kind: MetricKind::Num,
        optimal: Some(ValueRange::new(0.7, 1.0)),
        acceptable: Some(ValueRange::new(0.4, 1.0)),
        strategy: Box::new(Proportion),
    }
}

fn presence(id: &'static str, name: &'static str, weight: f64, expected: bool) -> MetricRule {
    MetricRule {
        id,
        name,
        weight,
        unit: None,
        kind: MetricKind::Bool,
        optimal: None,
        acceptable: None,
        strategy: Box::new(Presence { expected }),
    }
}

fn ease(id: &'static str, name: &'static str, weight: f64) -> MetricRule {
    MetricRule {
        id,
        name,
        weight,
        unit: None,
        kind: MetricKind::Level,
        optimal: None,
        acceptable: None,
        strategy: Box::new(Ease),
    }
}

pub(crate) fn assembly() -> AspectRules {
    AspectRules {
        id: AspectId::Assembly,
        name: "Design for Assembly",
        description: "Ease and cost of putting the product together.",
        rules: vec![
            banded(
                "part_count",
                "Part count",
                0.25,
                Some("parts"),
                ValueRange::new(2.0, 10.0),
                ValueRange::new(1.0, 20.0),
            ),
            banded(
                "fastener_types",
                "Fastener type variety",
                0.15,
                Some("types"),
                ValueRange::new(1.0, 3.0),
                ValueRange::new(0.0, 5.0),
            ),
            presence(
                "self_locating_features",
                "Self-locating features",
                0.15,
                true,
            ),
            banded(
                "assembly_direction",
                "Assembly directions",
                0.15,
                Some("directions"),
                ValueRange::new(1.0, 2.0),
                ValueRange::new(1.0, 4.0),
            ),
            banded(
                "tool_changes",
                "Tool changes",
                0.15,
                Some("changes"),
                ValueRange::new(0.0, 2.0),
                ValueRange::new(0.0, 5.0),
            ),
            presence("symmetry", "Part symmetry", 0.15, true),
        ],
        positive_indicators: &[
            "snap-fit",
            "snap fit",
            "self-locating",
            "modular",
            "symmetric",
            "one-piece",
            "minimal parts",
            "tool-free",
            "clip",
        ],
        negative_indicators: &[
            "glue",
            "adhesive",
            "welded",
            "many screws",
            "complex assembly",
            "manual alignment",
            "shim",
        ],
        tips: &[
            "Prefer snap-fits and self-locating features over separate fasteners.",
            "Design parts to be symmetric or clearly asymmetric so they cannot be inserted wrong.",
            "Keep a single assembly direction, ideally straight down.",
            "Merge adjacent parts when their relative motion and material allow it.",
        ],
    }
}

pub(crate) fn manufacturing() -> AspectRules {
    AspectRules {
        id: AspectId::Manufacturing,
        name: "Design for Manufacturing",
        description: "Fabricability of the individual parts.",
        rules: vec![
            banded(
                "wall_thickness",
                "Wall thickness",
                0.20,
                Some("mm"),
                ValueRange::new(1.5, 4.0),
                ValueRange::new(0.8, 6.0),
            ),
            banded(
                "draft_angles",
                "Draft angles",
                0.15,
                Some("deg"),
                ValueRange::new(1.0, 5.0),
                ValueRange::new(0.5, 8.0),
            ),
            banded(
                "corner_radius",
                "Corner radius",
                0.15,
                Some("mm"),
                ValueRange::new(0.5, 3.0),
                ValueRange::new(0.25, 5.0),
            ),
            presence("undercuts", "Undercuts", 0.20, false),
            banded(
                "uniform_thickness",
                "Thickness variation",
                0.15,
                None,
                ValueRange::new(0.0, 0.2),
                ValueRange::new(0.0, 0.4),
            ),
            presence(
                "material_compatibility",
                "Material/process compatibility",
                0.15,
                true,
            ),
        ],
        positive_indicators: &[
            "uniform wall",
            "draft angle",
            "filleted",
            "rounded corners",
            "moldable",
            "standard tolerances",
            "single material",
        ],
        negative_indicators: &[
            "undercut",
            "sharp corner",
            "thin wall",
            "tight tolerance",
            "variable thickness",
            "deep rib",
        ],
        tips: &[
            "Keep wall thickness uniform; cores and ribs beat solid sections.",
            "Add draft to every face parallel to the mold opening direction.",
            "Round internal corners to reduce stress concentration and tool wear.",
            "Avoid undercuts unless a slide or lifter is already budgeted.",
        ],
    }
}

pub(crate) fn service() -> AspectRules {
    AspectRules {
        id: AspectId::Service,
        name: "Design for Service",
        description: "Ease of maintenance and repair over the product's life.",
        rules: vec![
            ease("access_ease", "Access to serviceable parts", 0.20),
            proportion("modularity", "Modularity", 0.20),
            proportion("standard_parts", "Standard part usage", 0.15),
            banded(
                "disassembly_steps",
                "Disassembly steps",
                0.20,
                Some("steps"),
                ValueRange::new(1.0, 6.0),
                ValueRange::new(1.0, 15.0),
            ),
            presence("component_labeling", "Component labeling", 0.10, true),
            ease("wear_part_access", "Access to wear parts", 0.15),
        ],
        positive_indicators: &[
            "modular",
            "replaceable",
            "serviceable",
            "standard parts",
            "access panel",
            "tool-free",
            "labeled",
        ],
        negative_indicators: &[
            "sealed",
            "glued shut",
            "potted",
            "proprietary fastener",
            "riveted",
            "non-replaceable",
        ],
        tips: &[
            "Place wear parts behind covers that open without tools.",
            "Group service points so one panel exposes all of them.",
            "Prefer standard fasteners and catalog parts over custom ones.",
            "Label connectors and consumables where the technician will look.",
        ],
    }
}

pub(crate) fn sustainability() -> AspectRules {
    AspectRules {
        id: AspectId::Sustainability,
        name: "Design for Sustainability",
        description: "Environmental footprint across material, use, and end of life.",
        rules: vec![
            proportion("recyclable_materials", "Recyclable material share", 0.25),
            banded(
                "material_count",
                "Distinct materials",
                0.15,
                Some("materials"),
                ValueRange::new(1.0, 3.0),
                ValueRange::new(1.0, 6.0),
            ),
            ease(
                "disassembly_for_recycling",
                "Disassembly for recycling",
                0.15,
            ),
            proportion("energy_efficiency", "Energy efficiency", 0.15),
            presence("mono_material_design", "Mono-material design", 0.15, true),
            proportion("durability_rating", "Durability", 0.15),
        ],
        positive_indicators: &[
            "recyclable",
            "recycled",
            "eco-friendly",
            "biodegradable",
            "sustainable",
            "mono-material",
            "low energy",
            "durable",
            "repairable",
        ],
        negative_indicators: &[
            "composite",
            "mixed materials",
            "bonded",
            "laminated",
            "pvc",
            "single-use",
            "disposable",
        ],
        tips: &[
            "Design for one material family; separable joints beat bonded ones.",
            "Mark polymer parts with material codes for sorting.",
            "Trade coatings and laminates for textures molded into the part.",
            "Size for durability first; a longer life outweighs lighter material.",
        ],
    }
}

/// All aspect definitions in declaration order.
pub(crate) fn all() -> Vec<AspectRules> {
    vec![assembly(), manufacturing(), service(), sustainability()]
}

//! Fixed phrase lists used by the complexity scan and the estimators.

/// Domain vocabulary that marks a technically dense brief.
pub(crate) const TECH_TERMS: &[&str] = &[
    "tolerance",
    "tolerancing",
    "assembly",
    "fastener",
    "injection",
    "molding",
    "moulding",
    "machining",
    "wall thickness",
    "draft angle",
    "undercut",
    "uniformity",
    "snap-fit",
    "bracket",
    "housing",
    "chassis",
    "mechanism",
    "actuator",
    "hinge",
    "gasket",
    "reinforced",
    "thermal",
];

/// Simplicity language that shrinks count-like estimates.
pub(crate) const SIMPLICITY_TERMS: &[&str] = &[
    "minimal",
    "minimalist",
    "simple",
    "clean",
    "basic",
    "streamlined",
    "pared-down",
];

/// Complexity language that grows count-like estimates.
pub(crate) const COMPLEXITY_TERMS: &[&str] = &[
    "complex",
    "advanced",
    "intricate",
    "sophisticated",
    "multi-function",
    "articulated",
];

/// Evidence of self-locating assembly features.
pub(crate) const SELF_LOCATING_TERMS: &[&str] = &[
    "self-locating",
    "snap",
    "clip",
    "keyed",
    "interlocking",
    "alignment feature",
];

/// Evidence of symmetric part design.
pub(crate) const SYMMETRY_TERMS: &[&str] = &["symmetric", "symmetrical", "mirrored"];

/// Evidence of undercut geometry.
pub(crate) const UNDERCUT_TERMS: &[&str] = &["undercut", "overhang", "internal channel"];

/// Materials or phrasing that complicate standard processes.
pub(crate) const EXOTIC_MATERIAL_TERMS: &[&str] =
    &["exotic", "composite", "mixed materials", "carbon fiber"];

/// Evidence of a service-friendly layout.
pub(crate) const SERVICE_TERMS: &[&str] = &[
    "access panel",
    "tool-free",
    "serviceable",
    "replaceable",
    "removable cover",
];

/// Evidence of modular construction.
pub(crate) const MODULAR_TERMS: &[&str] = &["modular", "module", "interchangeable"];

/// Evidence of catalog/standard part usage.
pub(crate) const STANDARD_PART_TERMS: &[&str] = &["standard part", "off-the-shelf", "catalog"];

/// Evidence of permanently closed construction.
pub(crate) const SEALED_TERMS: &[&str] = &["sealed", "glued shut", "potted", "riveted"];

/// Evidence of labeled components.
pub(crate) const LABELING_TERMS: &[&str] = &["labeled", "labelled", "marked", "color-coded"];

/// Sustainability-positive language.
pub(crate) const ECO_POSITIVE_TERMS: &[&str] = &[
    "recyclable",
    "recycled",
    "eco-friendly",
    "biodegradable",
    "sustainable",
];

/// Sustainability-negative language.
pub(crate) const ECO_NEGATIVE_TERMS: &[&str] =
    &["laminated", "bonded", "pvc", "single-use", "disposable"];

/// Evidence of bonded joints that block disassembly.
pub(crate) const BONDED_TERMS: &[&str] = &["glue", "glued", "bonded", "laminated", "welded"];

/// Evidence of a single-material construction.
pub(crate) const MONO_MATERIAL_TERMS: &[&str] =
    &["mono-material", "single material", "one material"];

/// Evidence of low-energy operation.
pub(crate) const ENERGY_TERMS: &[&str] = &["low energy", "energy efficient", "passive", "unpowered"];

/// Evidence of a long service life.
pub(crate) const DURABILITY_TERMS: &[&str] = &["durable", "robust", "rugged", "long-lasting"];

use crate::complexity::DEFAULT_CATEGORY_COMPLEXITY;

/// Baseline biases for a product category.
///
/// Profiles are constant data; lookups return a copy so no evaluation ever
/// shares state with another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryProfile {
    /// Overall category complexity in [0, 1].
    pub complexity: f64,
    /// Typical part count.
    pub base_parts: f64,
    /// Typical count of distinct fastener types.
    pub base_fasteners: f64,
    /// Typical share of recyclable material.
    pub recyclability: f64,
    /// Typical modularity share.
    pub modularity: f64,
    /// Typical count of distinct materials.
    pub base_materials: f64,
    /// Typical wall thickness in mm.
    pub base_wall: f64,
    /// Typical durability share.
    pub durability: f64,
    /// Typical energy-efficiency share (1.0 for unpowered products).
    pub energy: f64,
}

const NEUTRAL: CategoryProfile = CategoryProfile {
    complexity: DEFAULT_CATEGORY_COMPLEXITY,
    base_parts: 12.0,
    base_fasteners: 3.0,
    recyclability: 0.5,
    modularity: 0.5,
    base_materials: 3.0,
    base_wall: 2.5,
    durability: 0.6,
    energy: 0.7,
};

const FURNITURE: CategoryProfile = CategoryProfile {
    complexity: 0.45,
    base_parts: 8.0,
    base_fasteners: 2.0,
    recyclability: 0.6,
    modularity: 0.55,
    base_materials: 2.0,
    base_wall: 3.0,
    durability: 0.75,
    energy: 1.0,
};

// Consumer electronics bias toward more parts but higher modularity.
const ELECTRONICS: CategoryProfile = CategoryProfile {
    complexity: 0.85,
    base_parts: 24.0,
    base_fasteners: 4.0,
    recyclability: 0.35,
    modularity: 0.65,
    base_materials: 5.0,
    base_wall: 1.5,
    durability: 0.5,
    energy: 0.55,
};

const APPLIANCE: CategoryProfile = CategoryProfile {
    complexity: 0.75,
    base_parts: 18.0,
    base_fasteners: 4.0,
    recyclability: 0.45,
    modularity: 0.5,
    base_materials: 4.0,
    base_wall: 2.5,
    durability: 0.65,
    energy: 0.6,
};

const TOOL: CategoryProfile = CategoryProfile {
    complexity: 0.6,
    base_parts: 10.0,
    base_fasteners: 3.0,
    recyclability: 0.55,
    modularity: 0.5,
    base_materials: 3.0,
    base_wall: 3.0,
    durability: 0.8,
    energy: 0.85,
};

const TOY: CategoryProfile = CategoryProfile {
    complexity: 0.5,
    base_parts: 9.0,
    base_fasteners: 2.0,
    recyclability: 0.5,
    modularity: 0.4,
    base_materials: 2.0,
    base_wall: 2.0,
    durability: 0.55,
    energy: 0.9,
};

const PACKAGING: CategoryProfile = CategoryProfile {
    complexity: 0.3,
    base_parts: 3.0,
    base_fasteners: 1.0,
    recyclability: 0.75,
    modularity: 0.3,
    base_materials: 1.5,
    base_wall: 1.0,
    durability: 0.4,
    energy: 1.0,
};

const LIGHTING: CategoryProfile = CategoryProfile {
    complexity: 0.55,
    base_parts: 9.0,
    base_fasteners: 2.0,
    recyclability: 0.55,
    modularity: 0.5,
    base_materials: 3.0,
    base_wall: 2.0,
    durability: 0.65,
    energy: 0.75,
};

const PROFILES: &[(&[&str], CategoryProfile)] = &[
    (
        &["furniture", "mobilier", "meuble", "chair", "chaise", "table", "desk", "shelf"],
        FURNITURE,
    ),
    (
        &[
            "electronic",
            "électronique",
            "electronique",
            "phone",
            "laptop",
            "gadget",
            "device",
            "speaker",
        ],
        ELECTRONICS,
    ),
    (
        &["appliance", "électroménager", "electromenager", "kitchen", "vacuum"],
        APPLIANCE,
    ),
    (&["tool", "outil", "hardware", "drill"], TOOL),
    (&["toy", "jouet", "game"], TOY),
    (&["packaging", "emballage", "container", "bottle"], PACKAGING),
    (&["lighting", "luminaire", "lamp", "lampe"], LIGHTING),
];

/// Look up the baseline profile for a category label.
///
/// Matching is a case-insensitive containment test against known category
/// keywords; anything unmatched gets the neutral profile.
pub fn category_profile(category: &str) -> CategoryProfile {
    let needle = category.trim().to_lowercase();
    if needle.is_empty() {
        return NEUTRAL;
    }
    for (keywords, profile) in PROFILES {
        if keywords.iter().any(|keyword| needle.contains(keyword)) {
            return *profile;
        }
    }
    NEUTRAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_match_in_any_case() {
        assert_eq!(category_profile("Mobilier"), FURNITURE);
        assert_eq!(category_profile("Consumer Electronics"), ELECTRONICS);
        assert_eq!(category_profile("Emballage carton"), PACKAGING);
    }

    #[test]
    fn unknown_categories_get_the_neutral_profile() {
        assert_eq!(category_profile("spacecraft"), NEUTRAL);
        assert_eq!(category_profile(""), NEUTRAL);
    }

    #[test]
    fn profile_shares_stay_in_domain() {
        let categories = [
            "Mobilier",
            "consumer electronics",
            "appliance",
            "tool",
            "toy",
            "packaging",
            "lamp",
            "unknown",
        ];
        for category in categories {
            let profile = category_profile(category);
            assert!((0.0..=1.0).contains(&profile.complexity));
            assert!((0.0..=1.0).contains(&profile.recyclability));
            assert!((0.0..=1.0).contains(&profile.modularity));
            assert!((0.0..=1.0).contains(&profile.durability));
            assert!((0.0..=1.0).contains(&profile.energy));
            assert!(profile.base_parts >= 1.0);
        }
    }
}

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::TECH_TERMS;
use crate::profiles::category_profile;

/// Category complexity used when the category is unknown.
pub const DEFAULT_CATEGORY_COMPLEXITY: f64 = 0.7;

/// Word count at which the length factor saturates.
const LENGTH_SATURATION: f64 = 120.0;

/// Technical-term hits at which the vocabulary factor saturates.
const TERM_SATURATION: f64 = 6.0;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}][\p{L}'-]*").expect("static word pattern"));

/// Scalar description complexity in [0, 1].
///
/// Combines brief length with the density of domain technical vocabulary.
/// An empty or whitespace-only description scores 0.0 so every downstream
/// formula falls back to the unmodified category baseline.
pub fn description_complexity(description: &str) -> f64 {
    let text = description.trim();
    if text.is_empty() {
        return 0.0;
    }
    let lower = text.to_lowercase();

    let words = WORD_RE.find_iter(&lower).count();
    let length_factor = (words as f64 / LENGTH_SATURATION).min(1.0);

    let hits = TECH_TERMS
        .iter()
        .filter(|term| lower.contains(*term))
        .count();
    let term_factor = (hits as f64 / TERM_SATURATION).min(1.0);

    0.5 * length_factor + 0.5 * term_factor
}

/// Scalar category complexity from the fixed profile table.
///
/// Unseen categories fall back to [`DEFAULT_CATEGORY_COMPLEXITY`].
pub fn category_complexity(category: &str) -> f64 {
    category_profile(category).complexity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_description_scores_zero() {
        assert_eq!(description_complexity(""), 0.0);
        assert_eq!(description_complexity("   \n\t"), 0.0);
    }

    #[test]
    fn technical_briefs_score_higher_than_plain_ones() {
        let plain = description_complexity("a small wooden box");
        let technical = description_complexity(
            "injection molding housing with snap-fit brackets, uniform wall thickness, \
             draft angle on every face and a reinforced chassis with tight tolerance",
        );
        assert!(technical > plain);
        assert!(technical <= 1.0);
    }

    #[test]
    fn long_briefs_saturate_instead_of_overflowing() {
        let long = "word ".repeat(400);
        let score = description_complexity(&long);
        assert!(score <= 1.0);
        assert!(score >= 0.5);
    }

    #[test]
    fn unknown_categories_use_the_default_complexity() {
        assert_eq!(category_complexity("quantum widget"), DEFAULT_CATEGORY_COMPLEXITY);
        assert!(category_complexity("consumer electronics") > category_complexity("packaging"));
    }
}

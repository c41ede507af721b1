use serde::Serialize;

use crate::model::AspectRules;

/// Kind of lexical indicator match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    Positive,
    Negative,
}

/// One matched keyword from an aspect's indicator lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorMatch {
    #[serde(rename = "type")]
    pub kind: IndicatorKind,
    pub keyword: String,
}

/// Counts and matched terms from scanning a description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorSummary {
    pub positive: usize,
    pub negative: usize,
    pub matches: Vec<IndicatorMatch>,
}

impl IndicatorSummary {
    /// Positive minus negative matches.
    pub fn net(&self) -> i64 {
        self.positive as i64 - self.negative as i64
    }
}

/// Scan a description for the aspect's indicator keywords.
///
/// Case-insensitive substring containment, no partial scoring. An empty
/// description yields zero counts.
pub fn analyze_indicators(description: &str, aspect: &AspectRules) -> IndicatorSummary {
    let mut summary = IndicatorSummary::default();
    if description.trim().is_empty() {
        return summary;
    }
    let haystack = description.to_lowercase();

    for keyword in aspect.positive_indicators {
        if haystack.contains(&keyword.to_lowercase()) {
            summary.positive += 1;
            summary.matches.push(IndicatorMatch {
                kind: IndicatorKind::Positive,
                keyword: (*keyword).to_string(),
            });
        }
    }
    for keyword in aspect.negative_indicators {
        if haystack.contains(&keyword.to_lowercase()) {
            summary.negative += 1;
            summary.matches.push(IndicatorMatch {
                kind: IndicatorKind::Negative,
                keyword: (*keyword).to_string(),
            });
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RuleRegistry;
    use dfxray_core::AspectId;

    #[test]
    fn empty_description_yields_zero_counts() {
        let registry = RuleRegistry::load().expect("registry loads");
        let aspect = registry.aspect_rules(AspectId::Assembly);
        let summary = analyze_indicators("", aspect);
        assert_eq!(summary.positive, 0);
        assert_eq!(summary.negative, 0);
        assert!(summary.matches.is_empty());
    }

    #[test]
    fn matches_are_case_insensitive_substrings() {
        let registry = RuleRegistry::load().expect("registry loads");
        let aspect = registry.aspect_rules(AspectId::Assembly);
        let summary = analyze_indicators(
            "A Modular frame with SNAP-FIT joints, no glue anywhere.",
            aspect,
        );
        assert!(summary.positive >= 2);
        assert_eq!(summary.negative, 1);
        assert!(summary
            .matches
            .iter()
            .any(|m| m.kind == IndicatorKind::Negative && m.keyword == "glue"));
    }

    #[test]
    fn net_balances_positive_and_negative() {
        let registry = RuleRegistry::load().expect("registry loads");
        let aspect = registry.aspect_rules(AspectId::Sustainability);
        let summary = analyze_indicators("recyclable but laminated", aspect);
        assert_eq!(summary.positive, 1);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.net(), 0);
    }
}

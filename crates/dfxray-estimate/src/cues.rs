use crate::complexity::description_complexity;
use crate::lexicon::{COMPLEXITY_TERMS, SIMPLICITY_TERMS};

/// Overall tone of the brief, derived once per estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    Neutral,
    Simple,
    Complex,
}

/// Lexical cues extracted from a design brief.
///
/// Built once per estimation so every per-metric formula reads the same
/// lowercased text and complexity scalar.
#[derive(Debug)]
pub(crate) struct Cues {
    lower: String,
    pub complexity: f64,
    pub tone: Tone,
}

impl Cues {
    pub fn from_description(description: &str) -> Self {
        let lower = description.trim().to_lowercase();
        let complexity = description_complexity(description);

        let simple = SIMPLICITY_TERMS.iter().any(|term| lower.contains(term));
        let complex = COMPLEXITY_TERMS.iter().any(|term| lower.contains(term));
        let tone = match (simple, complex) {
            (true, false) => Tone::Simple,
            (false, true) => Tone::Complex,
            _ => Tone::Neutral,
        };

        Self {
            lower,
            complexity,
            tone,
        }
    }

    /// True when the brief contains any of the given phrases.
    pub fn any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|term| self.lower.contains(term))
    }

    /// Number of distinct phrases from the list present in the brief.
    pub fn hits(&self, terms: &[&str]) -> usize {
        terms.iter().filter(|term| self.lower.contains(*term)).count()
    }

    /// Scale a count-like estimate by the brief's tone.
    pub fn tone_scale(&self, value: f64) -> f64 {
        match self.tone {
            Tone::Simple => value * 0.7,
            Tone::Complex => value * 1.3,
            Tone::Neutral => value,
        }
    }
}

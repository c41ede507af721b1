use dfxray_core::{AspectId, Error};
use sha2::{Digest, Sha256};

use crate::aspects;
use crate::model::AspectRules;
use crate::validate::validate_aspects;

/// Current registry content version.
pub const REGISTRY_VERSION: &str = "0.1";

/// Static, versioned rule registry for the four DfX aspects.
///
/// Loaded once at startup, read-only thereafter. Evaluation calls borrow
/// from it; nothing here is mutated per call.
#[derive(Debug)]
pub struct RuleRegistry {
    aspects: Vec<AspectRules>,
    fingerprint: String,
}

impl RuleRegistry {
    /// Build and validate the registry.
    ///
    /// A weight sum off by more than the tolerance, a duplicate rule id, or
    /// a kind/strategy mismatch is a configuration error that must stop
    /// process startup.
    pub fn load() -> Result<Self, Error> {
        let aspects = aspects::all();
        let report = validate_aspects(&aspects);
        if !report.is_ok() {
            return Err(Error::InvalidRegistry(report.render()));
        }
        let fingerprint = compute_fingerprint(&aspects);
        Ok(Self {
            aspects,
            fingerprint,
        })
    }

    /// Look up an aspect by wire code; unknown codes are a caller error.
    pub fn aspect(&self, code: &str) -> Result<&AspectRules, Error> {
        let id = AspectId::parse(code)?;
        Ok(self.aspect_rules(id))
    }

    /// Look up an aspect by id; total over the fixed enumeration.
    pub fn aspect_rules(&self, id: AspectId) -> &AspectRules {
        let index = match id {
            AspectId::Assembly => 0,
            AspectId::Manufacturing => 1,
            AspectId::Service => 2,
            AspectId::Sustainability => 3,
        };
        &self.aspects[index]
    }

    /// All aspects in declaration order.
    pub fn aspects(&self) -> impl Iterator<Item = &AspectRules> {
        self.aspects.iter()
    }

    /// SHA-256 over the canonical rule listing, hex encoded.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn compute_fingerprint(aspects: &[AspectRules]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(REGISTRY_VERSION.as_bytes());
    for aspect in aspects {
        hasher.update(aspect.id.code().as_bytes());
        for rule in &aspect.rules {
            hasher.update(rule.id.as_bytes());
            hasher.update(rule.weight.to_le_bytes());
            if let Some(unit) = rule.unit {
                hasher.update(unit.as_bytes());
            }
            if let Some(range) = rule.optimal {
                hasher.update(range.min.to_le_bytes());
                hasher.update(range.max.to_le_bytes());
            }
            if let Some(range) = rule.acceptable {
                hasher.update(range.min.to_le_bytes());
                hasher.update(range.max.to_le_bytes());
            }
        }
        for keyword in aspect.positive_indicators {
            hasher.update(keyword.as_bytes());
        }
        for keyword in aspect.negative_indicators {
            hasher.update(keyword.as_bytes());
        }
    }
    hex::encode(hasher.finalize())
}

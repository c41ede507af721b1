use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Declared kind of a metric value, fixed at registry-definition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Bool,
    Num,
    Level,
}

/// Ease level for categorical metrics such as service access.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum EffortLevel {
    Easy,
    Moderate,
    Hard,
}

impl EffortLevel {
    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            EffortLevel::Easy => "easy",
            EffortLevel::Moderate => "moderate",
            EffortLevel::Hard => "hard",
        }
    }
}

/// Value of one metric for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum MetricValue {
    Bool(bool),
    Num(f64),
    Level(EffortLevel),
}

impl MetricValue {
    /// The kind this value belongs to.
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricValue::Bool(_) => MetricKind::Bool,
            MetricValue::Num(_) => MetricKind::Num,
            MetricValue::Level(_) => MetricKind::Level,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetricValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Num(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_level(&self) -> Option<EffortLevel> {
        match self {
            MetricValue::Level(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns false only for non-finite numeric payloads.
    pub fn is_finite(&self) -> bool {
        match self {
            MetricValue::Num(value) => value.is_finite(),
            _ => true,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Bool(value) => write!(f, "{}", if *value { "yes" } else { "no" }),
            MetricValue::Num(value) => {
                if value.fract().abs() < f64::EPSILON {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{value:.2}")
                }
            }
            MetricValue::Level(value) => f.write_str(value.label()),
        }
    }
}

/// Metric values for one evaluation, keyed by metric id.
///
/// A fresh map is produced per call; ordering is deterministic so reports
/// and serialized artifacts are stable.
pub type Metrics = BTreeMap<String, MetricValue>;

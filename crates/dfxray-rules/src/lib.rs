//! Static DfX rule registry.
//!
//! This crate defines the metric rules, scoring strategies, and lexical
//! indicator lists for the four evaluation aspects, validated once at load
//! time and read-only thereafter.

mod aspects;
pub mod indicators;
pub mod model;
pub mod registry;
pub mod strategy;
pub mod validate;

pub use indicators::{analyze_indicators, IndicatorKind, IndicatorMatch, IndicatorSummary};
pub use model::{AspectRules, MetricRule, ValueRange};
pub use registry::{RuleRegistry, REGISTRY_VERSION};
pub use strategy::{Ease, Presence, Proportion, Strategy, TargetRange};
pub use validate::{validate_aspects, IssueSeverity, ValidationIssue, ValidationReport};

use dfxray_core::{AspectId, MetricKind, MetricValue};
use serde::{Deserialize, Serialize};

use crate::strategy::{guard, Strategy};

/// Closed numeric range used for optimal and acceptable bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// One weighted, scored criterion within an aspect.
#[derive(Debug)]
pub struct MetricRule {
    /// Unique id within the aspect.
    pub id: &'static str,
    /// Display name used in reports and recommendations.
    pub name: &'static str,
    /// Contribution weight; all weights of an aspect sum to 1.0.
    pub weight: f64,
    /// Optional unit string for numeric metrics.
    pub unit: Option<&'static str>,
    /// Declared value kind; estimation and scoring must agree on it.
    pub kind: MetricKind,
    pub optimal: Option<ValueRange>,
    pub acceptable: Option<ValueRange>,
    pub strategy: Box<dyn Strategy>,
}

impl MetricRule {
    /// Score a value with this rule's strategy.
    ///
    /// The strategy output is guarded so the result is always finite and
    /// within [0, 1], whatever the input.
    pub fn score(&self, value: &MetricValue) -> f64 {
        guard(self.strategy.evaluate(value))
    }
}

/// One evaluation aspect: its rules, indicator lists, and report tips.
#[derive(Debug)]
pub struct AspectRules {
    pub id: AspectId,
    pub name: &'static str,
    pub description: &'static str,
    /// Rules in declaration order; this order is stable across calls.
    pub rules: Vec<MetricRule>,
    /// Lexical indicators that speak for the aspect.
    pub positive_indicators: &'static [&'static str],
    /// Lexical indicators that speak against the aspect.
    pub negative_indicators: &'static [&'static str],
    /// Static design tips appended to reports.
    pub tips: &'static [&'static str],
}

impl AspectRules {
    /// Look up a rule by metric id.
    pub fn rule(&self, id: &str) -> Option<&MetricRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Sum of the declared rule weights.
    pub fn weight_sum(&self) -> f64 {
        self.rules.iter().map(|rule| rule.weight).sum()
    }
}

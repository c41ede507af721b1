use std::collections::HashSet;

use crate::model::AspectRules;

/// Tolerance for the per-aspect weight-sum invariant.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Severity level for registry validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured validation issue with location and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Aggregated validation report with errors and warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    pub fn push_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Render the errors as a single message for startup failures.
    pub fn render(&self) -> String {
        self.errors
            .iter()
            .map(|issue| format!("{} [{}]: {}", issue.path, issue.code, issue.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validate aspect definitions before the registry goes live.
///
/// Violations here are configuration errors: they stop startup instead of
/// surfacing at evaluation time.
pub fn validate_aspects(aspects: &[AspectRules]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for aspect in aspects {
        let path = format!("/aspects/{}", aspect.id.code());

        if aspect.rules.is_empty() {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "empty_rules",
                path.clone(),
                "aspect declares no metric rules",
            ));
            continue;
        }

        let sum = aspect.weight_sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "weight_sum",
                path.clone(),
                format!("rule weights sum to {sum} instead of 1.0"),
            ));
        }

        let mut seen = HashSet::new();
        for rule in &aspect.rules {
            let rule_path = format!("{path}/{}", rule.id);

            if !seen.insert(rule.id) {
                report.push_error(ValidationIssue::new(
                    IssueSeverity::Error,
                    "duplicate_rule",
                    rule_path.clone(),
                    "rule id is declared twice",
                ));
            }

            if rule.weight <= 0.0 || rule.weight > 1.0 {
                report.push_error(ValidationIssue::new(
                    IssueSeverity::Error,
                    "weight_range",
                    rule_path.clone(),
                    format!("weight {} is outside (0, 1]", rule.weight),
                ));
            }

            if rule.kind != rule.strategy.expected_kind() {
                report.push_error(ValidationIssue::new(
                    IssueSeverity::Error,
                    "kind_mismatch",
                    rule_path.clone(),
                    "declared kind does not match the scoring strategy",
                ));
            }

            if let Some(optimal) = rule.optimal {
                if optimal.min > optimal.max {
                    report.push_error(ValidationIssue::new(
                        IssueSeverity::Error,
                        "range_order",
                        rule_path.clone(),
                        "optimal range min exceeds max",
                    ));
                }
                if let Some(acceptable) = rule.acceptable
                    && (optimal.min < acceptable.min || optimal.max > acceptable.max)
                {
                    report.push_error(ValidationIssue::new(
                        IssueSeverity::Error,
                        "range_nesting",
                        rule_path.clone(),
                        "optimal range is not contained in the acceptable range",
                    ));
                }
            }
        }

        if aspect.positive_indicators.is_empty() || aspect.negative_indicators.is_empty() {
            report.push_warning(ValidationIssue::new(
                IssueSeverity::Warning,
                "no_indicators",
                path,
                "aspect has an empty indicator list",
            ));
        }
    }

    report
}

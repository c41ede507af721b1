//! DfX evaluation engine for dfxray.
//!
//! This crate combines the rule registry with the heuristic estimator:
//! it sanitizes metric values, folds lexical indicator evidence into them,
//! aggregates a weighted score, derives prioritized recommendations, and
//! renders a deterministic markdown report. Every evaluation call is an
//! independent, synchronous computation with no shared mutable state.

pub mod adjust;
pub mod engine;
pub mod errors;
pub mod options;
pub mod recommend;
pub mod report;
pub mod sanitize;
pub mod scoring;

pub use adjust::{apply_indicator_adjustment, indicator_factor};
pub use engine::EvaluationEngine;
pub use errors::EvalError;
pub use options::EvaluateOptions;
pub use recommend::recommend;
pub use report::{build_report, fallback_report, ReportParams};
pub use sanitize::sanitize_metrics;
pub use scoring::{score, score_metrics, ScoredMetric};

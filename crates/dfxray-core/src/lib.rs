//! Core contracts and helpers for dfxray.
//!
//! This crate defines the aspect enumeration, the metric value union, score
//! bands, and the request/result models shared across the rule registry,
//! the estimator, the evaluation engine, and the CLI.

pub mod aspect;
pub mod error;
pub mod model;
pub mod score;
pub mod value;

pub use aspect::AspectId;
pub use error::{Error, Result};
pub use model::{EvaluateRequest, EvaluateResult, Priority, Recommendation};
pub use score::{clamp_score, Qualifier, NEUTRAL_SCORE, SCORE_FLOOR};
pub use value::{EffortLevel, MetricKind, MetricValue, Metrics};

/// Current contract version for `result.json` artifacts.
pub const CONTRACT_VERSION: &str = "0.1";

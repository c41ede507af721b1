//! Heuristic metric estimation for dfxray.
//!
//! No real CAD or vision analysis is available: metric values are derived
//! from the design brief text, the product category, and per-aspect
//! formulas over category baselines. Estimates are deterministic for a
//! given input; only the fallback description phrasing draws from an
//! injectable random source.

pub mod complexity;
mod cues;
pub mod estimator;
mod lexicon;
pub mod phrasing;
pub mod profiles;

pub use complexity::{category_complexity, description_complexity, DEFAULT_CATEGORY_COMPLEXITY};
pub use estimator::estimate_metrics;
pub use phrasing::fallback_description;
pub use profiles::{category_profile, CategoryProfile};

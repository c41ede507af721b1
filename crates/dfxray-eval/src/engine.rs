use dfxray_core::{Error as CoreError, EvaluateRequest, EvaluateResult, Qualifier};
use dfxray_estimate::{estimate_metrics, fallback_description};
use dfxray_rules::{analyze_indicators, RuleRegistry};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::adjust::apply_indicator_adjustment;
use crate::errors::EvalError;
use crate::options::EvaluateOptions;
use crate::recommend::recommend;
use crate::report::{build_report, ReportParams};
use crate::sanitize::sanitize_metrics;
use crate::scoring::score_metrics;

/// Evaluate design briefs against the DfX rubric.
///
/// The engine owns the loaded rule registry and the evaluation options.
/// `evaluate` is a pure, synchronous computation: every call builds fresh
/// per-call state, so one engine can serve any number of threads.
#[derive(Debug)]
pub struct EvaluationEngine {
    registry: RuleRegistry,
    options: EvaluateOptions,
}

impl EvaluationEngine {
    pub fn new(registry: RuleRegistry, options: EvaluateOptions) -> Self {
        Self { registry, options }
    }

    /// Load the registry and use default options.
    pub fn with_defaults() -> Result<Self, CoreError> {
        Ok(Self::new(RuleRegistry::load()?, EvaluateOptions::default()))
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn options(&self) -> &EvaluateOptions {
        &self.options
    }

    /// Run the full evaluation pipeline for one request.
    ///
    /// Estimation and indicator analysis run on the brief independently,
    /// the indicator balance nudges the sanitized metrics, and the weighted
    /// aggregate plus recommendations feed the report. `rawFeatures` is
    /// accepted and ignored until real feature analysis exists.
    pub fn evaluate(&self, request: &EvaluateRequest) -> Result<EvaluateResult, EvalError> {
        let aspect = self
            .registry
            .aspect(&request.aspect)
            .map_err(|_| EvalError::UnknownAspect(request.aspect.clone()))?;

        let description = if request.description.trim().is_empty() {
            let mut rng = match self.options.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_os_rng(),
            };
            fallback_description(&request.category, aspect.id, &mut rng)
        } else {
            request.description.clone()
        };

        let estimated = estimate_metrics(&description, &request.category, aspect);
        let indicators = analyze_indicators(&description, aspect);

        let mut metrics = sanitize_metrics(&estimated, aspect);
        apply_indicator_adjustment(&mut metrics, aspect, &indicators, &self.options);

        let (score, _) = score_metrics(&metrics, aspect, &self.options);
        let recommendations = recommend(&metrics, aspect, &self.options);
        let report = build_report(
            &ReportParams {
                aspect: &request.aspect,
                category: &request.category,
                description: &description,
                metrics: &metrics,
                score,
                recommendations: &recommendations,
            },
            &self.registry,
            &self.options,
        );

        debug!(
            aspect = aspect.id.code(),
            score,
            recommendations = recommendations.len(),
            positive_indicators = indicators.positive,
            negative_indicators = indicators.negative,
            "evaluation complete"
        );

        Ok(EvaluateResult {
            score,
            qualifier: Qualifier::from_score(score),
            metrics,
            recommendations,
            report,
        })
    }
}

use thiserror::Error;

/// Errors emitted by the evaluation engine.
///
/// Degraded metric values and zero usable weight are recovered locally and
/// never surface here; the only caller-visible failure is an aspect outside
/// the fixed enumeration.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unknown aspect: {0}")]
    UnknownAspect(String),
}

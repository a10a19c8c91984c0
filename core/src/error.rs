use thiserror::Error;

/// Errors the core can surface. Distinct from [`crate::solver::SolveFailure`],
/// which covers the non-fatal, retryable outcomes of a single `solve` call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("template '{0}' has a slot shorter than two cells")]
    InvalidTemplate(String),

    #[error("dictionary has no words of length {0}")]
    EmptyDictionary(usize),

    #[error("grid generation failed after exhausting all tiers")]
    GridGenerationFailed,
}

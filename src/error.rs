use thiserror::Error;

/// Failure classes of one plot cycle. Any of these aborts the cycle as a
/// whole; previously rendered surfaces stay untouched. Per-cell evaluation
/// failures are not listed here on purpose - they are encoded as NaN cells
/// inside an otherwise successful grid (see [`EvalFailure`]).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrapherError {
    /// The range text did not split into exactly two comma-separated tokens.
    #[error("invalid range format: {0}")]
    InvalidRangeFormat(String),
    /// A range token is not a finite number, or min > max.
    #[error("invalid range values: {0}")]
    InvalidRangeValue(String),
    /// Parse or compile failure of the original or a derivative expression.
    #[error("invalid expression: {0}")]
    InvalidExpression(String),
    #[error("differentiation failed: {0}")]
    DifferentiationFailed(String),
    /// Structural sampling failure (empty domain, nonpositive step).
    #[error("grid generation failed: {0}")]
    GridGenerationFailed(String),
    /// Resource guard: the requested grid exceeds the configured cell budget.
    #[error("domain too large: {requested} cells exceeds the cap of {cap}")]
    DomainTooLarge { requested: usize, cap: usize },
    #[error("render failed: {0}")]
    RenderFailed(String),
    #[error("bad configuration: {0}")]
    Config(String),
}

/// A single-point numeric failure. f64 arithmetic never throws, so "division
/// by zero" and friends surface as a non-finite result; the sampler records
/// the cell as NaN and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("expression is not defined at ({x}, {y})")]
pub struct EvalFailure {
    pub x: f64,
    pub y: f64,
}

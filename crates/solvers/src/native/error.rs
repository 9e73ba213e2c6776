/// Configuration errors detected before any iteration runs.
///
/// Numerical failure and stagnation are not errors; they are reported through
/// [`IterationStatus`](super::IterationStatus) in the returned results.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("initial point has dimension {found} but the objective expects {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("constraints have dimension {found} but the objective expects {expected}")]
    ConstraintDimension { expected: usize, found: usize },

    #[error("the objective has an empty domain")]
    EmptyDomain,

    #[error("initial point contains non-finite values")]
    NonFiniteStart,

    #[error("{solver} does not support constraints")]
    UnsupportedConstraints { solver: &'static str },
}

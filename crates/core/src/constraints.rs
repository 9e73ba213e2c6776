use nalgebra::DVector;
use thiserror::Error;

use crate::DimensionMismatch;

/// Constraints on the solver variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Constraints {
    /// No constraints.
    #[default]
    Unconstrained,

    /// Box constraints `lower <= x <= upper`.
    Bounds(Bounds),
}

impl Constraints {
    /// Returns `true` if no constraints apply.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Self::Unconstrained)
    }

    /// Checks that the constraints apply to points of dimension `n`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if bounds were built for another dimension.
    pub fn check_dim(&self, n: usize) -> Result<(), DimensionMismatch> {
        match self {
            Self::Unconstrained => Ok(()),
            Self::Bounds(bounds) if bounds.dim() == n => Ok(()),
            Self::Bounds(bounds) => Err(DimensionMismatch {
                expected: n,
                found: bounds.dim(),
            }),
        }
    }

    /// Returns the closest feasible point to `x`.
    #[must_use]
    pub fn project(&self, x: &DVector<f64>) -> DVector<f64> {
        match self {
            Self::Unconstrained => x.clone(),
            Self::Bounds(bounds) => bounds.project(x),
        }
    }
}

impl From<Bounds> for Constraints {
    fn from(bounds: Bounds) -> Self {
        Self::Bounds(bounds)
    }
}

/// Errors that can occur when constructing [`Bounds`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    #[error("lower has {lower} entries but upper has {upper}")]
    LengthMismatch { lower: usize, upper: usize },

    #[error("lower bound exceeds upper bound at index {index}")]
    Inverted { index: usize },

    #[error("bound at index {index} is NaN")]
    NotANumber { index: usize },
}

/// Element-wise lower and upper bounds.
///
/// Infinite bounds are allowed and leave the coordinate unconstrained in that
/// direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: DVector<f64>,
    upper: DVector<f64>,
}

impl Bounds {
    /// Creates validated bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors differ in length, contain NaN, or
    /// `lower[i] > upper[i]` for some `i`.
    pub fn new(lower: DVector<f64>, upper: DVector<f64>) -> Result<Self, BoundsError> {
        if lower.len() != upper.len() {
            return Err(BoundsError::LengthMismatch {
                lower: lower.len(),
                upper: upper.len(),
            });
        }
        for (index, (lo, hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if lo.is_nan() || hi.is_nan() {
                return Err(BoundsError::NotANumber { index });
            }
            if lo > hi {
                return Err(BoundsError::Inverted { index });
            }
        }

        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(&self) -> &DVector<f64> {
        &self.lower
    }

    #[must_use]
    pub fn upper(&self) -> &DVector<f64> {
        &self.upper
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    /// Returns `true` if `x` satisfies every bound.
    #[must_use]
    pub fn contains(&self, x: &DVector<f64>) -> bool {
        x.len() == self.dim()
            && x.iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(xi, (lo, hi))| lo <= xi && xi <= hi)
    }

    /// Clamps each coordinate of `x` into its interval.
    #[must_use]
    pub fn project(&self, x: &DVector<f64>) -> DVector<f64> {
        DVector::from_fn(x.len(), |i, _| x[i].clamp(self.lower[i], self.upper[i]))
    }
}

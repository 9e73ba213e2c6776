use localmin_core::{Function, Objective};
use nalgebra::{DMatrix, DVector};

use crate::native;

/// Newton state: the current point with its value, gradient, and Hessian.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub(super) f: f64,
    pub(super) x: DVector<f64>,
    pub(super) gradient: DVector<f64>,
    pub(super) hessian: DMatrix<f64>,
}

impl State {
    /// Evaluates everything Newton needs at `x`.
    pub(super) fn at<O: Objective>(function: &Function<O>, x: DVector<f64>) -> Self {
        Self {
            f: function.value(&x),
            gradient: function.gradient(&x),
            hessian: function.hessian(&x),
            x,
        }
    }
}

impl native::State for State {
    fn f(&self) -> f64 {
        self.f
    }

    fn x(&self) -> &DVector<f64> {
        &self.x
    }

    fn gradient(&self) -> Option<&DVector<f64>> {
        Some(&self.gradient)
    }

    fn hessian(&self) -> Option<&DMatrix<f64>> {
        Some(&self.hessian)
    }

    /// Also requires a finite gradient and Hessian, since the next step
    /// depends on both.
    fn is_finite(&self) -> bool {
        self.f.is_finite()
            && self.x.iter().all(|xi| xi.is_finite())
            && self.gradient.iter().all(|g| g.is_finite())
            && self.hessian.iter().all(|h| h.is_finite())
    }
}

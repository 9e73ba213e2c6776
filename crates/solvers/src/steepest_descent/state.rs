use nalgebra::DVector;

use crate::native;

/// Steepest descent state: the current point with its value and gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub(super) f: f64,
    pub(super) x: DVector<f64>,
    pub(super) gradient: DVector<f64>,
}

impl State {
    pub(super) fn new(f: f64, x: DVector<f64>, gradient: DVector<f64>) -> Self {
        Self { f, x, gradient }
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
}

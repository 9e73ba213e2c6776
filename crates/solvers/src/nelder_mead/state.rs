use nalgebra::{DMatrix, DVector};

use crate::native;

use super::simplex::Simplex;

/// Nelder–Mead state: the ordered simplex and its best vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub(super) f: f64,
    pub(super) x: DVector<f64>,
    pub(super) simplex: Simplex,
}

impl State {
    pub(super) fn new(simplex: Simplex) -> Self {
        Self {
            f: simplex.value(0),
            x: simplex.point(0),
            simplex,
        }
    }

    /// Refreshes the best vertex after the simplex changed.
    pub(super) fn sync(&mut self) {
        self.f = self.simplex.value(0);
        self.x = self.simplex.point(0);
    }

    /// Returns the vertex values, best first.
    #[must_use]
    pub fn values(&self) -> &DVector<f64> {
        self.simplex.values()
    }

    /// Returns the largest coordinate distance from the best vertex to any
    /// other vertex.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.simplex.diameter()
    }
}

impl native::State for State {
    fn f(&self) -> f64 {
        self.f
    }

    fn x(&self) -> &DVector<f64> {
        &self.x
    }

    fn x_array(&self) -> DMatrix<f64> {
        self.simplex.vertices().clone()
    }
}

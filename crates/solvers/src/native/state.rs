use std::fmt::Debug;

use nalgebra::{DMatrix, DVector};

/// A snapshot of a solver's progress after setup or after one iteration.
///
/// Every state carries the current point `x` and its function value `f`.
/// Algorithms that produce several points per step (such as a simplex)
/// override [`x_array`](State::x_array) to return all of them.
///
/// States are archived by [`Clone`]. Implementors must own their data so a
/// clone is unaffected by later steps of the live solver; nalgebra's dynamic
/// vectors and matrices already satisfy this.
pub trait State: Clone + Debug {
    /// Returns the function value at [`x`](State::x).
    fn f(&self) -> f64;

    /// Returns the current point.
    fn x(&self) -> &DVector<f64>;

    /// Returns every point produced by the current step, one per column.
    ///
    /// The default is an `n × 1` matrix equal to [`x`](State::x).
    fn x_array(&self) -> DMatrix<f64> {
        let x = self.x();
        DMatrix::from_column_slice(x.len(), 1, x.as_slice())
    }

    /// Returns the gradient at `x` if the algorithm keeps it.
    fn gradient(&self) -> Option<&DVector<f64>> {
        None
    }

    /// Returns the Hessian at `x` if the algorithm keeps it.
    fn hessian(&self) -> Option<&DMatrix<f64>> {
        None
    }

    /// Returns `true` if `f` and every coordinate of `x` are finite.
    fn is_finite(&self) -> bool {
        self.f().is_finite() && self.x().iter().all(|xi| xi.is_finite())
    }
}

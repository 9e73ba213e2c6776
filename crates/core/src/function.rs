use std::cell::Cell;

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

use crate::Objective;

/// A point whose length does not match the function's domain.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected a point of dimension {expected}, found {found}")]
pub struct DimensionMismatch {
    pub expected: usize,
    pub found: usize,
}

/// A snapshot of a [`Function`]'s evaluation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalCounts {
    pub func: usize,
    pub grad: usize,
    pub hess: usize,
}

/// An objective function that counts its own evaluations.
///
/// Every call to [`value`](Self::value), [`gradient`](Self::gradient), or
/// [`hessian`](Self::hessian) increments the matching counter. Counters live
/// in [`Cell`]s so that read-only callers are still accounted for, which also
/// makes `Function` unusable across threads.
#[derive(Debug)]
pub struct Function<O> {
    objective: O,
    func_evals: Cell<usize>,
    grad_evals: Cell<usize>,
    hess_evals: Cell<usize>,
}

impl<O: Objective> Function<O> {
    /// Wraps an objective with zeroed counters.
    pub fn new(objective: O) -> Self {
        Self {
            objective,
            func_evals: Cell::new(0),
            grad_evals: Cell::new(0),
            hess_evals: Cell::new(0),
        }
    }

    /// Returns the dimension of the domain.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.objective.dim()
    }

    /// Checks that `x` lies in the function's domain.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionMismatch`] if `x.len()` differs from [`dim`](Self::dim).
    pub fn check_dim(&self, x: &DVector<f64>) -> Result<(), DimensionMismatch> {
        let expected = self.dim();
        if x.len() == expected {
            Ok(())
        } else {
            Err(DimensionMismatch {
                expected,
                found: x.len(),
            })
        }
    }

    /// Evaluates the function at `x`.
    pub fn value(&self, x: &DVector<f64>) -> f64 {
        bump(&self.func_evals);
        self.objective.value(x)
    }

    /// Evaluates the gradient at `x`.
    pub fn gradient(&self, x: &DVector<f64>) -> DVector<f64> {
        bump(&self.grad_evals);
        self.objective.gradient(x)
    }

    /// Evaluates the Hessian at `x`.
    pub fn hessian(&self, x: &DVector<f64>) -> DMatrix<f64> {
        bump(&self.hess_evals);
        self.objective.hessian(x)
    }

    #[must_use]
    pub fn num_func_eval(&self) -> usize {
        self.func_evals.get()
    }

    #[must_use]
    pub fn num_grad_eval(&self) -> usize {
        self.grad_evals.get()
    }

    #[must_use]
    pub fn num_hess_eval(&self) -> usize {
        self.hess_evals.get()
    }

    /// Returns all three counters at once.
    #[must_use]
    pub fn counts(&self) -> EvalCounts {
        EvalCounts {
            func: self.func_evals.get(),
            grad: self.grad_evals.get(),
            hess: self.hess_evals.get(),
        }
    }

    /// Zeroes all evaluation counters.
    pub fn reset_counts(&self) {
        self.restore_counts(EvalCounts::default());
    }

    /// Sets the counters back to an earlier snapshot.
    pub fn restore_counts(&self, counts: EvalCounts) {
        self.func_evals.set(counts.func);
        self.grad_evals.set(counts.grad);
        self.hess_evals.set(counts.hess);
    }

    /// Returns the wrapped objective.
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Consumes the wrapper and returns the objective.
    pub fn into_inner(self) -> O {
        self.objective
    }
}

impl<O: Objective> From<O> for Function<O> {
    fn from(objective: O) -> Self {
        Self::new(objective)
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    use nalgebra::dvector;

    use crate::FnObjective;

    struct Paraboloid;

    impl Objective for Paraboloid {
        fn dim(&self) -> usize {
            2
        }

        fn value(&self, x: &DVector<f64>) -> f64 {
            x.norm_squared()
        }

        fn gradient(&self, x: &DVector<f64>) -> DVector<f64> {
            x * 2.0
        }
    }

    #[test]
    fn counts_each_kind_of_evaluation() {
        let f = Function::new(Paraboloid);
        let x = dvector![1.0, -1.0];

        assert_eq!(f.value(&x), 2.0);
        f.value(&x);
        assert_eq!(f.gradient(&x), dvector![2.0, -2.0]);
        f.hessian(&x);

        assert_eq!(f.num_func_eval(), 2);
        assert_eq!(f.num_grad_eval(), 1);
        assert_eq!(f.num_hess_eval(), 1);
    }

    #[test]
    fn fallback_evaluations_are_not_counted_as_values() {
        // The finite-difference Hessian calls the analytic gradient internally,
        // but only the Hessian request itself should be counted.
        let f = Function::new(Paraboloid);
        f.hessian(&dvector![0.5, 0.5]);

        assert_eq!(f.num_func_eval(), 0);
        assert_eq!(f.num_grad_eval(), 0);
        assert_eq!(f.num_hess_eval(), 1);
    }

    #[test]
    fn reset_zeroes_counters() {
        let f = Function::new(Paraboloid);
        let x = dvector![3.0, 4.0];
        f.value(&x);
        f.gradient(&x);

        f.reset_counts();

        assert_eq!(f.num_func_eval(), 0);
        assert_eq!(f.num_grad_eval(), 0);
        assert_eq!(f.num_hess_eval(), 0);
    }

    #[test]
    fn restores_snapshot() {
        let f = Function::from(Paraboloid);
        let x = dvector![3.0, 4.0];
        f.value(&x);
        f.hessian(&x);
        let snapshot = f.counts();

        f.reset_counts();
        f.gradient(&x);
        f.restore_counts(snapshot);

        assert_eq!(
            f.counts(),
            EvalCounts {
                func: 1,
                grad: 0,
                hess: 1
            }
        );
    }

    #[test]
    fn hands_back_the_objective() {
        let f = Function::new(FnObjective::new(3, |x: &DVector<f64>| x.sum()));

        assert_eq!(f.objective().dim(), 3);
        assert_eq!(f.dim(), 3);

        let objective = f.into_inner();
        assert_eq!(objective.value(&dvector![1.0, 2.0, 3.0]), 6.0);
    }

    #[test]
    fn rejects_wrong_dimension() {
        let f = Function::new(Paraboloid);

        assert!(f.check_dim(&dvector![1.0, 2.0]).is_ok());
        assert_eq!(
            f.check_dim(&dvector![1.0, 2.0, 3.0]),
            Err(DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }
}

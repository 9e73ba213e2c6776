use nalgebra::{DMatrix, DVector};

/// An objective function `f: R^n → R` to be minimized.
///
/// Only [`dim`](Objective::dim) and [`value`](Objective::value) are required.
/// The gradient and Hessian default to central finite differences, so
/// implementors should override them whenever analytic forms are available.
pub trait Objective {
    /// Returns the dimension `n` of the domain.
    fn dim(&self) -> usize;

    /// Returns the function value at `x`.
    fn value(&self, x: &DVector<f64>) -> f64;

    /// Returns the gradient at `x`.
    ///
    /// The default uses central differences on [`value`](Objective::value).
    fn gradient(&self, x: &DVector<f64>) -> DVector<f64> {
        let mut probe = x.clone();
        DVector::from_fn(x.len(), |i, _| {
            let h = fd_step(x[i]);
            probe[i] = x[i] + h;
            let forward = self.value(&probe);
            probe[i] = x[i] - h;
            let backward = self.value(&probe);
            probe[i] = x[i];
            (forward - backward) / (2.0 * h)
        })
    }

    /// Returns the Hessian at `x`.
    ///
    /// The default uses central differences on [`gradient`](Objective::gradient)
    /// and symmetrizes the result.
    fn hessian(&self, x: &DVector<f64>) -> DMatrix<f64> {
        let n = x.len();
        let mut probe = x.clone();
        let mut hess = DMatrix::zeros(n, n);
        for j in 0..n {
            let h = fd_step(x[j]);
            probe[j] = x[j] + h;
            let forward = self.gradient(&probe);
            probe[j] = x[j] - h;
            let backward = self.gradient(&probe);
            probe[j] = x[j];
            hess.set_column(j, &((forward - backward) / (2.0 * h)));
        }
        (&hess + hess.transpose()) * 0.5
    }
}

/// Finite-difference step scaled to the magnitude of the coordinate.
fn fd_step(xi: f64) -> f64 {
    f64::EPSILON.cbrt() * xi.abs().max(1.0)
}

/// An [`Objective`] backed by a closure.
///
/// Gradient and Hessian fall back to finite differences.
#[derive(Debug, Clone, Copy)]
pub struct FnObjective<F> {
    dim: usize,
    f: F,
}

impl<F> FnObjective<F>
where
    F: Fn(&DVector<f64>) -> f64,
{
    /// Wraps `f` as an objective over `R^dim`.
    pub fn new(dim: usize, f: F) -> Self {
        Self { dim, f }
    }
}

impl<F> Objective for FnObjective<F>
where
    F: Fn(&DVector<f64>) -> f64,
{
    fn dim(&self) -> usize {
        self.dim
    }

    fn value(&self, x: &DVector<f64>) -> f64 {
        (self.f)(x)
    }
}

//! Stopping criteria evaluated by the solve loop after each step.
//!
//! A [`StoppingCriterion`] inspects a [`Progress`] view of the solver: the
//! current point, value, gradient, counters, and the recorded history of the
//! run. Criteria are only consulted for algorithms without a built-in
//! stopping criterion.
//!
//! Closures taking `&dyn Progress` implement [`StoppingCriterion`], and
//! criteria can be combined with [`StoppingCriterionExt::or`] and
//! [`StoppingCriterionExt::and`].
//!
//! ```rust
//! use localmin_solvers::criteria::{
//!     GradientNorm, MaxIterations, Progress, StoppingCriterionExt,
//! };
//!
//! let stop = GradientNorm::new(1e-6).or(MaxIterations(500));
//! let custom = |p: &dyn Progress| p.f_val() < -10.0;
//! # let _ = (stop, custom);
//! ```

use nalgebra::DVector;

/// Read-only view of a run in progress.
pub trait Progress {
    /// Returns the current iterate.
    fn x(&self) -> &DVector<f64>;

    /// Returns the function value at the current iterate.
    fn f_val(&self) -> f64;

    /// Returns the gradient at the current iterate.
    ///
    /// This may cost a counted gradient evaluation.
    fn gradient(&self) -> DVector<f64>;

    fn num_iter(&self) -> usize;

    fn num_func_eval(&self) -> usize;

    fn num_grad_eval(&self) -> usize;

    fn num_hess_eval(&self) -> usize;

    /// Returns a recorded state `steps_back` steps before the current one.
    ///
    /// `recorded(0)` is the current state. Returns `None` beyond the start of
    /// the record.
    fn recorded(&self, steps_back: usize) -> Option<Recorded<'_>>;
}

/// The value and point of a recorded state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recorded<'a> {
    pub f: f64,
    pub x: &'a DVector<f64>,
}

/// Decides whether a run should stop.
///
/// Implementations must be deterministic for a given history.
pub trait StoppingCriterion {
    /// Returns `true` when the run should stop with success.
    fn is_satisfied(&self, progress: &dyn Progress) -> bool;
}

/// Blanket implementation for criterion closures.
impl<F> StoppingCriterion for F
where
    F: Fn(&dyn Progress) -> bool,
{
    fn is_satisfied(&self, progress: &dyn Progress) -> bool {
        self(progress)
    }
}

/// Combinators for stopping criteria.
pub trait StoppingCriterionExt: StoppingCriterion + Sized {
    /// Stops when either criterion is satisfied.
    fn or<B: StoppingCriterion>(self, other: B) -> Or<Self, B> {
        Or(self, other)
    }

    /// Stops when both criteria are satisfied.
    fn and<B: StoppingCriterion>(self, other: B) -> And<Self, B> {
        And(self, other)
    }
}

impl<C: StoppingCriterion> StoppingCriterionExt for C {}

/// Satisfied when either inner criterion is.
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(pub A, pub B);

impl<A: StoppingCriterion, B: StoppingCriterion> StoppingCriterion for Or<A, B> {
    fn is_satisfied(&self, progress: &dyn Progress) -> bool {
        self.0.is_satisfied(progress) || self.1.is_satisfied(progress)
    }
}

/// Satisfied when both inner criteria are.
#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(pub A, pub B);

impl<A: StoppingCriterion, B: StoppingCriterion> StoppingCriterion for And<A, B> {
    fn is_satisfied(&self, progress: &dyn Progress) -> bool {
        self.0.is_satisfied(progress) && self.1.is_satisfied(progress)
    }
}

/// Satisfied when `‖∇f(x)‖₂ < tol`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientNorm {
    tol: f64,
}

impl GradientNorm {
    #[must_use]
    pub fn new(tol: f64) -> Self {
        Self { tol }
    }

    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}

impl StoppingCriterion for GradientNorm {
    fn is_satisfied(&self, progress: &dyn Progress) -> bool {
        progress.gradient().norm() < self.tol
    }
}

/// Satisfied once the given number of iterations has been taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxIterations(pub usize);

impl StoppingCriterion for MaxIterations {
    fn is_satisfied(&self, progress: &dyn Progress) -> bool {
        progress.num_iter() >= self.0
    }
}

/// Satisfied when `|f_k - f_{k-1}| < tol`.
///
/// Never satisfied before the first step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionChange {
    tol: f64,
}

impl FunctionChange {
    #[must_use]
    pub fn new(tol: f64) -> Self {
        Self { tol }
    }
}

impl StoppingCriterion for FunctionChange {
    fn is_satisfied(&self, progress: &dyn Progress) -> bool {
        match (progress.recorded(0), progress.recorded(1)) {
            (Some(current), Some(previous)) => (current.f - previous.f).abs() < self.tol,
            _ => false,
        }
    }
}

/// Satisfied when `‖x - x*‖₂ < tol` for a known minimizer `x*`.
///
/// Intended for benchmarking solvers on test problems.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceToMinimum {
    x_min: DVector<f64>,
    tol: f64,
}

impl DistanceToMinimum {
    #[must_use]
    pub fn new(x_min: DVector<f64>, tol: f64) -> Self {
        Self { x_min, tol }
    }
}

impl StoppingCriterion for DistanceToMinimum {
    fn is_satisfied(&self, progress: &dyn Progress) -> bool {
        let x = progress.x();
        x.len() == self.x_min.len() && (x - &self.x_min).norm() < self.tol
    }
}

/// Satisfied when `|f(x) - f*| < tol` for a known minimum value `f*`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueToMinimum {
    f_min: f64,
    tol: f64,
}

impl ValueToMinimum {
    #[must_use]
    pub fn new(f_min: f64, tol: f64) -> Self {
        Self { f_min, tol }
    }
}

impl StoppingCriterion for ValueToMinimum {
    fn is_satisfied(&self, progress: &dyn Progress) -> bool {
        (progress.f_val() - self.f_min).abs() < self.tol
    }
}

use localmin_core::{Constraints, Function, Objective};
use nalgebra::DVector;

use super::{Error, IterationStatus, State};

/// The per-step update rule of a local minimization method.
///
/// An algorithm only decides how to initialize its state and how to advance
/// it by one step. Iteration counting, evaluation accounting, archiving, and
/// termination by external criteria are handled by [`Solver`](super::Solver)
/// and [`solve`](super::solve).
pub trait Algorithm {
    /// Name used in log messages and errors.
    const NAME: &'static str;

    /// The solver state, including any algorithm-internal fields.
    type State: State;

    /// Algorithm-specific configuration.
    type Setup: Default;

    /// Returns `true` if [`iterate`](Algorithm::iterate) decides termination
    /// itself, in which case external stopping criteria are not consulted.
    fn has_builtin_stopping_criterion(&self) -> bool;

    /// Builds the initial state at `x0`.
    ///
    /// The caller has already checked `x0` and `constraints` against the
    /// function's dimension and reset the function's counters.
    ///
    /// # Errors
    ///
    /// Returns an error if the algorithm cannot handle the given constraints.
    fn setup<O: Objective>(
        &mut self,
        function: &Function<O>,
        x0: &DVector<f64>,
        setup: &Self::Setup,
        constraints: &Constraints,
    ) -> Result<Self::State, Error>;

    /// Advances `state` by one step.
    ///
    /// Returns [`IterationStatus::Continue`] unless the algorithm detects
    /// divergence, or, for algorithms with a built-in stopping criterion,
    /// success or stagnation.
    fn iterate<O: Objective>(
        &mut self,
        function: &Function<O>,
        state: &mut Self::State,
    ) -> IterationStatus;
}

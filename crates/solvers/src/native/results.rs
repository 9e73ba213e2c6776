use std::time::Duration;

use nalgebra::DVector;

use super::{IterationStatus, State};

/// The outcome of a [`solve`](super::solve) run.
#[derive(Debug, Clone)]
pub struct Results<S> {
    /// Terminal status of the run.
    pub status: IterationStatus,

    /// Final iterate.
    pub x: DVector<f64>,

    /// Function value at the final iterate.
    pub f: f64,

    /// Number of iterations taken, including the step that ended the run.
    pub num_iter: usize,

    /// Function evaluations, including setup.
    pub num_func_eval: usize,

    /// Gradient evaluations, including setup.
    pub num_grad_eval: usize,

    /// Hessian evaluations, including setup.
    pub num_hess_eval: usize,

    /// Wall-clock duration, if timing was requested.
    pub elapsed: Option<Duration>,

    /// The initial state followed by the state after each iteration.
    pub states: Vec<S>,
}

impl<S: State> Results<S> {
    /// Returns `true` if the run ended with [`IterationStatus::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == IterationStatus::Success
    }

    /// Returns the last recorded state.
    ///
    /// # Panics
    ///
    /// Never for results returned by [`solve`](super::solve), which always
    /// record the initial state.
    #[must_use]
    pub fn final_state(&self) -> &S {
        &self.states[self.states.len() - 1]
    }
}

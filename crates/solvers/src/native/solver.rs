use localmin_core::{Constraints, Function, Objective};
use log::warn;
use nalgebra::{DMatrix, DVector};

use crate::criteria::{Progress, Recorded};

use super::{Algorithm, Error, IterationStatus, State};

/// An algorithm bound to an objective function and its current state.
///
/// The solver owns the iteration counter and forwards evaluation counts from
/// the [`Function`]. A `Solver` always holds a valid state: it can only be
/// created through [`Solver::setup`].
#[derive(Debug)]
pub struct Solver<'f, A: Algorithm, O> {
    algorithm: A,
    function: &'f Function<O>,
    state: A::State,
    n_iter: usize,
}

impl<'f, A: Algorithm, O: Objective> Solver<'f, A, O> {
    /// Binds `algorithm` to `function` and computes the initial state at `x0`.
    ///
    /// Resets the function's evaluation counters and the iteration counter.
    ///
    /// # Errors
    ///
    /// Returns an error if `x0` or `constraints` do not match the function's
    /// dimension, if `x0` is not finite, or if the algorithm rejects the
    /// constraints.
    pub fn setup(
        mut algorithm: A,
        function: &'f Function<O>,
        x0: &DVector<f64>,
        setup: &A::Setup,
        constraints: &Constraints,
    ) -> Result<Self, Error> {
        let state = initial_state(&mut algorithm, function, x0, setup, constraints)?;
        Ok(Self {
            algorithm,
            function,
            state,
            n_iter: 0,
        })
    }

    /// Restarts from `x0`, reusing the algorithm and function.
    ///
    /// On error the solver keeps its previous state and counters.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Solver::setup`].
    pub fn reset(
        &mut self,
        x0: &DVector<f64>,
        setup: &A::Setup,
        constraints: &Constraints,
    ) -> Result<(), Error> {
        self.state = initial_state(&mut self.algorithm, self.function, x0, setup, constraints)?;
        self.n_iter = 0;
        Ok(())
    }

    /// Takes one step and returns its status.
    ///
    /// A step that leaves a non-finite value or point is reported as
    /// [`IterationStatus::OutOfControl`] even if the algorithm returned
    /// [`IterationStatus::Continue`].
    pub fn iterate(&mut self) -> IterationStatus {
        self.n_iter += 1;
        let status = self.algorithm.iterate(self.function, &mut self.state);

        if status == IterationStatus::Continue && !self.state.is_finite() {
            warn!(
                "{}: non-finite state at iteration {}, f = {}",
                A::NAME,
                self.n_iter,
                self.state.f()
            );
            return IterationStatus::OutOfControl;
        }
        status
    }

    /// Returns the current state.
    pub fn state(&self) -> &A::State {
        &self.state
    }

    /// Returns the current iterate.
    pub fn x(&self) -> &DVector<f64> {
        self.state.x()
    }

    /// Returns all points of the current step, one per column.
    pub fn x_array(&self) -> DMatrix<f64> {
        self.state.x_array()
    }

    /// Returns the function value at the current iterate.
    pub fn f_val(&self) -> f64 {
        self.state.f()
    }

    /// Returns the gradient at the current iterate.
    ///
    /// Uses the state's cached gradient when available, otherwise evaluates
    /// the function (and counts the evaluation).
    pub fn gradient(&self) -> DVector<f64> {
        match self.state.gradient() {
            Some(g) => g.clone(),
            None => self.function.gradient(self.state.x()),
        }
    }

    /// Returns the Hessian at the current iterate.
    ///
    /// Uses the state's cached Hessian when available, otherwise evaluates
    /// the function (and counts the evaluation).
    pub fn hessian(&self) -> DMatrix<f64> {
        match self.state.hessian() {
            Some(h) => h.clone(),
            None => self.function.hessian(self.state.x()),
        }
    }

    /// Returns the number of iterations since the last setup.
    pub fn num_iter(&self) -> usize {
        self.n_iter
    }

    /// Returns the number of function evaluations since the last setup.
    pub fn num_func_eval(&self) -> usize {
        self.function.num_func_eval()
    }

    /// Returns the number of gradient evaluations since the last setup.
    pub fn num_grad_eval(&self) -> usize {
        self.function.num_grad_eval()
    }

    /// Returns the number of Hessian evaluations since the last setup.
    pub fn num_hess_eval(&self) -> usize {
        self.function.num_hess_eval()
    }

    /// Returns `true` if the algorithm decides termination itself.
    pub fn has_builtin_stopping_criterion(&self) -> bool {
        self.algorithm.has_builtin_stopping_criterion()
    }

    /// Returns the bound algorithm.
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Returns the objective function being minimized.
    pub fn function(&self) -> &'f Function<O> {
        self.function
    }

    /// Releases the algorithm for use in another run.
    pub fn into_algorithm(self) -> A {
        self.algorithm
    }
}

fn initial_state<A: Algorithm, O: Objective>(
    algorithm: &mut A,
    function: &Function<O>,
    x0: &DVector<f64>,
    setup: &A::Setup,
    constraints: &Constraints,
) -> Result<A::State, Error> {
    let expected = function.dim();
    if expected == 0 {
        return Err(Error::EmptyDomain);
    }
    function
        .check_dim(x0)
        .map_err(|e| Error::DimensionMismatch {
            expected: e.expected,
            found: e.found,
        })?;
    constraints
        .check_dim(expected)
        .map_err(|e| Error::ConstraintDimension {
            expected: e.expected,
            found: e.found,
        })?;
    if !x0.iter().all(|xi| xi.is_finite()) {
        return Err(Error::NonFiniteStart);
    }

    let previous = function.counts();
    function.reset_counts();
    algorithm
        .setup(function, x0, setup, constraints)
        .inspect_err(|_| function.restore_counts(previous))
}

impl<A: Algorithm, O: Objective> Progress for Solver<'_, A, O> {
    fn x(&self) -> &DVector<f64> {
        Solver::x(self)
    }

    fn f_val(&self) -> f64 {
        Solver::f_val(self)
    }

    fn gradient(&self) -> DVector<f64> {
        Solver::gradient(self)
    }

    fn num_iter(&self) -> usize {
        self.n_iter
    }

    fn num_func_eval(&self) -> usize {
        Solver::num_func_eval(self)
    }

    fn num_grad_eval(&self) -> usize {
        Solver::num_grad_eval(self)
    }

    fn num_hess_eval(&self) -> usize {
        Solver::num_hess_eval(self)
    }

    /// Only the current state is available without an archive.
    fn recorded(&self, steps_back: usize) -> Option<Recorded<'_>> {
        (steps_back == 0).then(|| Recorded {
            f: self.state.f(),
            x: self.state.x(),
        })
    }
}

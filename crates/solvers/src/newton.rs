//! Newton's method for unconstrained minimization.
//!
//! Each step solves the Newton system `H(x_k) d = ∇f(x_k)` by LU
//! decomposition and moves to `x_{k+1} = x_k - damping * d`. Near a minimum
//! with a positive definite Hessian the convergence is quadratic; far from
//! it the full step may increase `f`, which a `damping` below one mitigates.
//!
//! The method has no built-in stopping criterion. A singular Hessian leaves
//! no step to take and is reported as [`IterationStatus::NoProgress`].
//! Constraints are not supported.

mod setup;
mod state;


pub use setup::{Setup, SetupError};
pub use state::State;

use localmin_core::{Constraints, Function, Objective};
use log::debug;
use nalgebra::DVector;

use crate::native::{Algorithm, Error, IterationStatus, State as _};

/// Damped Newton iteration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Newton {
    damping: f64,
}

impl Newton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Algorithm for Newton {
    const NAME: &'static str = "Newton";

    type State = State;
    type Setup = Setup;

    fn has_builtin_stopping_criterion(&self) -> bool {
        false
    }

    fn setup<O: Objective>(
        &mut self,
        function: &Function<O>,
        x0: &DVector<f64>,
        setup: &Setup,
        constraints: &Constraints,
    ) -> Result<State, Error> {
        if !constraints.is_unconstrained() {
            return Err(Error::UnsupportedConstraints { solver: Self::NAME });
        }
        self.damping = setup.damping();

        Ok(State::at(function, x0.clone()))
    }

    fn iterate<O: Objective>(
        &mut self,
        function: &Function<O>,
        state: &mut State,
    ) -> IterationStatus {
        let Some(direction) = state.hessian.clone().lu().solve(&state.gradient) else {
            debug!("Newton: singular Hessian at f = {:e}", state.f);
            return IterationStatus::NoProgress;
        };

        let x = &state.x - direction * self.damping;
        *state = State::at(function, x);

        if state.is_finite() {
            IterationStatus::Continue
        } else {
            IterationStatus::OutOfControl
        }
    }
}

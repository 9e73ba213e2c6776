//! Fixed-step steepest descent.
//!
//! # Algorithm
//!
//! Each step moves against the gradient by a constant step size:
//!
//! ```text
//! x_{k+1} = P(x_k - alpha * ∇f(x_k))
//! ```
//!
//! where `P` projects onto the bounds when the problem is constrained, and
//! is the identity otherwise.
//!
//! # Convergence
//!
//! For an objective with `L`-Lipschitz gradient, any `alpha < 2 / L`
//! converges to a stationary point. Larger steps overshoot and the iterates
//! grow without bound; the step then reports
//! [`IterationStatus::OutOfControl`] once the value or point is no longer
//! finite.
//!
//! The method has no built-in stopping criterion. With active bounds the
//! gradient does not vanish at the constrained minimum, so pair it with a
//! criterion such as [`FunctionChange`](crate::criteria::FunctionChange) or
//! rely on stagnation detection.

mod setup;
mod state;


pub use setup::{Setup, SetupError};
pub use state::State;

use localmin_core::{Constraints, Function, Objective};
use nalgebra::DVector;

use crate::native::{Algorithm, Error, IterationStatus};

/// Fixed-step steepest descent.
#[derive(Debug, Clone, Default)]
pub struct SteepestDescent {
    step_size: f64,
    constraints: Constraints,
}

impl SteepestDescent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Algorithm for SteepestDescent {
    const NAME: &'static str = "steepest descent";

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
        self.step_size = setup.step_size();
        self.constraints = constraints.clone();

        let x = self.constraints.project(x0);
        let f = function.value(&x);
        let gradient = function.gradient(&x);
        Ok(State::new(f, x, gradient))
    }

    fn iterate<O: Objective>(
        &mut self,
        function: &Function<O>,
        state: &mut State,
    ) -> IterationStatus {
        let x = self
            .constraints
            .project(&(&state.x - &state.gradient * self.step_size));
        let f = function.value(&x);

        if !f.is_finite() || x.iter().any(|xi| !xi.is_finite()) {
            state.f = f;
            state.x = x;
            state.gradient.fill(f64::NAN);
            return IterationStatus::OutOfControl;
        }

        let gradient = function.gradient(&x);
        let diverged = gradient.iter().any(|gi| !gi.is_finite());
        *state = State::new(f, x, gradient);

        if diverged {
            IterationStatus::OutOfControl
        } else {
            IterationStatus::Continue
        }
    }
}

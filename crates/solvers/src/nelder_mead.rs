//! Nelder–Mead downhill simplex search.
//!
//! # Algorithm
//!
//! The method keeps `n + 1` vertices ordered by function value. Each step
//! reflects the worst vertex through the centroid of the others and then
//! expands, contracts, or shrinks the simplex depending on how the reflected
//! point compares with the current vertices. It uses only function values.
//!
//! # State
//!
//! [`State::x_array`](crate::native::State::x_array) returns all vertices,
//! one per column and best first. [`State::x`](crate::native::State::x) is
//! the best vertex.
//!
//! # Termination
//!
//! The method has a built-in stopping criterion: a step returns
//! [`IterationStatus::Success`] once the simplex diameter is at most `x_tol`
//! and the spread of vertex values is at most `f_tol`. External stopping
//! criteria are ignored.
//!
//! A NaN value is treated as `+∞`, so the simplex retreats from regions where
//! the objective is undefined. A best value that is not finite (an objective
//! unbounded below) ends the run with [`IterationStatus::OutOfControl`].
//!
//! With bounds, every trial point is clamped into the box.

mod setup;
mod simplex;
mod state;

#[cfg(test)]
mod tests;

pub use setup::{Setup, SetupError};
pub use state::State;

use localmin_core::{Constraints, Function, Objective};
use nalgebra::DVector;

use crate::native::{Algorithm, Error, IterationStatus};

use simplex::Simplex;

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Nelder–Mead simplex search.
#[derive(Debug, Clone, Default)]
pub struct NelderMead {
    setup: Setup,
    constraints: Constraints,
}

impl NelderMead {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates at the feasible point closest to `x`, mapping NaN to `+∞`.
    fn eval<O: Objective>(&self, function: &Function<O>, x: &DVector<f64>) -> (DVector<f64>, f64) {
        let x = self.constraints.project(x);
        let f = function.value(&x);
        (x, if f.is_nan() { f64::INFINITY } else { f })
    }
}

impl Algorithm for NelderMead {
    const NAME: &'static str = "Nelder-Mead";

    type State = State;
    type Setup = Setup;

    fn has_builtin_stopping_criterion(&self) -> bool {
        true
    }

    fn setup<O: Objective>(
        &mut self,
        function: &Function<O>,
        x0: &DVector<f64>,
        setup: &Setup,
        constraints: &Constraints,
    ) -> Result<State, Error> {
        self.setup = *setup;
        self.constraints = constraints.clone();

        let n = x0.len();
        let (start, f_start) = self.eval(function, x0);
        let mut points = Vec::with_capacity(n + 1);
        let mut values = Vec::with_capacity(n + 1);

        for i in 0..n {
            let mut vertex = start.clone();
            vertex[i] += setup.initial_size();
            let mut vertex = self.constraints.project(&vertex);
            if vertex[i] == start[i] {
                // Blocked by an upper bound, step the other way.
                vertex[i] = start[i] - setup.initial_size();
            }
            let (vertex, value) = self.eval(function, &vertex);
            points.push(vertex);
            values.push(value);
        }
        points.push(start);
        values.push(f_start);

        Ok(State::new(Simplex::new(points, values)))
    }

    fn iterate<O: Objective>(
        &mut self,
        function: &Function<O>,
        state: &mut State,
    ) -> IterationStatus {
        let simplex = &mut state.simplex;
        let n = simplex.dim();
        let centroid = simplex.centroid();
        let (worst, f_worst) = (simplex.point(n), simplex.value(n));
        let f_best = simplex.value(0);
        let f_second_worst = simplex.value(n - 1);

        let (reflected, f_reflected) =
            self.eval(function, &(&centroid + (&centroid - &worst) * REFLECTION));

        if f_reflected < f_best {
            let (expanded, f_expanded) =
                self.eval(function, &(&centroid + (&centroid - &worst) * EXPANSION));
            if f_expanded < f_reflected {
                simplex.replace_worst(expanded, f_expanded);
            } else {
                simplex.replace_worst(reflected, f_reflected);
            }
        } else if f_reflected < f_second_worst {
            simplex.replace_worst(reflected, f_reflected);
        } else {
            let (contracted, f_contracted) = if f_reflected < f_worst {
                self.eval(
                    function,
                    &(&centroid + (&reflected - &centroid) * CONTRACTION),
                )
            } else {
                self.eval(function, &(&centroid + (&worst - &centroid) * CONTRACTION))
            };

            if f_contracted < f_reflected.min(f_worst) {
                simplex.replace_worst(contracted, f_contracted);
            } else {
                simplex.shrink_toward_best(SHRINK, |x| self.eval(function, x));
            }
        }

        state.sync();

        if !state.f.is_finite() {
            IterationStatus::OutOfControl
        } else if state.simplex.diameter() <= self.setup.x_tol()
            && state.simplex.spread() <= self.setup.f_tol()
        {
            IterationStatus::Success
        } else {
            IterationStatus::Continue
        }
    }
}

use std::time::Instant;

use localmin_core::{Constraints, Function, Objective};
use log::{debug, info};
use nalgebra::DVector;

use crate::criteria::{Progress, Recorded, StoppingCriterion};

use super::{Algorithm, Error, IterationStatus, Options, Results, Solver, State};

/// Minimizes `function` from `x0` using `algorithm`.
///
/// The run records the initial state and a clone of the state after every
/// iteration. After each step:
///
/// 1. A terminal status returned by the step ends the run.
/// 2. For algorithms without a built-in criterion, a satisfied `stop` ends the
///    run with [`IterationStatus::Success`].
/// 3. Enough consecutive stalled steps (see [`Options::new`]) end the run
///    with [`IterationStatus::NoProgress`].
///
/// A non-finite initial value ends the run before any step with
/// [`IterationStatus::OutOfControl`].
///
/// # Errors
///
/// Returns an [`Error`] for misconfiguration, before any iteration runs.
/// Divergence and stagnation are reported through [`Results::status`].
pub fn solve<A, O, C>(
    algorithm: A,
    function: &mut Function<O>,
    x0: &DVector<f64>,
    stop: &C,
    setup: &A::Setup,
    constraints: &Constraints,
    options: &Options,
) -> Result<Results<A::State>, Error>
where
    A: Algorithm,
    O: Objective,
    C: StoppingCriterion + ?Sized,
{
    let start = options.time_test().then(Instant::now);

    let mut solver = Solver::setup(algorithm, function, x0, setup, constraints)?;
    let mut states = vec![solver.state().clone()];

    let status = if solver.state().is_finite() {
        run(&mut solver, &mut states, stop, options)
    } else {
        IterationStatus::OutOfControl
    };

    let elapsed = start.map(|t| t.elapsed());
    info!(
        "{}: {:?} after {} iterations, f = {:e}",
        A::NAME,
        status,
        solver.num_iter(),
        solver.f_val()
    );

    Ok(Results {
        status,
        x: solver.x().clone(),
        f: solver.f_val(),
        num_iter: solver.num_iter(),
        num_func_eval: solver.num_func_eval(),
        num_grad_eval: solver.num_grad_eval(),
        num_hess_eval: solver.num_hess_eval(),
        elapsed,
        states,
    })
}

fn run<A, O, C>(
    solver: &mut Solver<'_, A, O>,
    states: &mut Vec<A::State>,
    stop: &C,
    options: &Options,
) -> IterationStatus
where
    A: Algorithm,
    O: Objective,
    C: StoppingCriterion + ?Sized,
{
    let mut stalled = 0;

    loop {
        let status = solver.iterate();
        states.push(solver.state().clone());
        debug!(
            "{}: iteration {}, f = {:e}, status {:?}",
            A::NAME,
            solver.num_iter(),
            solver.f_val(),
            status
        );

        if status.is_terminal() {
            return status;
        }

        if !solver.has_builtin_stopping_criterion() {
            let monitor = Monitor {
                solver: &*solver,
                history: states.as_slice(),
            };
            if stop.is_satisfied(&monitor) {
                return IterationStatus::Success;
            }
        }

        if options.stall_iters() > 0 {
            let previous = &states[states.len() - 2];
            if is_stalled(previous, solver.state(), options.stall_tol()) {
                stalled += 1;
            } else {
                stalled = 0;
            }
            if stalled >= options.stall_iters() {
                return IterationStatus::NoProgress;
            }
        }
    }
}

/// Returns `true` if neither `f` nor any coordinate of any point in the step
/// moved beyond `tol` relative to `1 + |value|`.
fn is_stalled<S: State>(previous: &S, current: &S, tol: f64) -> bool {
    let (xs, prev_xs) = (current.x_array(), previous.x_array());
    if xs.shape() != prev_xs.shape() {
        return false;
    }

    let f_step = (current.f() - previous.f()).abs();
    let x_step = (&xs - &prev_xs).amax();
    let x_scale = xs.amax();

    f_step <= tol * (1.0 + current.f().abs()) && x_step <= tol * (1.0 + x_scale)
}

/// A [`Progress`] view over a solver and the states recorded so far.
struct Monitor<'a, 'f, A: Algorithm, O> {
    solver: &'a Solver<'f, A, O>,
    history: &'a [A::State],
}

impl<A: Algorithm, O: Objective> Progress for Monitor<'_, '_, A, O> {
    fn x(&self) -> &DVector<f64> {
        self.solver.x()
    }

    fn f_val(&self) -> f64 {
        self.solver.f_val()
    }

    fn gradient(&self) -> DVector<f64> {
        self.solver.gradient()
    }

    fn num_iter(&self) -> usize {
        self.solver.num_iter()
    }

    fn num_func_eval(&self) -> usize {
        self.solver.num_func_eval()
    }

    fn num_grad_eval(&self) -> usize {
        self.solver.num_grad_eval()
    }

    fn num_hess_eval(&self) -> usize {
        self.solver.num_hess_eval()
    }

    fn recorded(&self, steps_back: usize) -> Option<Recorded<'_>> {
        let index = self.history.len().checked_sub(steps_back + 1)?;
        let state = &self.history[index];
        Some(Recorded {
            f: state.f(),
            x: state.x(),
        })
    }
}

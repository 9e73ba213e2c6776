use approx::assert_relative_eq;
use localmin_core::{Bounds, Constraints, Function, Objective};
use localmin_solvers::{
    criteria::{GradientNorm, MaxIterations, Progress, StoppingCriterion},
    native::{Error, IterationStatus, Options, State, solve},
    nelder_mead::{self, NelderMead},
    newton::{self, Newton},
    steepest_descent::{self, SteepestDescent},
};
use nalgebra::{DMatrix, DVector, dmatrix, dvector};

/// f(x) = x² on the real line.
struct Square;

impl Objective for Square {
    fn dim(&self) -> usize {
        1
    }

    fn value(&self, x: &DVector<f64>) -> f64 {
        x[0] * x[0]
    }

    fn gradient(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![2.0 * x[0]]
    }

    fn hessian(&self, _x: &DVector<f64>) -> DMatrix<f64> {
        dmatrix![2.0]
    }
}

/// Bowl that becomes NaN once the iterate leaves `[-limit, limit]`.
struct Cliff {
    limit: f64,
}

impl Objective for Cliff {
    fn dim(&self) -> usize {
        1
    }

    fn value(&self, x: &DVector<f64>) -> f64 {
        if x[0].abs() > self.limit {
            f64::NAN
        } else {
            x[0] * x[0]
        }
    }

    fn gradient(&self, x: &DVector<f64>) -> DVector<f64> {
        dvector![2.0 * x[0]]
    }
}

fn descend<C: StoppingCriterion>(
    step_size: f64,
    stop: &C,
) -> localmin_solvers::native::Results<steepest_descent::State> {
    let mut f = Function::new(Square);
    solve(
        SteepestDescent::new(),
        &mut f,
        &dvector![10.0],
        stop,
        &steepest_descent::Setup::new(step_size).unwrap(),
        &Constraints::Unconstrained,
        &Options::default(),
    )
    .expect("valid configuration")
}

#[test]
fn small_step_converges_to_origin() {
    let results = descend(0.1, &GradientNorm::new(1e-6));

    assert_eq!(results.status, IterationStatus::Success);
    assert!(results.num_iter > 0);
    assert_relative_eq!(results.x[0], 0.0, epsilon = 1e-6);
}

#[test]
fn large_step_goes_out_of_control() {
    let results = descend(1.5, &GradientNorm::new(1e-6));

    assert_eq!(results.status, IterationStatus::OutOfControl);
    assert!(results.num_iter < 1100);
}

#[test]
fn iteration_count_matches_recorded_states() {
    for stop in [MaxIterations(0), MaxIterations(1), MaxIterations(17)] {
        let results = descend(0.1, &stop);

        assert_eq!(results.num_iter, results.states.len() - 1);
        assert_eq!(results.num_iter, stop.0.max(1));
    }
}

#[test]
fn always_satisfied_stops_after_one_iteration() {
    let results = descend(0.1, &|_: &dyn Progress| true);

    assert_eq!(results.status, IterationStatus::Success);
    assert_eq!(results.num_iter, 1);
    assert_eq!(results.states.len(), 2);
}

#[test]
fn archive_is_chronological_and_independent() {
    let results = descend(0.1, &MaxIterations(5));

    let xs: Vec<f64> = results.states.iter().map(|s| s.x()[0]).collect();
    assert_relative_eq!(xs[0], 10.0);
    for pair in xs.windows(2) {
        assert_relative_eq!(pair[1], 0.8 * pair[0], max_relative = 1e-12);
    }
    for state in &results.states {
        assert_relative_eq!(state.f(), state.x()[0] * state.x()[0]);
        assert_eq!(state.x_array().ncols(), 1);
    }

    // Mutating a copy of the results never touches the recorded history.
    let mut copy = results.clone();
    copy.states[0] = copy.states[5].clone();
    assert_relative_eq!(results.states[0].x()[0], 10.0);
}

#[test]
fn non_finite_step_stops_immediately() {
    // The jump from 0.5 with step 1.5 lands at -1.0, outside the limit.
    let mut f = Function::new(Cliff { limit: 0.75 });

    let results = solve(
        SteepestDescent::new(),
        &mut f,
        &dvector![0.5],
        &MaxIterations(100),
        &steepest_descent::Setup::new(1.5).unwrap(),
        &Constraints::Unconstrained,
        &Options::default(),
    )
    .unwrap();

    assert_eq!(results.status, IterationStatus::OutOfControl);
    assert_eq!(results.num_iter, 1);
    assert!(results.f.is_nan());
}

#[test]
fn non_finite_start_value_ends_run_without_steps() {
    let mut f = Function::new(Cliff { limit: 0.75 });

    let results = solve(
        SteepestDescent::new(),
        &mut f,
        &dvector![1.0],
        &MaxIterations(100),
        &steepest_descent::Setup::default(),
        &Constraints::Unconstrained,
        &Options::default(),
    )
    .unwrap();

    assert_eq!(results.status, IterationStatus::OutOfControl);
    assert_eq!(results.num_iter, 0);
    assert_eq!(results.states.len(), 1);
}

#[test]
fn mismatched_start_is_rejected_before_any_state() {
    let mut f = Function::new(Square);

    let result = solve(
        SteepestDescent::new(),
        &mut f,
        &dvector![1.0, 2.0],
        &GradientNorm::new(1e-6),
        &steepest_descent::Setup::default(),
        &Constraints::Unconstrained,
        &Options::default(),
    );

    assert!(matches!(
        result,
        Err(Error::DimensionMismatch {
            expected: 1,
            found: 2
        })
    ));
    assert_eq!(f.num_func_eval(), 0);
    assert_eq!(f.num_grad_eval(), 0);
}

#[test]
fn mismatched_constraints_are_rejected() {
    let mut f = Function::new(Square);
    let bounds = Bounds::new(dvector![0.0, 0.0], dvector![1.0, 1.0]).unwrap();

    let result = solve(
        NelderMead::new(),
        &mut f,
        &dvector![0.5],
        &GradientNorm::new(1e-6),
        &nelder_mead::Setup::default(),
        &Constraints::from(bounds),
        &Options::default(),
    );

    assert!(matches!(
        result,
        Err(Error::ConstraintDimension {
            expected: 1,
            found: 2
        })
    ));
}

#[test]
fn non_finite_start_is_rejected() {
    let mut f = Function::new(Square);

    let result = solve(
        Newton::new(),
        &mut f,
        &dvector![f64::NAN],
        &GradientNorm::new(1e-6),
        &newton::Setup::default(),
        &Constraints::Unconstrained,
        &Options::default(),
    );

    assert!(matches!(result, Err(Error::NonFiniteStart)));
}

#[test]
fn timing_is_reported_only_on_request() {
    let mut f = Function::new(Square);
    let run = |f: &mut Function<Square>, options: &Options| {
        solve(
            SteepestDescent::new(),
            f,
            &dvector![10.0],
            &MaxIterations(3),
            &steepest_descent::Setup::default(),
            &Constraints::Unconstrained,
            options,
        )
        .unwrap()
    };

    let untimed = run(&mut f, &Options::default());
    let timed = run(&mut f, &Options::default().timed(true));

    assert!(untimed.elapsed.is_none());
    assert!(timed.elapsed.is_some());
}

#[test]
fn counters_reset_between_runs() {
    let mut f = Function::new(Square);
    let stop = MaxIterations(3);
    let setup = steepest_descent::Setup::default();

    for _ in 0..2 {
        let results = solve(
            SteepestDescent::new(),
            &mut f,
            &dvector![10.0],
            &stop,
            &setup,
            &Constraints::Unconstrained,
            &Options::default(),
        )
        .unwrap();

        assert_eq!(results.num_func_eval, 4);
        assert_eq!(results.num_grad_eval, 4);
    }
}

#[test]
fn stagnation_can_be_disabled() {
    // Newton lands exactly on the minimum of x² and then stays there.
    let mut f = Function::new(Square);
    let stop = MaxIterations(20);

    let stalled = solve(
        Newton::new(),
        &mut f,
        &dvector![3.0],
        &stop,
        &newton::Setup::default(),
        &Constraints::Unconstrained,
        &Options::default(),
    )
    .unwrap();
    assert_eq!(stalled.status, IterationStatus::NoProgress);
    assert_eq!(stalled.num_iter, 1 + Options::default().stall_iters());

    let no_stall_check = Options::new(false, 0, 0.0).unwrap();
    let capped = solve(
        Newton::new(),
        &mut f,
        &dvector![3.0],
        &stop,
        &newton::Setup::default(),
        &Constraints::Unconstrained,
        &no_stall_check,
    )
    .unwrap();
    assert_eq!(capped.status, IterationStatus::Success);
    assert_eq!(capped.num_iter, 20);
}

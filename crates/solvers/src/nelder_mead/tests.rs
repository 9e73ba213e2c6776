use approx::assert_relative_eq;
use localmin_core::{Bounds, Constraints, FnObjective, Function};
use nalgebra::{DVector, dvector};

use crate::criteria::Progress;
use crate::native::{IterationStatus, Options, Solver, State as _, solve};

use super::{NelderMead, Setup, SetupError};

fn rosenbrock(x: &DVector<f64>) -> f64 {
    (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0].powi(2)).powi(2)
}

fn never(_: &dyn Progress) -> bool {
    false
}

#[test]
fn rejects_invalid_setup() {
    assert_eq!(Setup::new(0.0, 1e-8, 1e-8), Err(SetupError::InitialSize));
    assert_eq!(Setup::new(1.0, -1.0, 1e-8), Err(SetupError::XTol));
    assert_eq!(Setup::new(1.0, 1e-8, f64::NAN), Err(SetupError::FTol));
}

#[test]
fn converges_on_rosenbrock() {
    let mut f = Function::new(FnObjective::new(2, rosenbrock));

    let results = solve(
        NelderMead::new(),
        &mut f,
        &dvector![-1.2, 1.0],
        &never,
        &Setup::default(),
        &Constraints::Unconstrained,
        &Options::default(),
    )
    .unwrap();

    assert_eq!(results.status, IterationStatus::Success);
    assert!(results.num_iter < 1000);
    assert_relative_eq!(results.x[0], 1.0, epsilon = 1e-3);
    assert_relative_eq!(results.x[1], 1.0, epsilon = 1e-3);
    assert!(results.final_state().diameter() <= Setup::default().x_tol());

    // Derivative-free.
    assert_eq!(results.num_grad_eval, 0);
    assert_eq!(results.num_hess_eval, 0);
}

#[test]
fn builtin_criterion_ignores_external_one() {
    let mut f = Function::new(FnObjective::new(2, rosenbrock));
    let always = |_: &dyn Progress| true;

    let results = solve(
        NelderMead::new(),
        &mut f,
        &dvector![-1.2, 1.0],
        &always,
        &Setup::default(),
        &Constraints::Unconstrained,
        &Options::default(),
    )
    .unwrap();

    assert_eq!(results.status, IterationStatus::Success);
    assert!(results.num_iter > 1);
}

#[test]
fn x_array_holds_every_vertex() {
    let f = Function::new(FnObjective::new(3, |x: &DVector<f64>| x.norm_squared()));
    let mut solver = Solver::setup(
        NelderMead::new(),
        &f,
        &dvector![1.0, 2.0, 3.0],
        &Setup::default(),
        &Constraints::Unconstrained,
    )
    .unwrap();

    assert!(solver.has_builtin_stopping_criterion());
    assert_eq!(solver.num_func_eval(), 4);

    solver.iterate();
    let xs = solver.x_array();

    assert_eq!(xs.shape(), (3, 4));
    assert_eq!(&xs.column(0).clone_owned(), solver.x());
    assert_relative_eq!(solver.f_val(), solver.state().values()[0]);
    assert!(solver.state().values().iter().all(|v| *v >= solver.f_val()));
}

#[test]
fn diverges_when_unbounded_below() {
    let mut f = Function::new(FnObjective::new(1, |x: &DVector<f64>| x[0]));

    let results = solve(
        NelderMead::new(),
        &mut f,
        &dvector![0.0],
        &never,
        &Setup::default(),
        &Constraints::Unconstrained,
        &Options::default(),
    )
    .unwrap();

    // Each expansion doubles the simplex until the best point overflows.
    assert_eq!(results.status, IterationStatus::OutOfControl);
    assert!(results.num_iter < 1100);
    assert_eq!(results.states.len(), results.num_iter + 1);
}

#[test]
fn retreats_from_nan_region() {
    let objective = FnObjective::new(1, |x: &DVector<f64>| {
        if x[0] < 0.0 {
            f64::NAN
        } else {
            (x[0] - 2.0).powi(2)
        }
    });
    let mut f = Function::new(objective);

    let results = solve(
        NelderMead::new(),
        &mut f,
        &dvector![0.5],
        &never,
        &Setup::new(4.0, 1e-8, 1e-10).unwrap(),
        &Constraints::Unconstrained,
        &Options::default(),
    )
    .unwrap();

    assert_eq!(results.status, IterationStatus::Success);
    assert_relative_eq!(results.x[0], 2.0, epsilon = 1e-4);
}

#[test]
fn vertices_stay_in_bounds() {
    let mut f = Function::new(FnObjective::new(2, |x: &DVector<f64>| {
        (x[0] - 3.0).powi(2) + (x[1] - 3.0).powi(2)
    }));
    let bounds = Bounds::new(dvector![0.0, 0.0], dvector![1.0, 1.0]).unwrap();

    let results = solve(
        NelderMead::new(),
        &mut f,
        &dvector![0.5, 0.5],
        &never,
        &Setup::default(),
        &Constraints::from(bounds.clone()),
        &Options::default(),
    )
    .unwrap();

    assert!(results.status.is_terminal());
    assert!(results.f <= results.states[0].f());
    for state in &results.states {
        let xs = state.x_array();
        for column in xs.column_iter() {
            assert!(bounds.contains(&column.clone_owned()));
        }
    }
}

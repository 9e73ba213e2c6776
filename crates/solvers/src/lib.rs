//! Iterative local minimization solvers.
//!
//! # Modules
//!
//! - [`native`]: the shared solver contract ([`Algorithm`], [`Solver`],
//!   [`solve`], and [`Results`])
//! - [`criteria`]: pluggable stopping criteria
//!
//! # Solvers
//!
//! - [`steepest_descent`]: fixed-step gradient descent, optionally projected
//!   onto bounds
//! - [`newton`]: damped Newton iteration on the objective's Hessian
//! - [`nelder_mead`]: derivative-free simplex search with a built-in
//!   stopping criterion
//!
//! # Example
//!
//! ```rust
//! use localmin_core::{Constraints, FnObjective, Function};
//! use localmin_solvers::criteria::GradientNorm;
//! use localmin_solvers::native::{IterationStatus, Options, solve};
//! use localmin_solvers::steepest_descent::{Setup, SteepestDescent};
//! use nalgebra::{DVector, dvector};
//!
//! let mut f = Function::new(FnObjective::new(1, |x: &DVector<f64>| x[0] * x[0]));
//!
//! let results = solve(
//!     SteepestDescent::new(),
//!     &mut f,
//!     &dvector![10.0],
//!     &GradientNorm::new(1e-6),
//!     &Setup::new(0.1).unwrap(),
//!     &Constraints::Unconstrained,
//!     &Options::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(results.status, IterationStatus::Success);
//! assert!(results.x[0].abs() < 1e-6);
//! ```
//!
//! [`Algorithm`]: native::Algorithm
//! [`Solver`]: native::Solver
//! [`solve`]: native::solve
//! [`Results`]: native::Results

pub mod criteria;
pub mod native;

pub mod nelder_mead;
pub mod newton;
pub mod steepest_descent;

//! Core traits and types for local minimization.
//!
//! This crate defines the collaborators that iterative solvers consume:
//!
//! - [`Objective`]: a function `f: R^n → R` with value, gradient, and Hessian
//! - [`Function`]: an objective wrapper that counts its own evaluations
//! - [`Constraints`]: either no constraints or element-wise [`Bounds`]
//!
//! Points are [`nalgebra::DVector<f64>`] and matrices are
//! [`nalgebra::DMatrix<f64>`].

mod constraints;
mod function;
mod objective;

pub use constraints::{Bounds, BoundsError, Constraints};
pub use function::{DimensionMismatch, EvalCounts, Function};
pub use objective::{FnObjective, Objective};

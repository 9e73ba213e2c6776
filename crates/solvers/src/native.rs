//! The shared contract of iterative local minimization methods.
//!
//! A concrete method implements [`Algorithm`]: it builds an initial
//! [`State`] and advances it one step at a time, returning an
//! [`IterationStatus`]. Everything else is generic:
//!
//! - [`Solver`] binds an algorithm to a [`Function`], counts iterations,
//!   forwards evaluation counts, and exposes the current point, value,
//!   gradient, and Hessian.
//! - [`solve`] drives a full run: setup, repeated steps, stopping-criterion
//!   checks, stagnation detection, and packaging into [`Results`].
//!
//! # Termination
//!
//! [`IterationStatus::Continue`] is the only non-terminal status. A run ends
//! when a step returns a terminal status, when the external stopping
//! criterion is satisfied (for algorithms without a built-in criterion), or
//! when the driver detects stagnation. Divergence and stagnation are normal
//! outcomes reported in [`Results::status`]; only misconfiguration is an
//! [`Error`].
//!
//! [`Function`]: localmin_core::Function

mod algorithm;
mod error;
mod options;
mod results;
mod solve;
mod solver;
mod state;
mod status;

pub use algorithm::Algorithm;
pub use error::Error;
pub use options::{Options, OptionsError};
pub use results::Results;
pub use solve::solve;
pub use solver::Solver;
pub use state::State;
pub use status::IterationStatus;

use thiserror::Error;

/// Driver options for [`solve`](super::solve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    time_test: bool,
    stall_iters: usize,
    stall_tol: f64,
}

/// Errors that can occur when validating solve options.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    #[error("stall_tol must be finite and non-negative")]
    StallTol,
}

impl Default for Options {
    /// No timing, and five consecutive unchanged steps count as no progress.
    fn default() -> Self {
        Self {
            time_test: false,
            stall_iters: 5,
            stall_tol: 0.0,
        }
    }
}

impl Options {
    /// Creates validated options.
    ///
    /// A step is stalled when both the change in `f` and the largest change in
    /// any coordinate of any point in [`State::x_array`](super::State::x_array)
    /// are within `stall_tol` relative to `1 + |value|`.
    /// After `stall_iters` consecutive stalled steps the run ends with
    /// [`IterationStatus::NoProgress`](super::IterationStatus::NoProgress).
    /// A `stall_iters` of zero disables the check.
    ///
    /// # Errors
    ///
    /// Returns an error if `stall_tol` is negative or non-finite.
    pub fn new(
        time_test: bool,
        stall_iters: usize,
        stall_tol: f64,
    ) -> Result<Self, OptionsError> {
        if !stall_tol.is_finite() || stall_tol < 0.0 {
            return Err(OptionsError::StallTol);
        }

        Ok(Self {
            time_test,
            stall_iters,
            stall_tol,
        })
    }

    /// Returns a copy with wall-clock timing enabled or disabled.
    #[must_use]
    pub fn timed(self, time_test: bool) -> Self {
        Self { time_test, ..self }
    }

    /// Returns `true` if the elapsed time of the run is measured.
    #[must_use]
    pub fn time_test(&self) -> bool {
        self.time_test
    }

    /// Returns the number of consecutive stalled steps that end a run.
    #[must_use]
    pub fn stall_iters(&self) -> usize {
        self.stall_iters
    }

    /// Returns the relative tolerance below which a step counts as stalled.
    #[must_use]
    pub fn stall_tol(&self) -> f64 {
        self.stall_tol
    }
}

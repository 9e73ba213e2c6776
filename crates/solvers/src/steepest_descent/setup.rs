use thiserror::Error;

/// Configuration for steepest descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Setup {
    step_size: f64,
}

/// Errors that can occur when validating a steepest descent setup.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    #[error("step_size must be finite and positive")]
    StepSize,
}

impl Default for Setup {
    fn default() -> Self {
        Self { step_size: 0.1 }
    }
}

impl Setup {
    /// Creates a setup with a validated step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_size` is not finite and positive.
    pub fn new(step_size: f64) -> Result<Self, SetupError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(SetupError::StepSize);
        }

        Ok(Self { step_size })
    }

    /// Returns the step size `alpha`.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }
}

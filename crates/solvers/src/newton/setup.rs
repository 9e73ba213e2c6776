use thiserror::Error;

/// Configuration for Newton's method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Setup {
    damping: f64,
}

/// Errors that can occur when validating a Newton setup.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    #[error("damping must lie in (0, 1]")]
    Damping,
}

impl Default for Setup {
    /// Full Newton steps.
    fn default() -> Self {
        Self { damping: 1.0 }
    }
}

impl Setup {
    /// Creates a setup with a validated damping factor.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < damping <= 1`.
    pub fn new(damping: f64) -> Result<Self, SetupError> {
        if !(damping > 0.0 && damping <= 1.0) {
            return Err(SetupError::Damping);
        }

        Ok(Self { damping })
    }

    /// Returns the fraction of the Newton step taken each iteration.
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }
}

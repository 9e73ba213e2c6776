use thiserror::Error;

/// Configuration for Nelder–Mead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Setup {
    initial_size: f64,
    x_tol: f64,
    f_tol: f64,
}

/// Errors that can occur when validating a Nelder–Mead setup.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    #[error("initial_size must be finite and positive")]
    InitialSize,

    #[error("x_tol must be finite and non-negative")]
    XTol,

    #[error("f_tol must be finite and non-negative")]
    FTol,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            initial_size: 1.0,
            x_tol: 1e-8,
            f_tol: 1e-10,
        }
    }
}

impl Setup {
    /// Creates a validated setup.
    ///
    /// The initial simplex is `x0` plus one vertex offset by `initial_size`
    /// along each coordinate axis.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_size` is not finite and positive, or if a
    /// tolerance is negative or non-finite.
    pub fn new(initial_size: f64, x_tol: f64, f_tol: f64) -> Result<Self, SetupError> {
        if !initial_size.is_finite() || initial_size <= 0.0 {
            return Err(SetupError::InitialSize);
        }
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(SetupError::XTol);
        }
        if !f_tol.is_finite() || f_tol < 0.0 {
            return Err(SetupError::FTol);
        }

        Ok(Self {
            initial_size,
            x_tol,
            f_tol,
        })
    }

    #[must_use]
    pub fn initial_size(&self) -> f64 {
        self.initial_size
    }

    /// Returns the simplex diameter at or below which the search succeeds.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the value spread at or below which the search succeeds.
    #[must_use]
    pub fn f_tol(&self) -> f64 {
        self.f_tol
    }
}

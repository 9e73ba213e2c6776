/// Outcome of a single iteration step.
///
/// [`Continue`](Self::Continue) is the only non-terminal variant. Once a
/// terminal variant is reached the solve loop makes no further steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IterationStatus {
    /// The iteration is expected to keep making progress.
    Continue,

    /// A stopping criterion was satisfied.
    Success,

    /// The iteration stopped making progress.
    NoProgress,

    /// The iteration diverged or produced non-finite values.
    OutOfControl,
}

impl IterationStatus {
    /// Returns `true` for every variant except [`Continue`](Self::Continue).
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Continue)
    }
}

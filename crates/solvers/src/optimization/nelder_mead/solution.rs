use mixfit_core::Snapshot;

/// Indicates why the solver stopped.
///
/// Hitting the iteration limit is not a status: it is reported as
/// [`Error::IterationLimitExceeded`](super::Error::IterationLimitExceeded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every simplex vertex met the convergence thresholds.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,

    /// A manually stepped run was finished before converging.
    Unconverged,
}

/// The result of a Nelder–Mead search.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Best point found: the first vertex of the final simplex.
    pub x: Vec<f64>,

    /// Objective value at `x`.
    pub objective: f64,

    /// Snapshot at `x`, including any byproduct the model computed there.
    pub snapshot: Snapshot<I, O>,

    /// Iterations performed.
    pub iters: usize,

    /// Objective evaluations performed.
    pub evals: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns the minimizing point.
    #[must_use]
    pub fn x_minimum(&self) -> &[f64] {
        &self.x
    }

    /// Returns the objective at the minimizing point.
    #[must_use]
    pub fn f_minimum(&self) -> f64 {
        self.objective
    }
}

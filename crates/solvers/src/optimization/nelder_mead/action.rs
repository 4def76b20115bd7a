/// Actions an observer can take during a Nelder–Mead search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best vertex of the current simplex.
    StopEarly,

    /// Treat this point as infinitely worse than every other vertex.
    ///
    /// The point still enters the simplex, so the search moves away from it,
    /// but it can never be reported as the best solution while any real
    /// evaluation exists.
    ///
    /// Use this for:
    /// - Recovering from model or problem errors, or NaN objectives, when the
    ///   failing region is known to be uninteresting (for example, candidate
    ///   covariance parameters for which the factorization breaks down).
    /// - Steering the search away from a region even when evaluation succeeded.
    AssumeWorse,
}

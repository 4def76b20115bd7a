//! Observers that steer a search by answering with actions.

use mixfit_core::Observer;

use crate::traits::{CanAssumeWorse, CanStopEarly, HasObjective};

/// Stops the search once an evaluation reaches a target objective.
///
/// Useful when any point below a known threshold is good enough, such as a
/// deviance within tolerance of a previously fitted model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopBelow {
    target: f64,
}

impl StopBelow {
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for StopBelow {
    fn observe(&mut self, event: &E) -> Option<A> {
        // NaN compares false, so failed evaluations never stop the search.
        if event.objective() <= self.target {
            log::debug!("objective reached target {}", self.target);
            return Some(A::stop_early());
        }
        None
    }
}

/// Recovers from failed or NaN evaluations by ranking them worst.
///
/// A deviance pipeline can fail for candidate parameters where a
/// factorization breaks down; this observer lets the search step away from
/// such points instead of aborting. The number of recoveries is tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoverFailures {
    recovered: usize,
}

impl RecoverFailures {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many evaluations were recovered.
    #[must_use]
    pub fn recovered(&self) -> usize {
        self.recovered
    }
}

impl<E: HasObjective, A: CanAssumeWorse> Observer<E, A> for RecoverFailures {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.objective().is_nan() {
            self.recovered += 1;
            return Some(A::assume_worse());
        }
        None
    }
}

/// Allows `&mut RecoverFailures` to be passed to solvers that take an
/// observer by value, so the count can be read after the solve completes.
impl<E: HasObjective, A: CanAssumeWorse> Observer<E, A> for &mut RecoverFailures {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use mixfit_solvers::optimization::nelder_mead::{
        Bounds, Config, Error, Status, minimize, minimize_unobserved,
    };

    use crate::test_support::Flaky;

    #[test]
    fn stop_below_halts_at_target() {
        let solution = minimize(
            &Flaky,
            &Flaky,
            &[3.0],
            &Bounds::unbounded().with_lower(vec![0.0]),
            &Config::default(),
            StopBelow::new(0.5),
        )
        .expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.objective > 0.0);
    }

    #[test]
    fn stop_below_unreachable_target_lets_search_converge() {
        let solution = minimize(
            &Flaky,
            &Flaky,
            &[3.0],
            &Bounds::unbounded().with_lower(vec![0.0]),
            &Config::default(),
            StopBelow::new(-1.0),
        )
        .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
    }

    #[test]
    fn failures_abort_without_recovery() {
        let result = minimize_unobserved(
            &Flaky,
            &Flaky,
            &[3.0],
            &Bounds::unbounded(),
            &Config::default(),
        );

        assert!(matches!(result, Err(Error::Model(_))));
    }

    #[test]
    fn recover_failures_lets_search_continue() {
        let mut recover = RecoverFailures::new();

        let solution = minimize(
            &Flaky,
            &Flaky,
            &[3.0],
            &Bounds::unbounded(),
            &Config::default(),
            &mut recover,
        )
        .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_abs_diff_eq!(solution.x[0], 0.5, epsilon = 1e-3);
        assert!(recover.recovered() > 0);
    }
}

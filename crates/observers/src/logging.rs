//! An observer that reports every evaluation through the `log` facade.

use log::Level;

use mixfit_core::Observer;

use crate::traits::{HasObjective, HasPoint};

/// Logs each evaluation at a fixed level and never intervenes.
///
/// Records go to the `mixfit_observers::logging` target, so they can be
/// filtered separately from the solver's own diagnostics:
///
/// ```text
/// RUST_LOG=mixfit_observers::logging=info cargo run --example log_run
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver {
    level: Level,
    evals: usize,
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level, evals: 0 }
    }

    /// Returns the level records are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn evals(&self) -> usize {
        self.evals
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<E: HasObjective + HasPoint, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.evals += 1;
        let objective = event.objective();
        if objective.is_nan() {
            log::log!(self.level, "eval {}: failed at {:?}", self.evals, event.point());
        } else {
            let x = event.point();
            log::log!(self.level, "eval {}: objective {objective} at {x:?}", self.evals);
        }
        None
    }
}

/// Allows `&mut LogObserver` to be passed to solvers that take an observer
/// by value, so the counter can be read after the solve completes.
impl<E: HasObjective + HasPoint, A> Observer<E, A> for &mut LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mixfit_solvers::optimization::nelder_mead::{
        Action, Bounds, Config, Event, Status, Step, minimize,
    };

    use crate::test_support::Flaky;

    #[test]
    fn counts_every_evaluation_without_intervening() {
        let mut observer = LogObserver::new(Level::Info);

        let solution = minimize(
            &Flaky,
            &Flaky,
            &[2.0],
            &Bounds::unbounded().with_lower(vec![0.0]),
            &Config::default(),
            &mut observer,
        )
        .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(observer.evals(), solution.evals);
    }

    #[test]
    fn never_returns_an_action() {
        let mut observer = LogObserver::default();
        let x = [1.0];
        let input = x.to_vec();
        let event: Event<'_, Flaky, Flaky> = Event::Evaluated {
            step: Step::Initial,
            x: &x,
            objective: 0.25,
            input: &input,
            output: &0.25,
        };

        let action: Option<Action> = observer.observe(&event);

        assert_eq!(action, None);
        assert_eq!(observer.level(), Level::Debug);
    }
}

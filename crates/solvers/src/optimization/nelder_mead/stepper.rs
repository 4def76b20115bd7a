use mixfit_core::{Model, OptimizationProblem};

use super::{
    Bounds, Config, Error, Solution, Status,
    search::{Run, Start},
};

fn identity(v: f64) -> f64 {
    v
}

/// A Nelder–Mead minimization driven one iteration at a time.
///
/// Construction validates the inputs and evaluates the initial simplex.
/// The caller then decides when to iterate and can inspect the current best
/// point in between:
///
/// ```
/// use mixfit_solvers::optimization::nelder_mead::{Bounds, Config, FnObjective, Minimizer};
///
/// let objective = FnObjective(|x: &[f64]| (x[0] - 1.0).powi(2) + x[1] * x[1]);
/// let bounds = Bounds::unbounded();
/// let config = Config::default();
/// let mut minimizer = Minimizer::new(&objective, &objective, &[0.0, 0.0], &bounds, &config)?;
///
/// while minimizer.is_converging() {
///     minimizer.iterate()?;
/// }
///
/// assert!((minimizer.x_minimum()[0] - 1.0).abs() < 1e-2);
/// # Ok::<(), mixfit_solvers::optimization::nelder_mead::Error>(())
/// ```
///
/// A stepped run follows the same path as [`minimize_unobserved`]: the same
/// inputs give the same iterates and counters.
///
/// [`minimize_unobserved`]: super::minimize_unobserved
pub struct Minimizer<'a, M, P>
where
    M: Model,
{
    run: Run<'a, M, P, (), fn(f64) -> f64>,
}

impl<'a, M, P> Minimizer<'a, M, P>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
{
    /// Validates the inputs and evaluates the initial simplex.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs are invalid, or if an initial
    /// evaluation fails or yields NaN.
    pub fn new(
        model: &'a M,
        problem: &'a P,
        start_point: &[f64],
        bounds: &Bounds,
        config: &Config,
    ) -> Result<Self, Error> {
        let transform: fn(f64) -> f64 = identity;
        match Run::start(model, problem, start_point, bounds, config, (), transform)? {
            Start::Running(run) => Ok(Self { run }),
            // The no-op observer never stops a run.
            Start::Stopped(_) => Err(Error::NoSuccessfulEvaluation),
        }
    }

    /// Returns false once the last iteration met the convergence thresholds.
    ///
    /// Always true before the first iteration.
    #[must_use]
    pub fn is_converging(&self) -> bool {
        !self.run.is_converged()
    }

    /// Performs one iteration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IterationLimitExceeded`] once the configured limit is
    /// passed, or an error if an evaluation fails or yields NaN.
    pub fn iterate(&mut self) -> Result<(), Error> {
        self.run.step().map(|_| ())
    }

    /// Returns the best point of the current simplex.
    #[must_use]
    pub fn x_minimum(&self) -> &[f64] {
        &self.run.best().x
    }

    /// Returns the objective at [`x_minimum`](Self::x_minimum).
    #[must_use]
    pub fn f_minimum(&self) -> f64 {
        self.run.best().objective
    }

    #[must_use]
    pub fn iters(&self) -> usize {
        self.run.iters()
    }

    #[must_use]
    pub fn evals(&self) -> usize {
        self.run.evals()
    }

    /// Finishes the run and returns its best point.
    ///
    /// The status is [`Status::Converged`] if the last iteration converged,
    /// and [`Status::Unconverged`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuccessfulEvaluation`] if the best vertex carries
    /// no evaluation, which cannot happen without an observer.
    pub fn into_solution(self) -> Result<Solution<M::Input, M::Output>, Error> {
        let status = if self.run.is_converged() {
            Status::Converged
        } else {
            Status::Unconverged
        };
        self.run.finish(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::optimization::nelder_mead::{FnObjective, minimize_unobserved};

    type Plain = FnObjective<fn(&[f64]) -> f64>;

    fn bowl(x: &[f64]) -> f64 {
        (x[0] - 2.0).powi(2) + (x[1] - 5.0).powi(2)
    }

    #[test]
    fn stepping_matches_minimize() {
        let objective: Plain = FnObjective(bowl);
        let bounds = Bounds::unbounded().with_lower(vec![3.0, f64::NEG_INFINITY]);
        let config = Config::default();

        let mut minimizer = Minimizer::new(&objective, &objective, &[0.0, 0.0], &bounds, &config)
            .expect("valid inputs");
        assert_eq!(minimizer.iters(), 0);
        assert_eq!(minimizer.evals(), 3);

        while minimizer.is_converging() {
            minimizer.iterate().expect("should not fail");
            assert!(minimizer.x_minimum()[0] >= 3.0);
        }
        let stepped = minimizer.into_solution().expect("has a best point");

        let direct = minimize_unobserved(&objective, &objective, &[0.0, 0.0], &bounds, &config)
            .expect("should converge");

        assert_eq!(stepped.status, Status::Converged);
        assert_eq!(stepped.x, direct.x);
        assert_eq!(stepped.iters, direct.iters);
        assert_eq!(stepped.evals, direct.evals);
        assert_abs_diff_eq!(stepped.x[1], 5.0, epsilon = 1e-3);
    }

    #[test]
    fn caller_can_finish_before_convergence() {
        let objective: Plain = FnObjective(bowl);
        let bounds = Bounds::unbounded();

        let mut minimizer =
            Minimizer::new(&objective, &objective, &[0.0, 0.0], &bounds, &Config::default())
                .expect("valid inputs");
        minimizer.iterate().expect("first iteration");

        // Reflection [2, 1] (16) loses to the expansion [3, 1.5] (13.25).
        assert_eq!(minimizer.x_minimum(), &[3.0, 1.5]);
        assert_eq!(minimizer.f_minimum(), 13.25);

        let solution = minimizer.into_solution().expect("has a best point");
        assert_eq!(solution.status, Status::Unconverged);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.evals, 5);
    }

    #[test]
    fn stepping_respects_iteration_limit() {
        let objective: Plain = FnObjective(bowl);
        let config = Config::new(2, 1e-6).unwrap();

        let mut minimizer =
            Minimizer::new(&objective, &objective, &[0.0, 0.0], &Bounds::unbounded(), &config)
                .expect("valid inputs");

        assert!(minimizer.iterate().is_ok());
        assert!(minimizer.iterate().is_ok());
        assert!(matches!(
            minimizer.iterate(),
            Err(Error::IterationLimitExceeded { max_iters: 2, .. })
        ));
    }

    #[test]
    fn invalid_inputs_fail_on_construction() {
        let objective: Plain = FnObjective(bowl);

        let config = Config::default();
        let result = Minimizer::new(&objective, &objective, &[], &Bounds::unbounded(), &config);

        assert!(matches!(result, Err(Error::EmptyStartPoint)));
    }
}

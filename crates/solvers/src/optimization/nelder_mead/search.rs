use mixfit_core::{Model, Observer, OptimizationProblem};

use super::{
    Action, Bounds, Config, Error, Event, Solution, Status, Step,
    convergence::is_converged,
    evaluator::{Evaluator, Pass},
    init::start_points,
    iterate::{Flow, iterate},
    simplex::Simplex,
    vertex::{Vertex, compare},
};

/// Core Nelder–Mead search implementation.
///
/// The `transform` function is applied to objective values before
/// comparison, allowing the same algorithm to handle both minimization
/// (transform = identity) and maximization (transform = negation).
pub(super) fn search<M, P, Obs, F>(
    model: &M,
    problem: &P,
    start_point: &[f64],
    bounds: &Bounds,
    config: &Config,
    observer: Obs,
    transform: F,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    F: Fn(f64) -> f64,
{
    let start = Run::start(model, problem, start_point, bounds, config, observer, transform)?;
    let mut run = match start {
        Start::Running(run) => run,
        Start::Stopped(solution) => return Ok(solution),
    };

    loop {
        if run.is_converged() {
            return run.finish(Status::Converged);
        }
        if run.step()? == Flow::Stop {
            return run.finish(Status::StoppedByObserver);
        }
    }
}

/// Outcome of starting a run.
pub(super) enum Start<R, S> {
    /// The initial simplex is complete.
    Running(R),

    /// The observer stopped during the initial pass.
    Stopped(S),
}

/// The state of one search, owned exclusively by it.
pub(super) struct Run<'a, M, P, Obs, F>
where
    M: Model,
{
    evaluator: Evaluator<'a, M, P, Obs, F>,
    simplex: Simplex<M::Input, M::Output>,
    previous: Option<Vec<f64>>,
    iters: usize,
    max_iters: usize,
    epsilon: f64,
}

impl<'a, M, P, Obs, F> Run<'a, M, P, Obs, F>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'e> Observer<Event<'e, M, P>, Action>,
    F: Fn(f64) -> f64,
{
    /// Validates the inputs and evaluates the initial simplex.
    pub(super) fn start(
        model: &'a M,
        problem: &'a P,
        start_point: &[f64],
        bounds: &Bounds,
        config: &Config,
        observer: Obs,
        transform: F,
    ) -> Result<Start<Self, Solution<M::Input, M::Output>>, Error> {
        if start_point.is_empty() {
            return Err(Error::EmptyStartPoint);
        }

        let n = start_point.len();
        let region = bounds.resolve(n)?;
        let points = start_points(start_point, config.steps(), &region)?;

        log::debug!(
            "nelder-mead: n = {n}, epsilon = {}, max_iters = {}",
            config.epsilon(),
            config.max_iters()
        );

        let mut evaluator = Evaluator::new(model, problem, region, observer, transform);

        match evaluator.evaluate_all(points, Step::Initial)? {
            Pass::Complete(simplex) => Ok(Start::Running(Self {
                evaluator,
                simplex,
                previous: None,
                iters: 0,
                max_iters: config.max_iters(),
                epsilon: config.epsilon(),
            })),
            Pass::Stopped(vertices) => {
                let best = vertices.into_iter().min_by(compare);
                let solution = finish(best, Status::StoppedByObserver, 0, evaluator.evals())?;
                Ok(Start::Stopped(solution))
            }
        }
    }

    /// Returns true once an iteration left every vertex objective unchanged
    /// within tolerance. Always false before the first iteration.
    pub(super) fn is_converged(&self) -> bool {
        self.previous
            .as_deref()
            .is_some_and(|previous| is_converged(previous, &self.simplex.objectives(), self.epsilon))
    }

    /// Performs one iteration.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IterationLimitExceeded`] once the iteration count
    /// would exceed the limit, or if an evaluation fails unrecovered.
    pub(super) fn step(&mut self) -> Result<Flow, Error> {
        self.previous = Some(self.simplex.objectives());

        self.iters += 1;
        if self.iters > self.max_iters {
            let best = self.simplex.best();
            log::warn!(
                "nelder-mead: iteration limit {} reached, best objective {} at {:?}",
                self.max_iters,
                best.objective,
                best.x
            );
            return Err(Error::IterationLimitExceeded {
                max_iters: self.max_iters,
                x: best.x.clone(),
                objective: best.objective,
            });
        }

        iterate(&mut self.simplex, &mut self.evaluator)
    }

    pub(super) fn best(&self) -> &Vertex<M::Input, M::Output> {
        self.simplex.best()
    }

    pub(super) fn iters(&self) -> usize {
        self.iters
    }

    pub(super) fn evals(&self) -> usize {
        self.evaluator.evals()
    }

    /// Consumes the run and reports its best vertex.
    pub(super) fn finish(self, status: Status) -> Result<Solution<M::Input, M::Output>, Error> {
        let evals = self.evaluator.evals();
        finish(Some(self.simplex.into_best()), status, self.iters, evals)
    }
}

/// Builds the solution from the best vertex.
///
/// A vertex without a snapshot was assumed worse by the observer, so it
/// cannot be reported as a result.
fn finish<I, O>(
    best: Option<Vertex<I, O>>,
    status: Status,
    iters: usize,
    evals: usize,
) -> Result<Solution<I, O>, Error> {
    let Some(Vertex {
        x,
        objective,
        snapshot: Some(snapshot),
        ..
    }) = best
    else {
        return Err(Error::NoSuccessfulEvaluation);
    };

    log::debug!(
        "nelder-mead: {status:?} after {iters} iterations and {evals} evaluations, objective {objective}"
    );

    Ok(Solution {
        status,
        x,
        objective,
        snapshot,
        iters,
        evals,
    })
}

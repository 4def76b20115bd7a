use mixfit_core::{Model, Observer, OptimizationProblem};

use crate::optimization::evaluate;

use super::{Action, Error, Event, Step, bounds::Region, simplex::Simplex, vertex::Vertex};

/// Outcome of evaluating a batch of points.
pub(super) enum Pass<I, O> {
    /// Every point was evaluated; the vertices form a sorted simplex.
    Complete(Simplex<I, O>),

    /// The observer stopped the search; holds the vertices evaluated before the stop.
    Stopped(Vec<Vertex<I, O>>),
}

/// Clamps, evaluates, and reports candidate points for one search.
///
/// Owns the bounds, the observer, and the evaluation counter, so every
/// objective call in a run goes through the same bookkeeping.
pub(super) struct Evaluator<'a, M, P, Obs, F> {
    model: &'a M,
    problem: &'a P,
    region: Region,
    observer: Obs,
    transform: F,
    evals: usize,
}

impl<'a, M, P, Obs, F> Evaluator<'a, M, P, Obs, F>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'e> Observer<Event<'e, M, P>, Action>,
    F: Fn(f64) -> f64,
{
    pub(super) fn new(model: &'a M, problem: &'a P, region: Region, observer: Obs, transform: F) -> Self {
        Self {
            model,
            problem,
            region,
            observer,
            transform,
            evals: 0,
        }
    }

    /// Returns the number of objective evaluations so far.
    pub(super) fn evals(&self) -> usize {
        self.evals
    }

    /// Clamps `x` into the bounds, evaluates it, and emits an event.
    ///
    /// Returns `Ok(None)` if the observer stops the search.
    ///
    /// # Errors
    ///
    /// Fails if evaluation fails or yields NaN and the observer does not
    /// answer [`Action::AssumeWorse`].
    pub(super) fn evaluate(
        &mut self,
        mut x: Vec<f64>,
        step: Step,
    ) -> Result<Option<Vertex<M::Input, M::Output>>, Error> {
        self.region.clamp(&mut x);
        self.evals += 1;

        match evaluate(self.model, self.problem, &x) {
            Ok(eval) => {
                log::trace!("{step:?} at {x:?}: objective {}", eval.objective);
                let event = Event::Evaluated {
                    step,
                    x: &x,
                    objective: eval.objective,
                    input: &eval.snapshot.input,
                    output: &eval.snapshot.output,
                };
                match self.observer.observe(&event) {
                    Some(Action::StopEarly) => Ok(None),
                    Some(Action::AssumeWorse) => Ok(Some(self.assumed_worse(x))),
                    None if eval.objective.is_nan() => Err(Error::NotANumber { x }),
                    None => {
                        let score = (self.transform)(eval.objective);
                        Ok(Some(Vertex::evaluated(x, eval.objective, score, eval.snapshot)))
                    }
                }
            }
            Err(error) => {
                log::debug!("{step:?} at {x:?} failed: {error}");
                match Event::<M, P>::emit_failure(step, &x, &error, &mut self.observer) {
                    Some(Action::StopEarly) => Ok(None),
                    Some(Action::AssumeWorse) => Ok(Some(self.assumed_worse(x))),
                    None => Err(error.into()),
                }
            }
        }
    }

    /// Evaluates every point in order, then sorts them into a simplex.
    pub(super) fn evaluate_all(
        &mut self,
        points: Vec<Vec<f64>>,
        step: Step,
    ) -> Result<Pass<M::Input, M::Output>, Error> {
        let mut vertices = Vec::with_capacity(points.len());
        for x in points {
            match self.evaluate(x, step)? {
                Some(vertex) => vertices.push(vertex),
                None => return Ok(Pass::Stopped(vertices)),
            }
        }
        Ok(Pass::Complete(Simplex::from_vertices(vertices)))
    }

    fn assumed_worse(&self, x: Vec<f64>) -> Vertex<M::Input, M::Output> {
        Vertex::assumed_worse(x, (self.transform)(f64::INFINITY))
    }
}

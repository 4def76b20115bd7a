use mixfit_core::{Model, Observer, OptimizationProblem};

use super::{
    Action, Error, Event, Step,
    evaluator::{Evaluator, Pass},
    simplex::Simplex,
};

/// Reflection coefficient.
const RHO: f64 = 1.0;

/// Expansion coefficient.
const CHI: f64 = 2.0;

/// Contraction coefficient.
const GAMMA: f64 = 0.5;

/// Shrink coefficient.
const SIGMA: f64 = 0.5;

/// Whether the search continues after an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Stop,
}

/// Performs one Nelder–Mead iteration on `simplex`.
///
/// Exactly one of the following happens: the worst vertex is replaced by a
/// reflected, expanded, or contracted point, or every vertex shrinks toward
/// the best and the whole simplex is re-evaluated. Candidate points are
/// clamped by the evaluator before the objective sees them.
pub(super) fn iterate<M, P, Obs, F>(
    simplex: &mut Simplex<M::Input, M::Output>,
    evaluator: &mut Evaluator<'_, M, P, Obs, F>,
) -> Result<Flow, Error>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    F: Fn(f64) -> f64,
{
    let centroid = simplex.centroid();
    let best = simplex.best().score;
    let second_worst = simplex.second_worst().score;
    let worst = simplex.worst().score;

    let xr = combine(&centroid, &simplex.worst().x, |c, w| c + RHO * (c - w));
    let Some(reflected) = evaluator.evaluate(xr, Step::Reflection)? else {
        return Ok(Flow::Stop);
    };

    if best <= reflected.score && reflected.score < second_worst {
        log::trace!("accepted reflection");
        simplex.replace_worst(reflected);
        return Ok(Flow::Continue);
    }

    if reflected.score < best {
        let xe = combine(&centroid, &reflected.x, |c, r| c + CHI * (r - c));
        let Some(expanded) = evaluator.evaluate(xe, Step::Expansion)? else {
            // The reflected point already beats the best vertex.
            simplex.replace_worst(reflected);
            return Ok(Flow::Stop);
        };
        if expanded.score < reflected.score {
            log::trace!("accepted expansion");
            simplex.replace_worst(expanded);
        } else {
            log::trace!("accepted reflection over expansion");
            simplex.replace_worst(reflected);
        }
        return Ok(Flow::Continue);
    }

    if reflected.score < worst {
        let xc = combine(&centroid, &reflected.x, |c, r| c + GAMMA * (r - c));
        let Some(contracted) = evaluator.evaluate(xc, Step::OutsideContraction)? else {
            return Ok(Flow::Stop);
        };
        if contracted.score <= reflected.score {
            log::trace!("accepted outside contraction");
            simplex.replace_worst(contracted);
            return Ok(Flow::Continue);
        }
    } else {
        let xc = combine(&centroid, &simplex.worst().x, |c, w| c - GAMMA * (c - w));
        let Some(contracted) = evaluator.evaluate(xc, Step::InsideContraction)? else {
            return Ok(Flow::Stop);
        };
        if contracted.score < worst {
            log::trace!("accepted inside contraction");
            simplex.replace_worst(contracted);
            return Ok(Flow::Continue);
        }
    }

    log::trace!("shrinking toward best vertex");
    match evaluator.evaluate_all(simplex.shrunk_points(SIGMA), Step::Shrink)? {
        Pass::Complete(shrunk) => {
            *simplex = shrunk;
            Ok(Flow::Continue)
        }
        Pass::Stopped(_) => Ok(Flow::Stop),
    }
}

/// Combines two points coordinate by coordinate.
fn combine(a: &[f64], b: &[f64], f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    a.iter().zip(b).map(|(&a, &b)| f(a, b)).collect()
}

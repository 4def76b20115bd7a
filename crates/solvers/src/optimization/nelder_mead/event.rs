use mixfit_core::{Model, Observer, OptimizationProblem};

use crate::optimization::EvalError;

use super::Action;

/// The simplex move that produced an evaluated point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A vertex of the initial simplex.
    Initial,

    /// The worst vertex reflected through the centroid.
    Reflection,

    /// The reflected point pushed further from the centroid.
    Expansion,

    /// A point between the centroid and the reflected point.
    OutsideContraction,

    /// A point between the centroid and the worst vertex.
    InsideContraction,

    /// A vertex pulled halfway toward the best vertex.
    Shrink,
}

/// Events emitted by the Nelder–Mead solver, one per evaluation.
///
/// `x` is always the clamped point that was (or would have been) passed to
/// the problem. A successful evaluation may still carry a NaN objective;
/// unless the observer answers [`Action::AssumeWorse`], the search then
/// fails with [`Error::NotANumber`](super::Error::NotANumber).
pub enum Event<'a, M, P>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
{
    /// Successful evaluation.
    Evaluated {
        /// The move that produced this point.
        step: Step,

        /// The evaluated point.
        x: &'a [f64],

        /// The objective at `x`.
        objective: f64,

        /// The model input at this point.
        input: &'a M::Input,

        /// The model output at this point.
        output: &'a M::Output,
    },

    /// Model evaluation failed.
    ModelFailed {
        /// The move that produced this point.
        step: Step,

        /// The point where evaluation failed.
        x: &'a [f64],

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed (input construction or objective computation).
    ProblemFailed {
        /// The move that produced this point.
        step: Step,

        /// The point where evaluation failed.
        x: &'a [f64],

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P> Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
{
    /// Returns the point that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> &[f64] {
        match self {
            Self::Evaluated { x, .. }
            | Self::ModelFailed { x, .. }
            | Self::ProblemFailed { x, .. } => x,
        }
    }

    /// Returns the move that produced the point.
    #[must_use]
    pub fn step(&self) -> Step {
        match self {
            Self::Evaluated { step, .. }
            | Self::ModelFailed { step, .. }
            | Self::ProblemFailed { step, .. } => *step,
        }
    }

    /// Returns the objective, or `None` if evaluation failed.
    #[must_use]
    pub fn objective(&self) -> Option<f64> {
        match self {
            Self::Evaluated { objective, .. } => Some(*objective),
            Self::ModelFailed { .. } | Self::ProblemFailed { .. } => None,
        }
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        step: Step,
        x: &[f64],
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed { step, x, error: e };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed { step, x, error: e };
                observer.observe(&event)
            }
        }
    }
}

use crate::optimization::EvalError;

use super::BoundsError;

/// Errors that can occur during a Nelder–Mead search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("start point must have at least one coordinate")]
    EmptyStartPoint,

    #[error("start steps have {actual} entries but the start point has {expected} coordinates")]
    Dimension { expected: usize, actual: usize },

    #[error("invalid bounds: {0}")]
    InvalidBounds(#[from] BoundsError),

    #[error("initial simplex is degenerate: vertices {first} and {second} coincide")]
    DegenerateSimplex { first: usize, second: usize },

    #[error("no convergence within {max_iters} iterations (best objective {objective} at {x:?})")]
    IterationLimitExceeded {
        max_iters: usize,
        x: Vec<f64>,
        objective: f64,
    },

    #[error("objective is NaN at {x:?}")]
    NotANumber { x: Vec<f64> },

    #[error("no successful evaluation to report")]
    NoSuccessfulEvaluation,

    #[error("model error: {0}")]
    Model(Box<dyn std::error::Error + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(Box<dyn std::error::Error + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: std::error::Error + Send + Sync + 'static,
    PE: std::error::Error + Send + Sync + 'static,
{
    fn from(error: EvalError<ME, PE>) -> Self {
        match error {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}

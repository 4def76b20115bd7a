//! Nelder–Mead simplex search with box constraints.
//!
//! # Algorithm
//!
//! The search keeps `n + 1` vertices in `n` dimensions, sorted by objective.
//! Each iteration reflects the worst vertex through the centroid of the
//! others, then expands, contracts, or shrinks the simplex depending on how
//! the reflected point compares with the current vertices. Every candidate
//! point is clamped into the bounds before the objective sees it.
//!
//! The initial simplex is the clamped start point plus `n` points built from
//! a lower-triangular step matrix: point `i + 1` adds `steps[0..=i]` to the
//! first `i + 1` coordinates. The default steps are all `1.0`.
//!
//! The search converges when, between two consecutive iterations, every
//! vertex objective changed by at most `epsilon` absolutely and at most
//! `100 * epsilon` relative to its magnitude.
//!
//! # When to Use
//!
//! Nelder–Mead is appropriate when:
//! - The problem has a handful of variables, such as covariance parameters
//! - Derivatives are unavailable or expensive, as with a profiled deviance
//! - Variables have simple box constraints like non-negative variances
//!
//! # Limitations
//!
//! - **Local only**: Converges to a local minimum near the start point
//! - **No convergence guarantee**: The simplex can stall on some functions
//! - **Scales poorly**: Needs many evaluations as the dimension grows
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per objective evaluation, tagged with the
//! [`Step`] that produced the point:
//!
//! - [`Event::Evaluated`] — evaluation succeeded (the objective may be NaN)
//! - [`Event::ModelFailed`] — model returned an error
//! - [`Event::ProblemFailed`] — problem returned an error (input or objective)
//!
//! Observers can return [`Action::StopEarly`] to halt with the best vertex
//! found so far, or [`Action::AssumeWorse`] to rank the point behind every
//! other vertex. Without an action, a failed evaluation aborts the search
//! and a NaN objective fails with [`Error::NotANumber`].
//!
//! # Manual Stepping
//!
//! [`Minimizer`] runs the same search one iteration at a time, for callers
//! that want to inspect or interrupt it between iterations without an
//! observer.

mod action;
mod bounds;
mod closure;
mod config;
mod convergence;
mod error;
mod evaluator;
mod event;
mod init;
mod iterate;
mod search;
mod simplex;
mod solution;
mod stepper;
mod vertex;


pub use action::Action;
pub use bounds::{Bounds, BoundsError};
pub use closure::FnObjective;
pub use config::{Config, ConfigError, DEFAULT_EPSILON, DEFAULT_MAX_ITERS};
pub use error::Error;
pub use event::{Event, Step};
pub use solution::{Solution, Status};
pub use stepper::Minimizer;

use mixfit_core::{Model, Observer, OptimizationProblem};

use search::search;

/// Finds a minimum of the objective using Nelder–Mead simplex search.
///
/// The observer receives an [`Event`] for every objective evaluation.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if the inputs are invalid, if the iteration limit is
/// reached before convergence, or if an evaluation fails or yields NaN and
/// the observer does not return [`Action::AssumeWorse`] to recover.
pub fn minimize<M, P, Obs>(
    model: &M,
    problem: &P,
    start_point: &[f64],
    bounds: &Bounds,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, start_point, bounds, config, observer, |v| v)
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the inputs are invalid, if the iteration limit is
/// reached, or if an evaluation fails or yields NaN.
pub fn minimize_unobserved<M, P>(
    model: &M,
    problem: &P,
    start_point: &[f64],
    bounds: &Bounds,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
{
    minimize(model, problem, start_point, bounds, config, ())
}

/// Finds a maximum of the objective using Nelder–Mead simplex search.
///
/// The observer receives an [`Event`] for every objective evaluation.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if the inputs are invalid, if the iteration limit is
/// reached before convergence, or if an evaluation fails or yields NaN and
/// the observer does not return [`Action::AssumeWorse`] to recover.
pub fn maximize<M, P, Obs>(
    model: &M,
    problem: &P,
    start_point: &[f64],
    bounds: &Bounds,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, start_point, bounds, config, observer, |v| -v)
}

/// Finds a maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the inputs are invalid, if the iteration limit is
/// reached, or if an evaluation fails or yields NaN.
pub fn maximize_unobserved<M, P>(
    model: &M,
    problem: &P,
    start_point: &[f64],
    bounds: &Bounds,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
{
    maximize(model, problem, start_point, bounds, config, ())
}

/// Finds a minimum of a plain objective function.
///
/// Wraps `f` in [`FnObjective`], so the solution snapshot holds the point
/// and its objective value.
///
/// ```
/// use mixfit_solvers::optimization::nelder_mead::{Bounds, Config, Status, minimize_fn};
///
/// let f = |x: &[f64]| (x[0] - 2.0).powi(2) + (x[1] - 5.0).powi(2);
/// let solution = minimize_fn(f, &[0.0, 0.0], &Bounds::unbounded(), &Config::default())?;
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!((solution.x[0] - 2.0).abs() < 1e-2);
/// assert!((solution.x[1] - 5.0).abs() < 1e-2);
/// # Ok::<(), mixfit_solvers::optimization::nelder_mead::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if the inputs are invalid, if the iteration limit is
/// reached, or if `f` returns NaN.
pub fn minimize_fn<F>(
    f: F,
    start_point: &[f64],
    bounds: &Bounds,
    config: &Config,
) -> Result<Solution<Vec<f64>, f64>, Error>
where
    F: Fn(&[f64]) -> f64,
{
    let objective = FnObjective(f);
    minimize_unobserved(&objective, &objective, start_point, bounds, config)
}

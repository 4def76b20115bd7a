//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer written once works with any solver whose types implement them.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasPoint`] — events that carry the evaluated point
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanAssumeWorse`] — actions that can signal a worse-than-evaluated outcome
//!
//! # Example
//!
//! ```rust
//! use mixfit_core::Observer;
//! use mixfit_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct Budget {
//!     remaining: usize,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for Budget {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         if self.remaining == 0 {
//!             return Some(A::stop_early());
//!         }
//!         self.remaining -= 1;
//!         None
//!     }
//! }
//! ```

use mixfit_core::{Model, OptimizationProblem};

use mixfit_solvers::optimization::nelder_mead;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no objective
    /// is available.
    fn objective(&self) -> f64;
}

/// An event that carries the point being evaluated.
pub trait HasPoint {
    /// Returns the solver variables for this event.
    fn point(&self) -> &[f64];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can signal a worse-than-evaluated outcome.
pub trait CanAssumeWorse {
    /// Returns the action that ranks this evaluation behind all others.
    fn assume_worse() -> Self;
}

// --- nelder_mead::Event ---

impl<M, P> HasObjective for nelder_mead::Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
{
    fn objective(&self) -> f64 {
        nelder_mead::Event::objective(self).unwrap_or(f64::NAN)
    }
}

impl<M, P> HasPoint for nelder_mead::Event<'_, M, P>
where
    M: Model,
    P: OptimizationProblem<Input = M::Input, Output = M::Output>,
{
    fn point(&self) -> &[f64] {
        self.x()
    }
}

// --- nelder_mead::Action ---

impl CanStopEarly for nelder_mead::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanAssumeWorse for nelder_mead::Action {
    fn assume_worse() -> Self {
        Self::AssumeWorse
    }
}

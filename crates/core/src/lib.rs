//! Core traits and types for mixfit.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! model-fitting pipelines build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output, such as
//!   a profiled deviance pipeline producing fitted coefficients
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OptimizationProblem`] — adapts solver variables to model inputs and
//!   extracts the scalar objective from model outputs

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::OptimizationProblem;
pub use {model::Model, model::Snapshot};

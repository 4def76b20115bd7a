//! Reusable observers for mixfit solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any solver whose event and action types implement them.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasPoint`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`LogObserver`] — logs every evaluation through the `log` facade
//! - [`StopBelow`] — stops once an evaluation reaches a target objective
//! - [`RecoverFailures`] — ranks failed or NaN evaluations worst instead of aborting
//!
//! [`Observer`]: mixfit_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasPoint`]: traits::HasPoint
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

mod guards;
mod logging;
pub mod traits;

#[cfg(test)]
mod test_support;

pub use guards::{RecoverFailures, StopBelow};
pub use logging::LogObserver;

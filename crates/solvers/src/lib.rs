//! Numerical solvers for mixfit.
//!
//! - [`optimization`] — minimizers for scalar objectives such as the profiled
//!   deviance or REML criterion of a mixed model

pub mod optimization;

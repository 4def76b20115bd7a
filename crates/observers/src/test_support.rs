use std::convert::Infallible;

use thiserror::Error;

use mixfit_core::{Model, OptimizationProblem};

#[derive(Debug, Error)]
#[error("factorization is singular")]
pub(crate) struct Singular;

/// f(x) = (x₀ - 0.5)², failing for negative x₀.
pub(crate) struct Flaky;

impl Model for Flaky {
    type Input = Vec<f64>;
    type Output = f64;
    type Error = Singular;

    fn call(&self, x: &Vec<f64>) -> Result<f64, Self::Error> {
        if x[0] < 0.0 {
            return Err(Singular);
        }
        Ok((x[0] - 0.5).powi(2))
    }
}

impl OptimizationProblem for Flaky {
    type Input = Vec<f64>;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64]) -> Result<Vec<f64>, Self::Error> {
        Ok(x.to_vec())
    }

    fn objective(&self, _input: &Vec<f64>, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

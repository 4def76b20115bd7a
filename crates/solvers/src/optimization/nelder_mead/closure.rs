use std::convert::Infallible;

use mixfit_core::{Model, OptimizationProblem};

/// Adapts a plain objective function into a model and problem pair.
///
/// The model input is the point itself and the output is the objective
/// value, so the solution snapshot carries both.
///
/// ```
/// use mixfit_core::Model;
/// use mixfit_solvers::optimization::nelder_mead::FnObjective;
///
/// let objective = FnObjective(|x: &[f64]| x[0] * x[0]);
/// assert_eq!(objective.call(&vec![3.0]).unwrap(), 9.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnObjective<F>(pub F);

impl<F> Model for FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    type Input = Vec<f64>;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Vec<f64>) -> Result<f64, Self::Error> {
        Ok((self.0)(input))
    }
}

impl<F> OptimizationProblem for FnObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
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

/// Defines an optimization problem to be solved.
///
/// An optimization problem maps solver variables to a model input, then
/// computes an objective value from the model input and output. The number
/// of solver variables is fixed by the solver's start point, so `x` is a
/// slice rather than a fixed-size array.
///
/// For covariance-parameter fitting, `x` is the vector θ, the input is
/// whatever the deviance pipeline consumes, and the objective is the profiled
/// deviance or REML criterion read from the model output.
pub trait OptimizationProblem {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64]) -> Result<Self::Input, Self::Error>;

    /// Computes an objective value from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("expected {expected} parameters, got {actual}")]
    struct WrongLength {
        expected: usize,
        actual: usize,
    }

    /// Unpacks a lower-triangular 2x2 relative covariance factor.
    struct Cholesky2;

    impl OptimizationProblem for Cholesky2 {
        type Input = [[f64; 2]; 2];
        type Output = f64;
        type Error = WrongLength;

        fn input(&self, x: &[f64]) -> Result<Self::Input, Self::Error> {
            match x {
                [a, b, c] => Ok([[*a, 0.0], [*b, *c]]),
                _ => Err(WrongLength {
                    expected: 3,
                    actual: x.len(),
                }),
            }
        }

        fn objective(&self, _input: &Self::Input, output: &f64) -> Result<f64, Self::Error> {
            Ok(*output)
        }
    }

    #[test]
    fn input_maps_parameters() {
        let lambda = Cholesky2.input(&[1.0, 0.5, 2.0]).unwrap();
        assert_relative_eq!(lambda[1][0], 0.5);
        assert_relative_eq!(lambda[0][1], 0.0);
    }

    #[test]
    fn input_rejects_wrong_length() {
        let err = Cholesky2.input(&[1.0]).unwrap_err();
        assert_eq!(err.to_string(), "expected 3 parameters, got 1");
    }
}

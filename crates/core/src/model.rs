/// A callable model that maps an input to an output.
///
/// In a fitting pipeline the input is usually a candidate covariance
/// parameter vector and the output carries everything derived from it:
/// the criterion value along with byproducts like fixed-effect estimates.
/// Solvers treat the model as opaque.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
///
/// Solvers return the snapshot of the point they report, so byproducts are
/// always read at the optimum rather than at the last evaluated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// Sum of squared distances from a fixed centre.
    struct Distance {
        centre: Vec<f64>,
    }

    impl Model for Distance {
        type Input = Vec<f64>;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &Vec<f64>) -> Result<f64, Self::Error> {
            Ok(x.iter().zip(&self.centre).map(|(a, c)| (a - c).powi(2)).sum())
        }
    }

    #[test]
    fn snapshot_keeps_input_and_output() {
        let model = Distance {
            centre: vec![1.0, 2.0],
        };
        let input = vec![2.0, 4.0];
        let output = model.call(&input).unwrap();

        let snapshot = Snapshot::new(input, output);

        assert_eq!(snapshot.input, vec![2.0, 4.0]);
        assert_relative_eq!(snapshot.output, 5.0);
    }
}

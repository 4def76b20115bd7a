use thiserror::Error;

/// Default convergence threshold.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Default iteration limit.
pub const DEFAULT_MAX_ITERS: usize = 1_000_000;

/// Configuration for the Nelder–Mead solver.
///
/// `epsilon` sets both convergence thresholds: every simplex vertex must
/// change its objective by at most `epsilon` in absolute terms and by at
/// most `100 * epsilon` relative to its magnitude between two iterations.
///
/// The optional start steps shape the initial simplex. Vertex `i + 1` is the
/// start point shifted by `steps[0..=i]` in the first `i + 1` coordinates.
/// Without steps, every step is `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
    steps: Option<Vec<f64>>,
}

/// Errors that can occur when validating a Nelder–Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("start steps must be finite")]
    Steps,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            epsilon: DEFAULT_EPSILON,
            steps: None,
        }
    }
}

impl Config {
    /// Creates a new config with a validated convergence threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite or not positive.
    pub fn new(max_iters: usize, epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self {
            max_iters,
            epsilon,
            steps: None,
        })
    }

    /// Sets the relative steps used to build the initial simplex.
    ///
    /// A zero step is accepted here but makes the initial simplex degenerate,
    /// which the solver reports when the search starts.
    ///
    /// # Errors
    ///
    /// Returns an error if any step is not finite.
    pub fn with_steps(mut self, steps: Vec<f64>) -> Result<Self, ConfigError> {
        if steps.iter().any(|step| !step.is_finite()) {
            return Err(ConfigError::Steps);
        }
        self.steps = Some(steps);
        Ok(self)
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence threshold.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the start steps, if set.
    #[must_use]
    pub fn steps(&self) -> Option<&[f64]> {
        self.steps.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();

        assert_eq!(config.max_iters(), 1_000_000);
        assert_eq!(config.epsilon(), 1e-6);
        assert_eq!(config.steps(), None);
    }

    #[test]
    fn epsilon_must_be_positive_and_finite() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(10, -1e-3), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::Epsilon));
        assert!(Config::new(0, 1e-10).is_ok());
    }

    #[test]
    fn steps_must_be_finite() {
        let config = Config::default();

        assert_eq!(
            config.clone().with_steps(vec![1.0, f64::NAN]),
            Err(ConfigError::Steps)
        );

        let config = config.with_steps(vec![0.5, 0.0]).unwrap();
        assert_eq!(config.steps(), Some(&[0.5, 0.0][..]));
    }
}

use thiserror::Error;

/// Optional per-coordinate box constraints.
///
/// A missing side means that side is unbounded (`-∞` for lower, `+∞` for
/// upper) in every coordinate. Lengths are checked against the start point
/// when a search begins.
///
/// ```
/// use mixfit_solvers::optimization::nelder_mead::Bounds;
///
/// // Variance components must stay non-negative, the correlation term is free.
/// let bounds = Bounds::unbounded().with_lower(vec![0.0, f64::NEG_INFINITY, 0.0]);
/// assert_eq!(bounds.lower(), Some(&[0.0, f64::NEG_INFINITY, 0.0][..]));
/// assert_eq!(bounds.upper(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bounds {
    lower: Option<Vec<f64>>,
    upper: Option<Vec<f64>>,
}

/// Errors from resolving [`Bounds`] against a start point.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoundsError {
    #[error("lower bound has {actual} coordinates but the start point has {expected}")]
    LowerLength { expected: usize, actual: usize },

    #[error("upper bound has {actual} coordinates but the start point has {expected}")]
    UpperLength { expected: usize, actual: usize },

    #[error("lower bound {lower} is not below upper bound {upper} at coordinate {index}")]
    Crossed { index: usize, lower: f64, upper: f64 },
}

impl Bounds {
    /// Creates bounds with neither side constrained.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Creates bounds from optional lower and upper vectors.
    #[must_use]
    pub fn new(lower: Option<Vec<f64>>, upper: Option<Vec<f64>>) -> Self {
        Self { lower, upper }
    }

    /// Sets the lower bound.
    #[must_use]
    pub fn with_lower(mut self, lower: Vec<f64>) -> Self {
        self.lower = Some(lower);
        self
    }

    /// Sets the upper bound.
    #[must_use]
    pub fn with_upper(mut self, upper: Vec<f64>) -> Self {
        self.upper = Some(upper);
        self
    }

    /// Returns the lower bound, if set.
    #[must_use]
    pub fn lower(&self) -> Option<&[f64]> {
        self.lower.as_deref()
    }

    /// Returns the upper bound, if set.
    #[must_use]
    pub fn upper(&self) -> Option<&[f64]> {
        self.upper.as_deref()
    }

    /// Resolves the bounds into a concrete box for an `n`-dimensional search.
    pub(super) fn resolve(&self, n: usize) -> Result<Region, BoundsError> {
        let lower = match &self.lower {
            Some(lower) if lower.len() != n => {
                return Err(BoundsError::LowerLength {
                    expected: n,
                    actual: lower.len(),
                });
            }
            Some(lower) => lower.clone(),
            None => vec![f64::NEG_INFINITY; n],
        };
        let upper = match &self.upper {
            Some(upper) if upper.len() != n => {
                return Err(BoundsError::UpperLength {
                    expected: n,
                    actual: upper.len(),
                });
            }
            Some(upper) => upper.clone(),
            None => vec![f64::INFINITY; n],
        };

        for (index, (&lo, &hi)) in lower.iter().zip(&upper).enumerate() {
            // Negated so NaN bounds are rejected too.
            if !(lo < hi) {
                return Err(BoundsError::Crossed {
                    index,
                    lower: lo,
                    upper: hi,
                });
            }
        }

        Ok(Region { lower, upper })
    }
}

/// Validated box constraints with one interval per coordinate.
#[derive(Debug, Clone)]
pub(super) struct Region {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Region {
    /// Moves `x` into the box, coordinate by coordinate.
    pub(super) fn clamp(&self, x: &mut [f64]) {
        for ((xi, &lo), &hi) in x.iter_mut().zip(&self.lower).zip(&self.upper) {
            *xi = xi.clamp(lo, hi);
        }
    }

    #[cfg(test)]
    pub(super) fn contains(&self, x: &[f64]) -> bool {
        x.iter()
            .zip(self.lower.iter().zip(&self.upper))
            .all(|(xi, (lo, hi))| lo <= xi && xi <= hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn unbounded_resolves_to_infinite_box() {
        let region = Bounds::unbounded().resolve(2).unwrap();

        let mut x = vec![-1e300, 1e300];
        region.clamp(&mut x);

        assert_relative_eq!(x[0], -1e300);
        assert_relative_eq!(x[1], 1e300);
    }

    #[test]
    fn clamp_moves_point_onto_nearest_face() {
        let region = Bounds::unbounded()
            .with_lower(vec![0.0, f64::NEG_INFINITY, 0.0])
            .with_upper(vec![1.0, 2.0, f64::INFINITY])
            .resolve(3)
            .unwrap();

        let mut x = vec![-0.5, 3.0, 7.0];
        region.clamp(&mut x);

        assert_eq!(x, vec![0.0, 2.0, 7.0]);
        assert!(region.contains(&x));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let lower = Bounds::unbounded().with_lower(vec![0.0]).resolve(2);
        assert_eq!(
            lower.unwrap_err(),
            BoundsError::LowerLength {
                expected: 2,
                actual: 1
            }
        );

        let upper = Bounds::unbounded().with_upper(vec![0.0; 3]).resolve(2);
        assert_eq!(
            upper.unwrap_err(),
            BoundsError::UpperLength {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn equal_or_crossed_bounds_are_rejected() {
        let equal = Bounds::new(Some(vec![0.0, 1.0]), Some(vec![1.0, 1.0])).resolve(2);
        assert!(matches!(
            equal,
            Err(BoundsError::Crossed { index: 1, .. })
        ));

        let crossed = Bounds::new(Some(vec![2.0]), Some(vec![1.0])).resolve(1);
        assert!(matches!(
            crossed,
            Err(BoundsError::Crossed { index: 0, .. })
        ));
    }

    #[test]
    fn nan_bound_is_rejected() {
        let result = Bounds::unbounded().with_lower(vec![f64::NAN]).resolve(1);
        assert!(matches!(result, Err(BoundsError::Crossed { .. })));
    }
}

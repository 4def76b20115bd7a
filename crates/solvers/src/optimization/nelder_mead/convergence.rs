/// Relative threshold as a multiple of `epsilon`.
const RELATIVE_FACTOR: f64 = 100.0;

/// Returns true if every vertex objective changed by a negligible amount.
///
/// Vertex `i` passes when `|prev - curr|` is at most `epsilon` and at most
/// `100 * epsilon * max(|prev|, |curr|)`. The whole simplex must pass, not
/// just the best vertex.
pub(super) fn is_converged(previous: &[f64], current: &[f64], epsilon: f64) -> bool {
    debug_assert_eq!(previous.len(), current.len());

    let relative = RELATIVE_FACTOR * epsilon;
    previous
        .iter()
        .zip(current)
        .all(|(&prev, &curr)| vertex_converged(prev, curr, relative, epsilon))
}

fn vertex_converged(prev: f64, curr: f64, relative: f64, absolute: f64) -> bool {
    let diff = (prev - curr).abs();
    let size = prev.abs().max(curr.abs());
    diff <= size * relative && diff <= absolute
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_values_converge() {
        assert!(is_converged(&[1.0, 2.0, 0.0], &[1.0, 2.0, 0.0], 1e-6));
    }

    #[test]
    fn every_vertex_must_converge() {
        // Best vertex unchanged, worst still moving.
        assert!(!is_converged(&[1.0, 2.0, 3.0], &[1.0, 2.0, 2.5], 1e-6));
    }

    #[test]
    fn absolute_threshold_applies_to_large_values() {
        // Relative change 1e-7 passes 1e-4, absolute change 1e-1 fails 1e-6.
        assert!(!is_converged(&[1e6], &[1e6 + 0.1], 1e-6));
    }

    #[test]
    fn relative_threshold_applies_to_small_values() {
        // Absolute change 1e-9 passes 1e-6, relative change 0.5 fails 1e-4.
        assert!(!is_converged(&[1e-9], &[2e-9], 1e-6));
        assert!(is_converged(&[1e-9], &[1e-9 + 1e-15], 1e-6));
    }

    #[test]
    fn infinite_values_never_converge() {
        assert!(!is_converged(&[f64::INFINITY], &[f64::INFINITY], 1e-6));
    }
}

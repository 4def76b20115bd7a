use std::cmp::Ordering;

use mixfit_core::Snapshot;

/// An evaluated simplex vertex.
///
/// `score` is the objective after the search direction transform, so the
/// solver always minimizes it. Points still waiting for evaluation are never
/// vertices; they are plain coordinate vectors until evaluated.
#[derive(Debug, Clone)]
pub(super) struct Vertex<I, O> {
    pub(super) x: Vec<f64>,
    pub(super) objective: f64,
    pub(super) score: f64,
    pub(super) snapshot: Option<Snapshot<I, O>>,
}

impl<I, O> Vertex<I, O> {
    /// Creates a vertex from a successful evaluation.
    pub(super) fn evaluated(
        x: Vec<f64>,
        objective: f64,
        score: f64,
        snapshot: Snapshot<I, O>,
    ) -> Self {
        Self {
            x,
            objective,
            score,
            snapshot: Some(snapshot),
        }
    }

    /// Creates a vertex that ranks behind every finite evaluation.
    ///
    /// `objective` is the untransformed value reported for this vertex.
    pub(super) fn assumed_worse(x: Vec<f64>, objective: f64) -> Self {
        Self {
            x,
            objective,
            score: f64::INFINITY,
            snapshot: None,
        }
    }
}

/// Three-way comparison by score alone.
///
/// Equal scores compare equal regardless of position. Scores are never NaN,
/// since a NaN objective either aborts the search or becomes `+∞`.
pub(super) fn compare<I, O>(a: &Vertex<I, O>, b: &Vertex<I, O>) -> Ordering {
    a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f64, score: f64) -> Vertex<(), ()> {
        Vertex::evaluated(vec![x], score, score, Snapshot::new((), ()))
    }

    #[test]
    fn compares_by_score_only() {
        assert_eq!(compare(&vertex(0.0, 1.0), &vertex(9.0, 2.0)), Ordering::Less);
        assert_eq!(compare(&vertex(0.0, 3.0), &vertex(9.0, 2.0)), Ordering::Greater);
        assert_eq!(compare(&vertex(0.0, 2.0), &vertex(9.0, 2.0)), Ordering::Equal);
        assert_eq!(compare(&vertex(0.0, -0.0), &vertex(9.0, 0.0)), Ordering::Equal);
    }

    #[test]
    fn assumed_worse_ranks_last() {
        let worse = Vertex::<(), ()>::assumed_worse(vec![1.0], f64::INFINITY);
        assert_eq!(compare(&vertex(0.0, 1e300), &worse), Ordering::Less);
        assert!(worse.snapshot.is_none());
    }
}

use super::vertex::{Vertex, compare};

/// The `n + 1` vertices of an `n`-dimensional search, best first.
#[derive(Debug, Clone)]
pub(super) struct Simplex<I, O> {
    vertices: Vec<Vertex<I, O>>,
}

impl<I, O> Simplex<I, O> {
    /// Builds a simplex from freshly evaluated vertices.
    ///
    /// The sort is stable, so tied vertices keep their evaluation order.
    pub(super) fn from_vertices(mut vertices: Vec<Vertex<I, O>>) -> Self {
        debug_assert!(vertices.len() >= 2, "a simplex needs at least two vertices");
        vertices.sort_by(compare);
        Self { vertices }
    }

    /// Returns the dimension `n` of the search space.
    pub(super) fn dim(&self) -> usize {
        self.vertices.len() - 1
    }

    pub(super) fn best(&self) -> &Vertex<I, O> {
        &self.vertices[0]
    }

    pub(super) fn second_worst(&self) -> &Vertex<I, O> {
        &self.vertices[self.dim() - 1]
    }

    pub(super) fn worst(&self) -> &Vertex<I, O> {
        &self.vertices[self.dim()]
    }

    /// Returns the objective of every vertex, best first.
    pub(super) fn objectives(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.objective).collect()
    }

    /// Returns the mean of every vertex except the worst.
    pub(super) fn centroid(&self) -> Vec<f64> {
        let n = self.dim();
        let mut centroid = vec![0.0; n];
        for vertex in &self.vertices[..n] {
            for (c, x) in centroid.iter_mut().zip(&vertex.x) {
                *c += x;
            }
        }
        let scaling = 1.0 / n as f64;
        for c in &mut centroid {
            *c *= scaling;
        }
        centroid
    }

    /// Replaces the worst vertex, keeping the simplex sorted.
    ///
    /// Walks from the best vertex toward the worst, swapping the carried
    /// vertex with any occupant that compares strictly worse. A new vertex
    /// tied with an existing one lands after it.
    pub(super) fn replace_worst(&mut self, mut vertex: Vertex<I, O>) {
        let n = self.dim();
        for slot in &mut self.vertices[..n] {
            if compare(slot, &vertex).is_gt() {
                std::mem::swap(slot, &mut vertex);
            }
        }
        self.vertices[n] = vertex;
    }

    /// Returns every vertex moved toward the best by `sigma`, best included.
    pub(super) fn shrunk_points(&self, sigma: f64) -> Vec<Vec<f64>> {
        let best = &self.best().x;
        self.vertices
            .iter()
            .map(|vertex| {
                best.iter()
                    .zip(&vertex.x)
                    .map(|(b, x)| b + sigma * (x - b))
                    .collect()
            })
            .collect()
    }

    /// Consumes the simplex and returns its best vertex.
    pub(super) fn into_best(mut self) -> Vertex<I, O> {
        self.vertices.swap_remove(0)
    }

    #[cfg(test)]
    pub(super) fn vertices(&self) -> &[Vertex<I, O>] {
        &self.vertices
    }
}

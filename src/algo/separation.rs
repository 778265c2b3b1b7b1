/*!
Breadth-first path search and the *separation count* derived from it.

In a participant/collection graph every walk alternates between the two roles, so the
path `a1 - c - a2` between two participants sharing a collection has three vertices and
separation `0`; every further collection adds two vertices and one degree:

```text
separation = (vertices_on_path - 3) / 2
```

The frontier of the search holds complete paths rather than single vertices, so the first
path that reaches the destination is available without a parent array.
*/

use std::collections::VecDeque;

use log::debug;
use smallvec::SmallVec;

use super::*;

/// A walk through the store given by vertex positions. Never repeats a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(SmallVec<[VertexIndex; 16]>);

impl Path {
    /// A path consisting only of `u`
    pub fn start(u: VertexIndex) -> Self {
        let mut inner = SmallVec::new();
        inner.push(u);
        Self(inner)
    }

    /// Copy of this path with `v` appended
    fn extended(&self, v: VertexIndex) -> Self {
        let mut inner = SmallVec::with_capacity(self.0.len() + 1);
        inner.extend_from_slice(&self.0);
        inner.push(v);
        Self(inner)
    }

    /// Last position on the path
    pub fn last(&self) -> VertexIndex {
        // A path is never empty: it is created by `start` and only grows
        self.0[self.0.len() - 1]
    }

    /// Number of vertices on the path
    pub fn number_of_vertices(&self) -> usize {
        self.0.len()
    }

    /// Number of arcs on the path
    pub fn number_of_arcs(&self) -> usize {
        self.0.len() - 1
    }

    /// Positions along the path, starting at the source
    pub fn as_slice(&self) -> &[VertexIndex] {
        &self.0
    }

    /// Number of intermediate collections between the two participant endpoints.
    ///
    /// A single-vertex path (source equals destination) has separation `0` rather than
    /// `(1 - 3) / 2 = -1`: the count is clamped at zero, so a participant compared with
    /// itself reads the same as two participants sharing a collection. Callers that need
    /// to tell these apart compare the endpoints first.
    /// An even number of vertices means the endpoints have different roles or the
    /// graph contains participant-participant links; this is reported as
    /// [`GraphError::InvariantViolation`].
    pub fn separation(&self) -> Result<u32> {
        let n = self.number_of_vertices();
        if n % 2 == 0 {
            return Err(GraphError::InvariantViolation(format!(
                "path {:?} has an even number of vertices ({n})",
                self.as_slice()
            )));
        }
        Ok((n.saturating_sub(3) / 2) as u32)
    }
}

/// BFS whose queue holds whole paths.
///
/// A vertex is marked visited when a path to it is *enqueued*, so each vertex is
/// reached by exactly one path, and that path is a shortest one in arc count.
pub struct PathSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: Vec<bool>,
    queue: VecDeque<Path>,
}

impl<'a, G> PathSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new search starting at position `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: VertexIndex) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[start as usize] = true;
        Self {
            graph,
            visited,
            queue: VecDeque::from([Path::start(start)]),
        }
    }

    /// Runs the search until a path ending in `target` is enqueued and returns it.
    /// Neighbors are expanded in adjacency-list order.
    /// Returns `None` once the queue runs dry without reaching `target`.
    pub fn find_path_to(mut self, target: VertexIndex) -> Option<Path> {
        if let Some(path) = self.queue.front() {
            if path.last() == target {
                return Some(path.clone());
            }
        }

        while let Some(path) = self.queue.pop_front() {
            for v in self.graph.neighbor_positions_of(path.last()) {
                if self.visited[v as usize] {
                    continue;
                }
                self.visited[v as usize] = true;

                let extended = path.extended(v);
                if v == target {
                    return Some(extended);
                }
                self.queue.push_back(extended);
            }
        }

        None
    }
}

/// Separation queries as methods on any adjacency store.
pub trait SeparationSearch: AdjacencyList {
    /// Computes a shortest path (by arc count) from `from` to `to` as store positions.
    ///
    /// # Errors
    /// - [`GraphError::NotFound`] if either label is absent (the first missing one is named),
    /// - [`GraphError::NotConnected`] if both exist but `to` is unreachable.
    fn shortest_path(&self, from: &Self::Vertex, to: &Self::Vertex) -> Result<Path> {
        let source = self.try_position_of(from)?;
        let target = self.try_position_of(to)?;

        let path = PathSearch::new(self, source)
            .find_path_to(target)
            .ok_or_else(|| GraphError::not_connected(from, to))?;

        debug!(
            "shortest path {from:?} -> {to:?} has {} vertices",
            path.number_of_vertices()
        );
        Ok(path)
    }

    /// Like [`SeparationSearch::shortest_path`] but returns the labels along the path.
    fn shortest_path_labels(
        &self,
        from: &Self::Vertex,
        to: &Self::Vertex,
    ) -> Result<Vec<Self::Vertex>> {
        let path = self.shortest_path(from, to)?;
        path.as_slice()
            .iter()
            .map(|&u| {
                self.label_at(u).cloned().ok_or_else(|| {
                    GraphError::InvariantViolation(format!("position {u} outside the store"))
                })
            })
            .collect()
    }

    /// Degrees of separation between two participants: the number of collections on a
    /// shortest path minus one.
    ///
    /// # Example
    /// ```
    /// use castgraph::{prelude::*, algo::*};
    ///
    /// let g = HashGraph::from_edges([("M1", "A1"), ("M1", "A2"), ("M2", "A2"), ("M2", "A3")]);
    /// assert_eq!(g.separation(&"A1", &"A2").unwrap(), 0);
    /// assert_eq!(g.separation(&"A1", &"A3").unwrap(), 1);
    /// ```
    fn separation(&self, a1: &Self::Vertex, a2: &Self::Vertex) -> Result<u32> {
        self.shortest_path(a1, a2)?.separation()
    }
}

impl<G> SeparationSearch for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_cast;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn small() -> HashGraph<&'static str> {
        HashGraph::from_edges([("M1", "A1"), ("M1", "A2"), ("M2", "A2"), ("M2", "A3")])
    }

    #[test]
    fn shared_collection_is_zero() {
        let g = small();
        assert_eq!(g.separation(&"A1", &"A2").unwrap(), 0);
        assert_eq!(g.separation(&"A2", &"A3").unwrap(), 0);
        assert_eq!(g.separation(&"A1", &"A3").unwrap(), 1);
        assert_eq!(
            g.shortest_path_labels(&"A1", &"A3").unwrap(),
            vec!["A1", "M1", "A2", "M2", "A3"]
        );
    }

    #[test]
    fn longer_chains() {
        // A0 - M0 - A1 - M1 - A2 - M2 - A3 - M3 - A4
        let edges = (0..4)
            .flat_map(|i| {
                [
                    (format!("M{i}"), format!("A{i}")),
                    (format!("M{i}"), format!("A{}", i + 1)),
                ]
            })
            .collect_vec();
        let g = ScanGraph::from_edges(edges);

        for k in 1..=4 {
            assert_eq!(
                g.separation(&"A0".to_string(), &format!("A{k}")).unwrap(),
                k - 1
            );
        }
    }

    #[test]
    fn same_vertex_is_zero() {
        let g = small();
        let path = g.shortest_path(&"A2", &"A2").unwrap();
        assert_eq!(path.number_of_vertices(), 1);
        assert_eq!(g.separation(&"A2", &"A2").unwrap(), 0);

        // clamped: indistinguishable from sharing a collection
        assert_eq!(Path::start(0).separation().unwrap(), 0);
        assert_eq!(
            g.separation(&"A2", &"A2").unwrap(),
            g.separation(&"A1", &"A2").unwrap()
        );
    }

    #[test]
    fn missing_and_disconnected() {
        let mut g = small();
        assert!(matches!(
            g.separation(&"A1", &"Nobody"),
            Err(GraphError::NotFound(name)) if name.contains("Nobody")
        ));
        assert!(matches!(
            g.separation(&"Nobody", &"A1"),
            Err(GraphError::NotFound(_))
        ));

        g.add_vertex("M9");
        g.add_vertex("A9");
        g.add_edge(&"M9", &"A9");
        assert!(matches!(
            g.separation(&"A1", &"A9"),
            Err(GraphError::NotConnected { .. })
        ));
    }

    #[test]
    fn mixed_roles_violate_invariant() {
        let g = small();
        let err = g.separation(&"A1", &"M2").unwrap_err();
        assert!(matches!(err, GraphError::InvariantViolation(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn first_discovered_path_follows_adjacency_order() {
        // Two shortest routes from A1 to A4; M1 is listed before M2 in A1's adjacency
        let g = HashGraph::from_edges([
            ("M1", "A1"),
            ("M2", "A1"),
            ("M1", "A2"),
            ("M2", "A3"),
            ("M3", "A2"),
            ("M3", "A3"),
            ("M3", "A4"),
        ]);
        assert_eq!(
            g.shortest_path_labels(&"A1", &"A4").unwrap(),
            vec!["A1", "M1", "A2", "M3", "A4"]
        );
    }

    #[test]
    fn path_never_repeats_vertices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let g: HashGraph<String> = HashGraph::from_edges(random_cast(rng, 15, 40, 60));

        for from in g.positions().step_by(4) {
            for to in g.positions() {
                if let Some(path) = PathSearch::new(&g, from).find_path_to(to) {
                    assert!(path.as_slice().iter().all_unique());
                    assert_eq!(path.as_slice()[0], from);
                    assert_eq!(path.last(), to);
                    for (&u, &v) in path.as_slice().iter().tuple_windows() {
                        assert!(g.has_arc_at(u, v));
                    }
                }
            }
        }
    }

    #[test]
    fn separation_is_symmetric() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..5 {
            let cast = random_cast(rng, 20, 50, 80);
            let g: ScanGraph<String> = ScanGraph::from_edges(cast.clone());
            let actors = cast.iter().map(|(_, a)| a.clone()).unique().collect_vec();

            for (a, b) in actors.iter().tuple_combinations().take(200) {
                match (g.separation(a, b), g.separation(b, a)) {
                    (Ok(x), Ok(y)) => assert_eq!(x, y),
                    (Err(GraphError::NotConnected { .. }), Err(GraphError::NotConnected { .. })) => {}
                    other => panic!("asymmetric result for {a} / {b}: {other:?}"),
                }
            }
        }
    }
}

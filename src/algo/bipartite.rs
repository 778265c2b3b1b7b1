/*!
# Role Consistency

A cast graph is only meaningful if every arc joins a participant and a collection,
i.e. if the graph is bipartite. These checks work on positions and report a side per
vertex: `false` for the side of the first vertex of each component, `true` for the other.
*/

use std::collections::VecDeque;

use super::*;

/// A side assignment per vertex position
pub type Bipartition = Vec<bool>;

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest {
    /// Tests whether the given candidate assigns different sides to the endpoints of every arc.
    /// ** Panics if `bipartition.len() < n` **
    fn is_bipartition(&self, bipartition: &[bool]) -> bool;

    /// Computes a valid bipartition of the graph, if one exists.
    /// Returns `None` if the graph is not bipartite.
    fn compute_bipartition(&self) -> Option<Bipartition>;

    /// Tests whether the graph is bipartite.
    ///
    /// # Example
    /// ```
    /// use castgraph::{prelude::*, algo::*};
    ///
    /// let mut g = HashGraph::from_edges([("M1", "A1"), ("M1", "A2")]);
    /// assert!(g.is_bipartite());
    ///
    /// g.add_edge(&"A1", &"A2");
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList,
{
    fn is_bipartition(&self, bipartition: &[bool]) -> bool {
        self.arcs()
            .all(|arc| bipartition[arc.source() as usize] != bipartition[arc.target() as usize])
    }

    fn compute_bipartition(&self) -> Option<Bipartition> {
        let bipartition = propose_possibly_illegal_bipartition(self);
        self.is_bipartition(&bipartition).then_some(bipartition)
    }
}

/// Two-colors every component by BFS depth parity.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition may be invalid
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> Bipartition
where
    G: AdjacencyList,
{
    let mut bipartition = vec![false; graph.len()];
    let mut visited = vec![false; graph.len()];
    let mut queue = VecDeque::new();

    for root in graph.positions() {
        if visited[root as usize] {
            continue;
        }
        visited[root as usize] = true;
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            for v in graph.neighbor_positions_of(u) {
                if !visited[v as usize] {
                    visited[v as usize] = true;
                    bipartition[v as usize] = !bipartition[u as usize];
                    queue.push_back(v);
                }
            }
        }
    }

    bipartition
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn path() {
        for n in 2..10u32 {
            let mut graph = ScanGraph::<u32>::new();
            graph.add_vertices(0..n);
            for u in 0..n - 1 {
                graph.add_edge(&u, &(u + 1));
            }

            assert!(graph.is_bipartite());
            let bip = graph.compute_bipartition().unwrap();
            assert!((0..n as usize).all(|u| bip[u] == (u % 2 == 1)));

            if n > 2 {
                let mut graph = graph.clone();
                graph.remove_edge(&(n / 2), &(n / 2 + 1));
                assert!(graph.is_bipartite());
            }

            if n > 2 {
                let mut graph = graph.clone();
                graph.add_edge(&(1 - (n % 2)), &(n - 1));
                assert!(!graph.is_bipartite());
            }
        }
    }

    #[test]
    fn self_loop_is_not_bipartite() {
        let mut graph = HashGraph::from_edges([("M1", "A1")]);
        assert!(graph.is_bipartite());
        graph.add_arc(&"A1", &"A1");
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn components_are_colored_independently() {
        let graph = HashGraph::from_edges([("M1", "A1"), ("M2", "A2"), ("M2", "A3")]);
        let bip = graph.compute_bipartition().unwrap();
        assert_eq!(bip, vec![false, true, false, true, true]);
    }
}

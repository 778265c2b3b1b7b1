use std::fmt::{self, Display};

use itertools::Itertools;
use log::trace;

use super::*;
use crate::testing::test_graph_ops;

/// A directed graph over arbitrary labels.
///
/// `vertices[i]` owns the adjacency list `adjacency[i]`; both sequences always have the
/// same length. Every label in an adjacency list is also a vertex.
#[derive(Debug, Clone)]
pub struct LabelledGraph<V: Label, L: VertexLookup<V> = HashedLookup<V>> {
    vertices: Vec<V>,
    adjacency: Vec<Vec<V>>,
    lookup: L,
    num_arcs: NumArcs,
}

impl<V: Label, L: VertexLookup<V>> Default for LabelledGraph<V, L> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: Vec::new(),
            lookup: L::default(),
            num_arcs: 0,
        }
    }
}

impl<V: Label, L: VertexLookup<V>> LabelledGraph<V, L> {
    #[inline]
    fn find(&self, v: &V) -> Option<usize> {
        self.lookup.find(&self.vertices, v)
    }

    /// Vertex and adjacency sequences diverging means the store is corrupted
    #[inline]
    fn assert_consistent(&self) {
        assert_eq!(
            self.vertices.len(),
            self.adjacency.len(),
            "invariant violated: vertex and adjacency sequences diverged"
        );
    }

    /// Iterates over `(label, adjacency list)` in store order
    pub fn iter_adjacency(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.vertices
            .iter()
            .zip(self.adjacency.iter().map(Vec::as_slice))
    }
}

impl<V: Label, L: VertexLookup<V>> GraphOrder for LabelledGraph<V, L> {
    type Vertex = V;

    fn number_of_vertices(&self) -> NumVertices {
        to_index(self.vertices.len())
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    fn label_at(&self, u: VertexIndex) -> Option<&V> {
        self.vertices.get(u as usize)
    }

    fn position_of(&self, v: &V) -> Option<VertexIndex> {
        self.find(v).map(to_index)
    }
}

impl<V: Label, L: VertexLookup<V>> AdjacencyList for LabelledGraph<V, L> {
    fn neighbors_of(&self, v: &V) -> Result<&[V]> {
        let pos = self.find(v).ok_or_else(|| GraphError::not_found(v))?;
        Ok(&self.adjacency[pos])
    }

    fn neighbor_positions_of(&self, u: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_ {
        // Every neighbor is a vertex, so the lookup cannot fail on a consistent store
        self.adjacency[u as usize]
            .iter()
            .filter_map(move |w| self.find(w).map(to_index))
    }

    fn number_of_arcs(&self) -> NumArcs {
        self.num_arcs
    }
}

impl<V: Label, L: VertexLookup<V>> AdjacencyTest for LabelledGraph<V, L> {
    fn is_arc(&self, u: &V, v: &V) -> bool {
        self.find(u)
            .is_some_and(|pos| self.adjacency[pos].contains(v))
    }
}

impl<V: Label, L: VertexLookup<V>> GraphNew for LabelledGraph<V, L> {
    fn new() -> Self {
        Self::default()
    }

    fn with_capacity(n: usize) -> Self {
        let mut lookup = L::default();
        lookup.reserve(n);
        Self {
            vertices: Vec::with_capacity(n),
            adjacency: Vec::with_capacity(n),
            lookup,
            num_arcs: 0,
        }
    }
}

impl<V: Label, L: VertexLookup<V>> GraphVertexEditing for LabelledGraph<V, L> {
    fn add_vertex(&mut self, v: V) -> bool {
        if self.find(&v).is_some() {
            return false;
        }

        let pos = self.vertices.len();
        self.lookup.inserted(&v, pos);
        self.vertices.push(v);
        self.adjacency.push(Vec::new());
        self.assert_consistent();
        true
    }

    fn remove_vertex(&mut self, v: &V) -> bool {
        let Some(pos) = self.find(v) else {
            return false;
        };

        // Arcs into `v`, including those without a reverse arc and self-loops
        let mut removed = 0;
        for list in self.adjacency.iter_mut() {
            let before = list.len();
            list.retain(|w| w != v);
            removed += before - list.len();
        }

        // Remaining arcs out of `v`
        removed += self.adjacency.remove(pos).len();
        let label = self.vertices.remove(pos);
        self.lookup.removed(&self.vertices, &label, pos);
        self.num_arcs -= removed as NumArcs;

        trace!("removed vertex {label:?} with {removed} incident arcs");
        self.assert_consistent();
        true
    }
}

impl<V: Label, L: VertexLookup<V>> GraphArcEditing for LabelledGraph<V, L> {
    fn add_arc(&mut self, u: &V, v: &V) -> bool {
        let Some(pu) = self.find(u) else {
            return false;
        };
        if self.find(v).is_none() || self.adjacency[pu].contains(v) {
            return false;
        }

        self.adjacency[pu].push(v.clone());
        self.num_arcs += 1;
        true
    }

    fn remove_arc(&mut self, u: &V, v: &V) -> bool {
        let Some(pu) = self.find(u) else {
            return false;
        };
        let Some(i) = self.adjacency[pu].iter().position(|w| w == v) else {
            return false;
        };

        // `remove` rather than `swap_remove`: adjacency order is observable
        self.adjacency[pu].remove(i);
        self.num_arcs -= 1;
        true
    }
}

impl<V, L> Display for LabelledGraph<V, L>
where
    V: Label + Display,
    L: VertexLookup<V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertices.is_empty() {
            return write!(f, "Graph is empty");
        }

        writeln!(f, "Vertices:")?;
        writeln!(f, "[{}]", self.vertices.iter().join(", "))?;
        writeln!(f)?;
        writeln!(f, "Arcs:")?;
        for (v, list) in self.iter_adjacency() {
            writeln!(f, "from {v}: [{}]", list.iter().join(", "))?;
        }
        Ok(())
    }
}

test_graph_ops!(test_scan_graph, ScanGraph);
test_graph_ops!(test_hash_graph, HashGraph);

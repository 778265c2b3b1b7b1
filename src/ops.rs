use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphOrder {
    /// The label type stored per vertex
    type Vertex: Label;

    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no arcs)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all labels in store order
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_;

    /// Returns the range of valid positions.
    /// In contrast to `self.vertices()`, the range does not borrow `self`.
    fn positions(&self) -> Range<VertexIndex> {
        0..self.number_of_vertices()
    }

    /// Returns the label stored at a given position
    fn label_at(&self, u: VertexIndex) -> Option<&Self::Vertex>;

    /// Returns the current position of a label, if present
    fn position_of(&self, v: &Self::Vertex) -> Option<VertexIndex>;

    /// Returns *true* if the label is a vertex of the graph
    fn contains_vertex(&self, v: &Self::Vertex) -> bool {
        self.position_of(v).is_some()
    }

    /// Resolves a label or fails with [`GraphError::NotFound`]
    fn try_position_of(&self, v: &Self::Vertex) -> Result<VertexIndex> {
        self.position_of(v).ok_or_else(|| GraphError::not_found(v))
    }
}

/// Traits pertaining getters for neighborhoods & arcs
pub trait AdjacencyList: GraphOrder + Sized {
    /// Returns the (outgoing) adjacency list of `v` in insertion order.
    /// The slice is a read-only view; change it through the editing traits only.
    fn neighbors_of(&self, v: &Self::Vertex) -> Result<&[Self::Vertex]>;

    /// Returns an iterator over the positions of the neighbors of the vertex at position `u`,
    /// in adjacency-list order.
    /// ** Panics if `u >= n` **
    fn neighbor_positions_of(&self, u: VertexIndex) -> impl Iterator<Item = VertexIndex> + '_;

    /// Returns the number of (outgoing) neighbors of `v`
    fn degree_of(&self, v: &Self::Vertex) -> Result<usize> {
        Ok(self.neighbors_of(v)?.len())
    }

    /// Returns the total number of arcs
    fn number_of_arcs(&self) -> NumArcs;

    /// Returns *true* if there is an arc between the vertices at positions `u` and `v`.
    /// ** Panics if `u >= n` **
    fn has_arc_at(&self, u: VertexIndex, v: VertexIndex) -> bool {
        self.neighbor_positions_of(u).contains(&v)
    }

    /// Returns an iterator over outgoing arcs of the vertex at position `u`
    /// ** Panics if `u >= n` **
    fn arcs_of(&self, u: VertexIndex) -> impl Iterator<Item = PosArc> + '_ {
        self.neighbor_positions_of(u).map(move |v| PosArc(u, v))
    }

    /// Returns an iterator over all arcs: sources in store order, destinations in
    /// adjacency-list order
    fn arcs(&self) -> impl Iterator<Item = PosArc> + '_ {
        self.positions().flat_map(move |u| self.arcs_of(u))
    }

    /// Returns the number of reciprocal arc pairs. A self-loop counts as one edge.
    fn number_of_edges(&self) -> NumArcs {
        self.arcs()
            .filter(|arc| {
                arc.source() <= arc.target() && self.has_arc_at(arc.target(), arc.source())
            })
            .count() as NumArcs
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphOrder {
    /// Returns *true* if the arc `(u, v)` exists. Absent endpoints simply yield *false*.
    fn is_arc(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool;

    /// Returns *true* if both `(u, v)` and `(v, u)` exist
    fn is_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        self.is_arc(u, v) && self.is_arc(v, u)
    }

    /// Returns *true* if a self-loop `(u, u)` exists.
    fn has_self_loop(&self, u: &Self::Vertex) -> bool {
        self.is_arc(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph
    fn new() -> Self;

    /// Creates an empty graph with space reserved for `n` vertices
    fn with_capacity(n: usize) -> Self;
}

/// Provides functions to insert/delete vertices.
///
/// All functions are no-ops if there is nothing to do; the return value reports
/// whether the graph changed.
pub trait GraphVertexEditing: GraphOrder {
    /// Adds `v` unless an equal label is already present.
    fn add_vertex(&mut self, v: Self::Vertex) -> bool;

    /// Adds all labels in the collection
    fn add_vertices(&mut self, vertices: impl IntoIterator<Item = Self::Vertex>) {
        for v in vertices {
            self.add_vertex(v);
        }
    }

    /// Removes `v` together with every arc into or out of it.
    fn remove_vertex(&mut self, v: &Self::Vertex) -> bool;
}

/// Provides functions to insert/delete arcs and edges.
///
/// Like [`GraphVertexEditing`], everything here is a no-op when preconditions
/// fail, so composite operations can never be left half-applied.
pub trait GraphArcEditing: GraphOrder {
    /// Adds the arc `(u, v)` if both endpoints exist and the arc does not.
    fn add_arc(&mut self, u: &Self::Vertex, v: &Self::Vertex) -> bool;

    /// Removes the arc `(u, v)` if it exists.
    fn remove_arc(&mut self, u: &Self::Vertex, v: &Self::Vertex) -> bool;

    /// Adds both `(u, v)` and `(v, u)`. Returns *true* if any of them was new.
    fn add_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        let forward = self.add_arc(u, v);
        let backward = self.add_arc(v, u);
        forward || backward
    }

    /// Removes both `(u, v)` and `(v, u)`. Returns *true* if any of them existed.
    fn remove_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex) -> bool {
        let forward = self.remove_arc(u, v);
        let backward = self.remove_arc(v, u);
        forward || backward
    }
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch: GraphOrder {
    /// Creates a graph from label pairs; endpoints are added as vertices on first sight
    /// and every pair becomes an edge.
    fn from_edges(edges: impl IntoIterator<Item = (Self::Vertex, Self::Vertex)>) -> Self;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphVertexEditing + GraphArcEditing,
{
    fn from_edges(edges: impl IntoIterator<Item = (Self::Vertex, Self::Vertex)>) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_vertex(u.clone());
            graph.add_vertex(v.clone());
            graph.add_edge(&u, &v);
        }
        graph
    }
}

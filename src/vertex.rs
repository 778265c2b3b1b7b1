/*!
# Vertex Representation

Vertices are addressed by their *label*, an arbitrary value with equality. The store keeps
labels in insertion order, so every label also has a *position* (`VertexIndex`) in `0..n`.
Positions are a read-only view: they shift when a vertex is removed and must not be cached
across mutations.

We choose `VertexIndex = u32` as cast lists rarely exceed `2^32` entries.
*/

use std::{fmt::Debug, hash::Hash};

/// Bound for everything that can be stored as a vertex.
///
/// Identity is value equality. `Hash` is only required so that the same label type
/// works with every [`VertexLookup`](crate::repr::VertexLookup) strategy.
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T> Label for T where T: Clone + Eq + Hash + Debug {}

/// Position of a vertex in the store: any unsigned integer from `0` to `VertexIndex::MAX - 1`
pub type VertexIndex = u32;

/// Position-Value that is considered invalid
pub const INVALID_INDEX: VertexIndex = VertexIndex::MAX;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumVertices = VertexIndex;

/// Converts a `usize` position into a [`VertexIndex`].
/// ** Panics if the position does not fit **
#[inline]
pub(crate) fn to_index(pos: usize) -> VertexIndex {
    assert!(pos < INVALID_INDEX as usize, "vertex position {pos} out of range");
    pos as VertexIndex
}

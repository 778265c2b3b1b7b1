use fxhash::FxHashMap;

use super::*;

/// Strategy for resolving a label to its position in the ordered vertex sequence.
///
/// The vertex sequence itself is owned by the graph; a lookup only answers
/// "where is `v`?" and is told about every insertion and removal so it can stay
/// in sync. It never decides iteration order.
pub trait VertexLookup<V>: Clone + Default {
    /// Returns the position of `v` in `vertices`
    fn find(&self, vertices: &[V], v: &V) -> Option<usize>;

    /// Called after `v` was appended at position `pos`
    fn inserted(&mut self, v: &V, pos: usize);

    /// Called after `v` was removed from position `pos`; `vertices` is the shifted sequence
    fn removed(&mut self, vertices: &[V], v: &V, pos: usize);

    /// Reserves space for `additional` labels
    fn reserve(&mut self, _additional: usize) {}
}

/// Sequential equality scan over the vertex sequence.
///
/// Lookups cost `O(n)`, so building a graph of `n` vertices costs `O(n^2)`.
/// This is the ceiling for large inputs; use [`HashedLookup`] beyond a few thousand vertices.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearLookup;

impl<V: Label> VertexLookup<V> for LinearLookup {
    #[inline]
    fn find(&self, vertices: &[V], v: &V) -> Option<usize> {
        vertices.iter().position(|w| w == v)
    }

    fn inserted(&mut self, _v: &V, _pos: usize) {}

    fn removed(&mut self, _vertices: &[V], _v: &V, _pos: usize) {}
}

/// Hash index from label to position kept next to the vertex sequence.
///
/// Lookups are `O(1)` expected; removing a vertex costs `O(n)` since every later
/// position shifts down by one.
#[derive(Debug, Clone)]
pub struct HashedLookup<V> {
    positions: FxHashMap<V, usize>,
}

impl<V> Default for HashedLookup<V> {
    fn default() -> Self {
        Self {
            positions: FxHashMap::default(),
        }
    }
}

impl<V: Label> VertexLookup<V> for HashedLookup<V> {
    #[inline]
    fn find(&self, _vertices: &[V], v: &V) -> Option<usize> {
        self.positions.get(v).copied()
    }

    fn inserted(&mut self, v: &V, pos: usize) {
        self.positions.insert(v.clone(), pos);
    }

    fn removed(&mut self, vertices: &[V], v: &V, pos: usize) {
        self.positions.remove(v);
        for w in &vertices[pos..] {
            if let Some(p) = self.positions.get_mut(w) {
                *p -= 1;
            }
        }
    }

    fn reserve(&mut self, additional: usize) {
        self.positions.reserve(additional);
    }
}

/*!
# Graph Store

The store owns an ordered vertex sequence and, index for index, one adjacency list per
vertex. Adjacency lists hold labels (not positions), so removing a vertex never
invalidates the lists of other vertices.

How a label is resolved to its position is pluggable (see [`VertexLookup`]):

- [`ScanGraph`] resolves by sequential search,
- [`HashGraph`] keeps an additional hash index.

Both iterate and serialize in insertion order.
*/

use crate::{ops::*, *};

mod labelled;
mod lookup;

pub use labelled::*;
pub use lookup::*;

/// Store resolving labels by linear scan
pub type ScanGraph<V> = LabelledGraph<V, LinearLookup>;

/// Store resolving labels through a hash index
pub type HashGraph<V> = LabelledGraph<V, HashedLookup<V>>;

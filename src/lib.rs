/*!
`castgraph` stores *participants* (e.g. actors) and *collections* (e.g. movies) as the two
sides of a bipartite graph and answers two kinds of questions about it:
- **Separation**: how many collections lie between two participants on a shortest path,
- **Diversity**: which collections have a subgroup share of at least a given threshold.

# Representation

Vertices are identified by their *label*, an arbitrary value with equality (see
[`Label`]). The store keeps labels in insertion order, so every label also has a
*position* in `0..n` of type [`VertexIndex`]. Positions are what algorithms work on and
what exchange formats number; they shift when a vertex is removed.
Arcs between positions are represented by the tuple-struct [`PosArc`]. An edge is a pair
of reciprocal arcs.

### Available Representations

See the [`repr`] module:

- [`ScanGraph`](crate::repr::ScanGraph) resolves labels by sequential search,
- [`HashGraph`](crate::repr::HashGraph) keeps a hash index next to the ordered labels.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, arcs, errors, basic graph operations, and all representations,
- [`algo`] includes algorithm traits implemented on graphs itself such as `graph.separation(&a, &b)` or `graph.is_bipartite()`,
- [`io`] includes readers for cast lists and readers/writers for TGF,
- [`cast_graph`] combines a store with per-collection membership counters.

In most use-cases, `use castgraph::{prelude::*, algo::*};` suffices for your needs.

# Logging

The library logs through the [`log`](https://crates.io/crates/log) facade; the
`castgraph` binary installs `env_logger`, so `RUST_LOG=debug castgraph ...` shows
per-query details.
*/

pub mod algo;
pub mod arc;
pub mod cast_graph;
pub mod error;
pub mod io;
pub mod membership;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod vertex;

pub use arc::*;
pub use cast_graph::CastGraph;
pub use error::*;
pub use vertex::*;

/// `castgraph::prelude` includes definitions for vertices, arcs and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{arc::*, error::*, ops::*, repr::*, vertex::*};
}

/*!
# Graph Algorithms

Algorithms built on top of the store traits in [`ops`](crate::ops). Everything is
re-exported here, so
```rust
use castgraph::algo::*;
```
gives access to separation queries and role checks as methods on any store.
*/

mod bipartite;
mod separation;

use crate::{prelude::*, *};

pub use bipartite::*;
pub use separation::*;

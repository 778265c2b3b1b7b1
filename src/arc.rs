use std::fmt::{Debug, Display};

use crate::vertex::VertexIndex;

/// A directed arc between two vertex positions.
///
/// Arcs are what the store iterates and serializes; an (undirected) edge is the
/// conjunction of `PosArc(u, v)` and `PosArc(v, u)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PosArc(pub VertexIndex, pub VertexIndex);

/// We limit the number of arcs to `2^32 - 1`.
pub type NumArcs = u32;

impl Display for PosArc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}->{})", self.0, self.1)
    }
}

impl Debug for PosArc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl PosArc {
    /// Source position
    pub fn source(&self) -> VertexIndex {
        self.0
    }

    /// Destination position
    pub fn target(&self) -> VertexIndex {
        self.1
    }

    /// Both endpoints shifted to the 1-based numbering used by exchange formats
    pub fn one_based(&self) -> (u64, u64) {
        (self.0 as u64 + 1, self.1 as u64 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_display() {
        let arc = PosArc(2, 5);
        assert_eq!((arc.source(), arc.target()), (2, 5));
        assert_eq!(arc.one_based(), (3, 6));
        assert_eq!(format!("{arc}"), "(2->5)");
    }
}

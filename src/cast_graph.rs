/*!
# Cast Graphs

[`CastGraph`] couples a [`LabelledGraph`] of `String` labels with the [`Membership`]
counters of its collections. Both are fed from the same [`CastRecord`]s in lockstep, so
every collection that has counters is also a vertex of the graph.

```
use castgraph::{cast_graph::CastGraph, io::CastRecord};

let mut cast = CastGraph::new();
for (movie, actor, female) in [("M1", "A1", true), ("M1", "A2", false), ("M2", "A2", false)] {
    cast.ingest(CastRecord {
        collection: movie.into(),
        participant: actor.into(),
        is_subgroup: female,
    });
}

assert_eq!(cast.separation("A1", "A2").unwrap(), 0);
assert_eq!(cast.collections_of("A2").unwrap(), &["M1", "M2"]);
```
*/

use std::{
    fmt::{self, Display},
    io::{BufRead, Write},
    path::Path,
};

use log::{debug, info};

use crate::{
    algo::*,
    io::{CastReader, CastRecord, TgfWrite},
    membership::*,
    prelude::*,
};

/// Participants, collections and their membership counters.
#[derive(Debug, Clone)]
pub struct CastGraph<L = HashedLookup<String>>
where
    L: VertexLookup<String>,
{
    graph: LabelledGraph<String, L>,
    membership: Membership<String>,
}

impl<L: VertexLookup<String>> Default for CastGraph<L> {
    fn default() -> Self {
        Self {
            graph: LabelledGraph::default(),
            membership: Membership::default(),
        }
    }
}

impl CastGraph {
    /// Creates an empty cast graph with a hashed label index
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: VertexLookup<String>> CastGraph<L> {
    /// Applies a single record: counters first, then both vertices, then the edge.
    pub fn ingest(&mut self, record: CastRecord) {
        let CastRecord {
            collection,
            participant,
            is_subgroup,
        } = record;

        self.membership.record(&collection, is_subgroup);
        self.graph.add_vertex(collection.clone());
        self.graph.add_vertex(participant.clone());
        self.graph.add_edge(&collection, &participant);
    }

    /// Applies all records in order and returns how many were applied
    pub fn ingest_all(&mut self, records: impl IntoIterator<Item = CastRecord>) -> usize {
        let (vertices, arcs) = (self.number_of_vertices(), self.number_of_arcs());

        let mut n = 0;
        for record in records {
            self.ingest(record);
            n += 1;
        }

        debug!(
            "applied {n} records: {} new vertices, {} new arcs",
            self.number_of_vertices() - vertices,
            self.number_of_arcs() - arcs
        );
        n
    }

    /// Builds a cast graph from records
    pub fn from_records(records: impl IntoIterator<Item = CastRecord>) -> Self {
        let mut cast = Self::default();
        cast.ingest_all(records);
        cast
    }

    /// Reads every record of `reader` and applies them.
    /// Nothing is applied if any record is malformed.
    ///
    /// Returns the number of applied records.
    pub fn try_ingest<R: BufRead>(&mut self, settings: &CastReader, reader: R) -> Result<usize> {
        let records = settings.try_read_records(reader)?;
        Ok(self.ingest_all(records))
    }

    /// Like [`CastGraph::try_ingest`] for a file
    pub fn try_ingest_file<P: AsRef<Path>>(
        &mut self,
        settings: &CastReader,
        path: P,
    ) -> Result<usize> {
        let path = path.as_ref();
        let records = settings.try_read_records_file(path)?;
        let n = self.ingest_all(records);

        info!(
            "read {n} records from {}: {} vertices, {} arcs, {} collections",
            path.display(),
            self.graph.number_of_vertices(),
            self.graph.number_of_arcs(),
            self.membership.number_of_collections()
        );
        Ok(n)
    }

    /// Builds a cast graph from a cast-list file
    pub fn try_from_cast_file<P: AsRef<Path>>(settings: &CastReader, path: P) -> Result<Self> {
        let mut cast = Self::default();
        cast.try_ingest_file(settings, path)?;
        Ok(cast)
    }

    /// The underlying store
    pub fn graph(&self) -> &LabelledGraph<String, L> {
        &self.graph
    }

    /// The underlying store for direct editing.
    /// Membership counters are not affected by edits.
    pub fn graph_mut(&mut self) -> &mut LabelledGraph<String, L> {
        &mut self.graph
    }

    /// The membership counters
    pub fn membership(&self) -> &Membership<String> {
        &self.membership
    }

    pub fn number_of_vertices(&self) -> NumVertices {
        self.graph.number_of_vertices()
    }

    pub fn number_of_arcs(&self) -> NumArcs {
        self.graph.number_of_arcs()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.graph.contains_vertex(&label.to_string())
    }

    pub fn is_edge(&self, u: &str, v: &str) -> bool {
        self.graph.is_edge(&u.to_string(), &v.to_string())
    }

    /// Participants of a collection in adjacency order
    pub fn participants_of(&self, collection: &str) -> Result<&[String]> {
        self.graph.neighbors_of(&collection.to_string())
    }

    /// Collections of a participant in adjacency order
    pub fn collections_of(&self, participant: &str) -> Result<&[String]> {
        self.graph.neighbors_of(&participant.to_string())
    }

    /// Degrees of separation between two participants
    pub fn separation(&self, a1: &str, a2: &str) -> Result<u32> {
        self.graph.separation(&a1.to_string(), &a2.to_string())
    }

    /// Labels along a shortest path between two vertices, both endpoints included
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<Vec<String>> {
        self.graph
            .shortest_path_labels(&from.to_string(), &to.to_string())
    }

    /// Splits all collections with subgroup members by their subgroup ratio.
    /// `threshold` is a fraction; use `0.48` for 48%.
    pub fn diversity_test(&self, threshold: f64) -> DiversityReport<String> {
        self.membership.diversity_test(threshold)
    }

    /// Writes the graph in TGF to a writer
    pub fn write_tgf<W: Write>(&self, writer: W) -> Result<()> {
        self.graph.try_write_tgf(writer)
    }

    /// Writes the graph in TGF to a file. The graph is unchanged even if writing fails.
    pub fn save_tgf<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.graph.try_write_tgf_file(path)
    }

    /// Fails with [`GraphError::InvariantViolation`] if some arc joins two vertices of the
    /// same role, i.e. if the graph is not bipartite.
    pub fn validate_roles(&self) -> Result<()> {
        if self.graph.is_bipartite() {
            Ok(())
        } else {
            Err(GraphError::InvariantViolation(
                "graph is not bipartite: some arc joins two vertices of the same role".into(),
            ))
        }
    }
}

impl<L: VertexLookup<String>> Display for CastGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.graph, f)
    }
}

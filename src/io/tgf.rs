//! # TGF
//!
//! The Trivial Graph Format lists every vertex as `<id> <label>`, followed by a line
//! consisting of `#`, followed by every arc as `<source-id> <target-id>`.
//! We write ids `1..=n` in store order; arcs are listed per source in store order and,
//! per source, in adjacency-list order.
//!
//! Labels are written with their `Display` form and must not contain line breaks;
//! writing such a label fails with an `InvalidInput` IO error before anything is written.
//!
//! ```text
//! 1 M1
//! 2 A1
//! #
//! 1 2
//! 2 1
//! ```

use std::{fmt::Display, io::ErrorKind};

use fxhash::FxHashMap;
use itertools::Itertools;
use log::{debug, info};

use super::*;
use crate::ops::*;

/// Separates the vertex section from the arc section
const SECTION_SEPARATOR: &str = "#";

/// A writer for the TGF-Format
#[derive(Debug, Clone, Default)]
pub struct TgfWriter;

impl TgfWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphWriter<G> for TgfWriter
where
    G: AdjacencyList,
    G::Vertex: Display,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let labels = graph.vertices().map(|v| v.to_string()).collect_vec();
        if let Some(label) = labels.iter().find(|label| label.contains(['\n', '\r'])) {
            return Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("label {label:?} contains a line break"),
            )
            .into());
        }

        for (i, label) in labels.iter().enumerate() {
            writeln!(writer, "{} {label}", i + 1)?;
        }

        writeln!(writer, "{SECTION_SEPARATOR}")?;

        for arc in graph.arcs() {
            let (u, v) = arc.one_based();
            writeln!(writer, "{u} {v}")?;
        }

        writer.flush()?;
        debug!(
            "wrote TGF with {} vertices and {} arcs",
            graph.number_of_vertices(),
            graph.number_of_arcs()
        );
        Ok(())
    }

    fn try_write_graph_file<P: AsRef<Path>>(&self, graph: &G, path: P) -> Result<()> {
        let path = path.as_ref();
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))?;
        info!("saved graph to {}", path.display());
        Ok(())
    }
}

/// Trait for writing a graph in the TGF-Format.
/// Shorthand for default settings.
pub trait TgfWrite {
    /// Tries to write the graph to a writer
    fn try_write_tgf<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_tgf_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl<G> TgfWrite for G
where
    G: AdjacencyList,
    G::Vertex: Display,
{
    fn try_write_tgf<W: Write>(&self, writer: W) -> Result<()> {
        TgfWriter.try_write_graph(self, writer)
    }

    fn try_write_tgf_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        TgfWriter.try_write_graph_file(self, path)
    }
}

/// A reader for the TGF-Format producing graphs with `String` labels.
///
/// Ids in the file may be arbitrary unsigned integers; they only need to be unique and
/// declared before they are used in the arc section.
#[derive(Debug, Clone, Default)]
pub struct TgfReader;

impl TgfReader {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphReader<G> for TgfReader
where
    G: GraphNew + GraphVertexEditing + GraphArcEditing + GraphOrder<Vertex = String>,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut graph = G::new();
        let mut labels: FxHashMap<u64, String> = FxHashMap::default();
        let mut in_arcs = false;

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = number + 1;
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                continue;
            }

            if line.trim() == SECTION_SEPARATOR {
                raise_parse_error_unless!(!in_arcs, line_no, "Second section separator");
                in_arcs = true;
                continue;
            }

            if in_arcs {
                let mut parts = line.split_whitespace();
                let from: u64 = parse_next_value!(parts, line_no, "Source id");
                let to: u64 = parse_next_value!(parts, line_no, "Target id");

                let (Some(u), Some(v)) = (labels.get(&from), labels.get(&to)) else {
                    return Err(GraphError::Parse {
                        line: line_no,
                        reason: format!("Arc {from} {to} refers to an undeclared vertex"),
                    });
                };
                graph.add_arc(u, v);
            } else {
                // Labels may contain spaces; only the first one separates the id
                let (id, label) = line.split_once(' ').unwrap_or((line, ""));
                let mut parts = std::iter::once(id);
                let id: u64 = parse_next_value!(parts, line_no, "Vertex id");
                raise_parse_error_unless!(
                    !labels.contains_key(&id),
                    line_no,
                    format!("Vertex id {id} declared twice")
                );

                raise_parse_error_unless!(
                    graph.add_vertex(label.to_string()),
                    line_no,
                    format!("Label {label:?} declared twice")
                );
                labels.insert(id, label.to_string());
            }
        }

        Ok(graph)
    }
}

/// Trait for creating graphs from a TGF reader.
/// Used as shorthand for default TgfReader settings
pub trait TgfRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_tgf<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_tgf_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_tgf(BufReader::new(File::open(path)?))
    }
}

impl<G> TgfRead for G
where
    G: GraphNew + GraphVertexEditing + GraphArcEditing + GraphOrder<Vertex = String>,
{
    fn try_read_tgf<R: BufRead>(reader: R) -> Result<Self> {
        TgfReader.try_read_graph(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::*;

    fn cast() -> HashGraph<String> {
        HashGraph::from_edges(
            [
                ("M1", "Tyler Perry"),
                ("M1", "Cassi Davis"),
                ("M2", "Cassi Davis"),
            ]
            .map(|(m, a)| (m.to_string(), a.to_string())),
        )
    }

    #[test]
    fn writes_both_sections() {
        let mut out = Vec::new();
        cast().try_write_tgf(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1 M1\n2 Tyler Perry\n3 Cassi Davis\n4 M2\n#\n1 2\n1 3\n2 1\n3 1\n3 4\n4 3\n"
        );
    }

    #[test]
    fn empty_graph_only_has_separator() {
        let mut out = Vec::new();
        HashGraph::<String>::new().try_write_tgf(&mut out).unwrap();
        assert_eq!(out, b"#\n");
    }

    #[test]
    fn round_trip_recovers_vertices_and_arcs() {
        let graph = cast();
        let mut out = Vec::new();
        graph.try_write_tgf(&mut out).unwrap();

        let read = ScanGraph::<String>::try_read_tgf(out.as_slice()).unwrap();
        assert_eq!(
            read.vertices().collect_vec(),
            graph.vertices().collect_vec()
        );
        assert_eq!(read.arcs().collect_vec(), graph.arcs().collect_vec());
        assert!(read.is_edge(&"Cassi Davis".to_string(), &"M2".to_string()));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cast.tgf");

        let graph = cast();
        graph.try_write_tgf_file(&path).unwrap();
        let read = HashGraph::<String>::try_read_tgf_file(&path).unwrap();
        assert_eq!(read.number_of_vertices(), 4);
        assert_eq!(read.number_of_arcs(), 6);
    }

    #[test]
    fn unwritable_destination_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cast.tgf");

        let graph = cast();
        let err = graph.try_write_tgf_file(&path).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
        assert_eq!(graph.number_of_vertices(), 4);
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let input = "1 a\n2 a\n#\n1 2\n";
        assert!(matches!(
            HashGraph::<String>::try_read_tgf(input.as_bytes()),
            Err(GraphError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn line_break_in_label_is_rejected() {
        let graph = HashGraph::from_edges([("M1".to_string(), "Tyler\nPerry".to_string())]);

        let mut out = Vec::new();
        let err = graph.try_write_tgf(&mut out).unwrap_err();
        assert!(
            matches!(err, GraphError::Io(ref e) if e.kind() == std::io::ErrorKind::InvalidInput)
        );
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_input_is_rejected() {
        let undeclared = "1 a\n#\n1 2\n";
        assert!(matches!(
            HashGraph::<String>::try_read_tgf(undeclared.as_bytes()),
            Err(GraphError::Parse { line: 3, .. })
        ));

        let bad_id = "x a\n";
        assert!(matches!(
            HashGraph::<String>::try_read_tgf(bad_id.as_bytes()),
            Err(GraphError::Parse { line: 1, .. })
        ));

        let short_arc = "1 a\n2 b\n#\n1\n";
        assert!(matches!(
            HashGraph::<String>::try_read_tgf(short_arc.as_bytes()),
            Err(GraphError::Parse { line: 4, .. })
        ));
    }
}

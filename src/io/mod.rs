/*!
# IO

Utilities for reading cast lists and for reading and writing graphs.

## Input Formats

- **Cast list** ([`cast`]): delimited records `collection, participant, ..., subgroup`,
  turned into [`CastRecord`]s that feed the store and the membership counters in lockstep.
- **TGF** ([`tgf`]): the Trivial Graph Format written by [`TgfWriter`].

## Output Formats

- **TGF**: vertices as `<i> <label>` (1-based, store order), a `#` line, then every arc as
  `<source> <target>`. Since arcs are directed, an edge appears as two lines.

Writing to a file is not atomic: if an error occurs midway the file may be left
partially written. The graph itself is never modified by a writer.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
*/

pub mod cast;
pub mod tgf;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::*;

pub use cast::*;
pub use tgf::*;

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails or the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    /// Not atomic: on error the file may hold a prefix of the output.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Shorthand for returning a parse error early when a condition fails
macro_rules! raise_parse_error_unless {
    ($cond : expr, $line : expr, $reason : expr) => {
        if !($cond) {
            return Err(GraphError::Parse {
                line: $line,
                reason: $reason.into(),
            });
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $line : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_parse_error_unless!(
            next.is_some(),
            $line,
            format!("Premature end of line when parsing {}.", $name)
        );

        match next.unwrap_or_default().parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(GraphError::Parse {
                    line: $line,
                    reason: format!("Invalid value found. Cannot parse {}.", $name),
                })
            }
        }
    }};
}

use parse_next_value;
use raise_parse_error_unless;

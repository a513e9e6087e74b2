/*!
# AdjacencyList

The AdjacencyList-Format is a stream of non-negative integer tokens separated by arbitrary
whitespace (line breaks included):
```text
<n>
<degree of 0> <neighbor> <weight> <neighbor> <weight> ...
<degree of 1> <neighbor> <weight> ...
...
```
Each undirected edge may be listed in one or both of its endpoints' neighborhoods. If it is
listed twice, both entries must carry the same weight. Tokens after the last neighborhood are
ignored.

Writing produces exactly one line per node listing all neighbors in ascending order, so every
edge appears twice and reading the output yields an identical graph.

# Example
```
use wgraphs::{prelude::*, io::*};

let g = WeightMatrix::try_read_adjacency_list("3  1 1 7\n0\n1 1 0".as_bytes()).unwrap();
assert_eq!(g.weight_of(0, 1), Some(7));
assert_eq!(g.weight_of(2, 1), Some(0));

assert_eq!(g.to_string(), "3\n1 1 7\n2 0 7 2 0\n1 1 0\n");
```
*/

use std::{
    fmt::Display,
    io::{BufRead, Write},
    path::Path,
    str::FromStr,
};

use itertools::Itertools;
use tracing::debug;

use super::*;

/// A configurable reader for the AdjacencyList-Format
#[derive(Debug, Clone)]
pub struct AdjacencyListReader {
    /// If *true*, an edge listed only by one endpoint is added in both directions
    mirror_edges: bool,
}

impl Default for AdjacencyListReader {
    fn default() -> Self {
        Self { mirror_edges: true }
    }
}

impl AdjacencyListReader {
    /// Creates a new reader that mirrors one-directional entries
    pub fn new() -> Self {
        Self::default()
    }

    /// If set to *false*, every edge must be listed by both of its endpoints and a missing
    /// reverse entry is reported as malformed input.
    pub fn set_mirror_edges(&mut self, mirror_edges: bool) {
        self.mirror_edges = mirror_edges;
    }

    /// Updates whether one-directional entries are accepted, consuming and returning `self`
    /// for chaining.
    ///
    /// # Example
    /// ```
    /// use wgraphs::{prelude::*, io::*};
    ///
    /// let reader = AdjacencyListReader::new().mirror_edges(false);
    /// let res: Result<WeightMatrix, _> = reader.try_read_graph("2 1 1 3 0".as_bytes());
    /// assert!(res.unwrap_err().is_malformed());
    /// ```
    pub fn mirror_edges(mut self, mirror_edges: bool) -> Self {
        self.set_mirror_edges(mirror_edges);
        self
    }
}

impl<G> GraphReader<G> for AdjacencyListReader
where
    G: GraphEdgeEditing + WeightedAdjacency,
{
    fn try_read_graph<R>(&self, mut reader: R) -> Result<G>
    where
        R: BufRead,
    {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let tokens = content.split_whitespace().collect_vec();
        let num_tokens = tokens.len();
        let mut tokens = tokens.into_iter();

        let n: NumNodes = parse_next_value!(tokens, "number of nodes");
        raise_error_unless!(n > 0, "A graph needs at least one node");
        raise_error_unless!(
            num_tokens > n as usize,
            "Premature end of input: {n} nodes need at least {n} degrees"
        );

        let mut graph = G::new(n);
        let mut listed = (!self.mirror_edges).then(|| vec![NodeBitSet::new(n); n as usize]);

        for u in 0..n {
            let degree: NumNodes = parse_next_value!(tokens, format!("degree of node {u}"));

            for _ in 0..degree {
                let v: Node = parse_next_value!(tokens, format!("neighbor of node {u}"));
                let w: Weight = parse_next_value!(tokens, format!("weight of edge ({u},{v})"));

                raise_error_unless!(v < n, "Neighbor {v} of node {u} is out of range");
                raise_error_unless!(v != u, "Self-loop at node {u} is not allowed");
                raise_error_unless!(
                    is_valid_weight(w),
                    "Weight {w} of edge ({u},{v}) is reserved"
                );

                match graph.weight_of(u, v) {
                    Some(prev) => raise_error_unless!(
                        prev == w,
                        "Edge ({u},{v}) is listed with weights {prev} and {w}"
                    ),
                    None => graph.add_edge(u, v, w),
                }
                if let Some(listed) = listed.as_mut() {
                    listed[u as usize].set_bit(v);
                }
            }
        }

        if let Some(listed) = listed {
            for Edge(u, v) in graph.edges(true) {
                raise_error_unless!(
                    listed[u as usize].get_bit(v) && listed[v as usize].get_bit(u),
                    "Edge ({u},{v}) is not listed by both endpoints"
                );
            }
        }

        let trailing = tokens.count();
        if trailing > 0 {
            debug!("Ignoring {trailing} trailing tokens after the last neighborhood");
        }

        Ok(graph)
    }
}

/// Trait for creating graphs from an AdjacencyListReader.
/// Used as shorthand for default AdjacencyListReader settings
pub trait AdjacencyListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_adjacency_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_adjacency_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_adjacency_list(BufReader::new(open_file(path)?))
    }
}

impl<G> AdjacencyListRead for G
where
    G: GraphEdgeEditing + WeightedAdjacency,
{
    fn try_read_adjacency_list<R: BufRead>(reader: R) -> Result<Self> {
        AdjacencyListReader::default().try_read_graph(reader)
    }
}

impl FromStr for WeightMatrix {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_read_adjacency_list(s.as_bytes())
    }
}

/// Formats a graph in the AdjacencyList-Format
pub struct AdjacencyListDisplay<'a, G>(pub &'a G);

impl<G> Display for AdjacencyListDisplay<'_, G>
where
    G: WeightedAdjacency,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let graph = self.0;
        writeln!(f, "{}", graph.number_of_nodes())?;

        for u in graph.vertices() {
            write!(f, "{}", graph.degree_of(u))?;
            for (v, w) in graph.weighted_neighbors_of(u) {
                write!(f, " {v} {w}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// A writer for the AdjacencyList-Format
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacencyListWriter;

impl AdjacencyListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphWriter<G> for AdjacencyListWriter
where
    G: WeightedAdjacency,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        write!(writer, "{}", AdjacencyListDisplay(graph))?;
        Ok(())
    }
}

/// Trait for writing a graph to a writer in the AdjacencyList-Format.
/// Shorthand for default settings.
pub trait AdjacencyListWrite {
    /// Tries to write the graph to a writer
    fn try_write_adjacency_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_adjacency_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_file(path, |writer| self.try_write_adjacency_list(writer))
    }
}

impl<G> AdjacencyListWrite for G
where
    G: WeightedAdjacency,
{
    fn try_write_adjacency_list<W: Write>(&self, writer: W) -> Result<()> {
        AdjacencyListWriter.try_write_graph(self, writer)
    }
}

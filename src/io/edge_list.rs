//! # EdgeList
//!
//! The EdgeList-Format consists of a header line `n m` followed by `m` non-comment-lines
//! `u v w`, each representing the undirected edge `WeightedEdge(u, v, w)` with `0`-based nodes.
//! Empty lines and lines starting with the comment identifier (`c` by default) are skipped.

use std::{
    io::{BufRead, Lines, Write},
    path::Path,
};

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G> GraphReader<G> for EdgeListReader
where
    G: GraphEdgeEditing + WeightedAdjacency,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = EdgeListLines {
            lines: reader.lines(),
            comment_identifier: &self.comment_identifier,
        };

        let header = lines
            .next_non_comment_line()?
            .ok_or_else(|| malformed!("Header not found"))?;
        let mut parts = header.split_whitespace();
        let n: NumNodes = parse_next_value!(parts, "number of nodes");
        let m: NumEdges = parse_next_value!(parts, "number of edges");
        raise_error_unless!(n > 0, "A graph needs at least one node");

        let mut graph = G::new(n);
        let mut num_edges: NumEdges = 0;
        while let Some(line) = lines.next_non_comment_line()? {
            let mut parts = line.split_whitespace();
            let u: Node = parse_next_value!(parts, "source node");
            let v: Node = parse_next_value!(parts, "target node");
            let w: Weight = parse_next_value!(parts, "edge weight");

            raise_error_unless!(u < n && v < n, "Edge ({u},{v}) is out of range");
            raise_error_unless!(u != v, "Self-loop at node {u} is not allowed");
            raise_error_unless!(is_valid_weight(w), "Weight {w} of edge ({u},{v}) is reserved");
            raise_error_unless!(
                !graph.try_add_edge(u, v, w),
                "Edge ({u},{v}) is listed more than once"
            );
            num_edges += 1;
        }

        raise_error_unless!(
            num_edges == m,
            "Header announces {m} edges but {num_edges} were found"
        );

        Ok(graph)
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(open_file(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphEdgeEditing + WeightedAdjacency,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Lines of the input with comments and blank lines removed
struct EdgeListLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<R: BufRead> EdgeListLines<'_, R> {
    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x.into()),
                Some(Ok(line))
                    if line.trim().is_empty() || line.starts_with(self.comment_identifier) =>
                {
                    continue
                }
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphWriter<G> for EdgeListWriter
where
    G: WeightedAdjacency + GraphEdgeOrder,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "{} {}",
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        for WeightedEdge(u, v, w) in graph.weighted_edges(true) {
            writeln!(writer, "{u} {v} {w}")?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_file(path, |writer| self.try_write_edge_list(writer))
    }
}

impl<G> EdgeListWrite for G
where
    G: WeightedAdjacency + GraphEdgeOrder,
{
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter.try_write_graph(self, writer)
    }
}

//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw nodes and weighted edges,
//! optionally coloring a set of edges such as a tour or a spanning tree:
//! ```
//! use wgraphs::{prelude::*, algo::*, io::*};
//!
//! let g = WeightMatrix::from_edges(3, [(0, 1, 4), (1, 2, 1), (0, 2, 2)]);
//! let tree = g.minimum_spanning_tree_edges().into_iter().map(Edge::from);
//!
//! let mut buffer = Vec::new();
//! DotWriter::new()
//!     .highlight(tree, DotColor::Red)
//!     .try_write_graph(&g, &mut buffer)
//!     .unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(buffer).unwrap(),
//!     "graph {\nu0;u1;u2;\nu0--u1[label=4];u0--u2[label=2,color=red];u1--u2[label=1,color=red];\n}\n"
//! );
//! ```

use std::{
    fmt::Display,
    io::Write,
    path::Path,
};

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Prefix of a node (default: 'u')
    prefix: String,
    /// Normalized and sorted edges drawn in `color`
    highlighted: Vec<Edge>,
    color: DotColor,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            prefix: "u".to_string(),
            highlighted: Vec::new(),
            color: DotColor::Red,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of a node (`u` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Draws the given edges in `color`. Edges are undirected, so `Edge(u, v)` also
    /// highlights `Edge(v, u)`. Replaces any previously highlighted edges.
    pub fn highlight<I>(mut self, edges: I, color: DotColor) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        self.highlighted = edges.into_iter().map(|e| e.normalized()).collect();
        self.highlighted.sort_unstable();
        self.highlighted.dedup();
        self.color = color;
        self
    }

    /// Formats a node depending on `self.prefix`
    fn format_node(&self, u: Node) -> String {
        format!("{}{u}", self.prefix)
    }

    fn is_highlighted(&self, edge: Edge) -> bool {
        self.highlighted.binary_search(&edge.normalized()).is_ok()
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: WeightedAdjacency,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "graph {{")?;

        for u in graph.vertices() {
            write!(writer, "{};", self.format_node(u))?;
        }
        writeln!(writer)?;

        for WeightedEdge(u, v, w) in graph.weighted_edges(true) {
            write!(
                writer,
                "{}--{}[label={w}",
                self.format_node(u),
                self.format_node(v)
            )?;
            if self.is_highlighted(Edge(u, v)) {
                write!(writer, ",color={}", self.color)?;
            }
            write!(writer, "];")?;
        }
        writeln!(writer)?;

        writeln!(writer, "}}")?;
        Ok(())
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        write_file(path, |writer| self.try_write_dot(writer))
    }
}

impl<G> DotWrite for G
where
    G: WeightedAdjacency,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Colors for highlighted edges, a subset of
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    DarkGreen,
    Gray,
    Green,
    Orange,
    Purple,
    Red,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;

    #[test]
    fn default_output() {
        let graph = WeightMatrix::from_edges(3, [(2, 0, 7)]);

        let mut buffer = Vec::new();
        graph.try_write_to_writer(&mut buffer, FileFormat::Dot).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "graph {\nu0;u1;u2;\nu0--u2[label=7];\n}\n"
        );
    }

    #[test]
    fn highlight_tour() {
        let mut graph = WeightMatrix::new(4);
        graph.add_edges([(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1), (0, 2, 9)]);
        let tour = graph.best_tour().unwrap();

        let mut buffer = Vec::new();
        DotWriter::new()
            .node_prefix("city")
            .highlight(tour.edges(), DotColor::DarkGreen)
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("city0--city1[label=1,color=darkgreen];"));
        assert!(output.contains("city0--city3[label=1,color=darkgreen];"));
        assert!(output.contains("city0--city2[label=9];"));
    }

    #[test]
    fn dot_cannot_be_read() {
        let err = WeightMatrix::try_from_reader("graph {}".as_bytes(), FileFormat::Dot).unwrap_err();
        assert!(!err.is_malformed());
        assert!(matches!(err, GraphError::NotReadable(FileFormat::Dot)));
    }
}

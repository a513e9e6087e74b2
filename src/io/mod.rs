/*!
# Reading and Writing Graphs

Three text formats are supported:

| [`FileFormat`] | read | write | layout |
|---|---|---|---|
| `AdjacencyList` | yes | yes | `n`, then per node its degree followed by `neighbor weight` pairs |
| `EdgeList` | yes | yes | header `n m`, then one `u v w` line per edge |
| `Dot` | no | yes | GraphViz `graph { .. }` with weight labels |

Each format has a configurable reader and/or writer implementing [`GraphReader`] or
[`GraphWriter`], plus a shorthand trait on the graph using default settings
(e.g. [`AdjacencyListRead`]). If the format is only known at runtime, [`GraphRead`] and
[`GraphWrite`] dispatch on it.

Input that does not describe a valid graph yields [`GraphError::Malformed`]; a file that does
not exist yields [`GraphError::FileNotFound`].
*/

pub mod adjacency_list;
pub mod dot;
pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::Path,
    str::FromStr,
};

use crate::{error::Result, prelude::*};

pub use adjacency_list::*;
pub use dot::*;
pub use edge_list::*;

/// Serialization format, selected e.g. by the `--format` flag of the binary
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FileFormat {
    #[default]
    AdjacencyList,
    EdgeList,
    /// Write only
    Dot,
}

impl FromStr for FileFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "adj" | "adjacencylist" => Ok(FileFormat::AdjacencyList),
            "edgelist" => Ok(FileFormat::EdgeList),
            "dot" => Ok(FileFormat::Dot),
            _ => Err(GraphError::UnknownFormat(s.to_string())),
        }
    }
}

/// Opens `path` for reading; a missing file is reported as [`GraphError::FileNotFound`]
pub fn open_file<P>(path: P) -> Result<File>
where
    P: AsRef<Path>,
{
    File::open(path.as_ref()).map_err(|source| match source.kind() {
        ErrorKind::NotFound => GraphError::FileNotFound {
            path: path.as_ref().to_path_buf(),
            source,
        },
        _ => GraphError::Io(source),
    })
}

/// Creates (or truncates) `path`, hands a buffered writer to `write` and flushes it afterwards
pub(crate) fn write_file<P, F>(path: P, write: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer)?;
    writer.flush()?;
    Ok(())
}

/// A configured parser for one format
pub trait GraphReader<G> {
    /// Parses a complete graph from `reader`.
    /// Nothing is returned if any part of the input is invalid.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(open_file(path)?))
    }
}

/// A configured serializer for one format
pub trait GraphWriter<G> {
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        write_file(path, |writer| self.try_write_graph(graph, writer))
    }
}

/// Reads graphs in a format chosen at runtime, with default reader settings
pub trait GraphRead: Sized {
    /// Fails with [`GraphError::NotReadable`] for write-only formats
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(open_file(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: AdjacencyListRead + EdgeListRead,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::AdjacencyList => Self::try_read_adjacency_list(reader),
            FileFormat::EdgeList => Self::try_read_edge_list(reader),
            FileFormat::Dot => Err(GraphError::NotReadable(format)),
        }
    }
}

/// Writes graphs in a format chosen at runtime, with default writer settings
pub trait GraphWrite {
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        write_file(path, |writer| self.try_write_to_writer(writer, format))
    }
}

impl<G> GraphWrite for G
where
    G: AdjacencyListWrite + EdgeListWrite + DotWrite,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::AdjacencyList => self.try_write_adjacency_list(writer),
            FileFormat::EdgeList => self.try_write_edge_list(writer),
            FileFormat::Dot => self.try_write_dot(writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        assert_eq!("adj".parse::<FileFormat>().unwrap(), FileFormat::AdjacencyList);
        assert_eq!("EdgeList".parse::<FileFormat>().unwrap(), FileFormat::EdgeList);
        assert_eq!("DOT".parse::<FileFormat>().unwrap(), FileFormat::Dot);
        assert!(matches!(
            "metis".parse::<FileFormat>(),
            Err(GraphError::UnknownFormat(name)) if name == "metis"
        ));
    }
}

/// `GraphError::Malformed` built from format arguments
macro_rules! malformed {
    ($($arg : tt)*) => {
        $crate::error::GraphError::Malformed(format!($($arg)*))
    };
}

/// Returns `Malformed` from the enclosing function unless `$cond` holds
macro_rules! raise_error_unless {
    ($cond : expr, $($arg : tt)*) => {
        if !($cond) {
            return Err(malformed!($($arg)*));
        }
    };
}

/// Parses the next token of `$tokens` into the type expected at the call site.
/// A missing or unparsable token returns `Malformed` naming `$what`.
macro_rules! parse_next_value {
    ($tokens : expr, $what : expr) => {{
        let token = $tokens
            .next()
            .ok_or_else(|| malformed!("Premature end of input when parsing {}", $what))?;

        token.parse().map_err(|_| {
            malformed!("Cannot parse {} from {:?}", $what, token)
        })?
    }};
}

use malformed;
use parse_next_value;
use raise_error_unless;

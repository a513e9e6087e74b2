//! wgraphs - Interactive analysis of weighted undirected graphs.
//!
//! Loads a graph file and repeatedly offers a menu of analyses: connectivity, minimum
//! spanning tree, shortest paths, metric checks, metric closure and (approximate) tours.
//!
//! # Examples
//!
//! ```bash
//! # Ask for the file name interactively
//! wgraphs
//!
//! # Load an edge list and log every algorithm step
//! wgraphs graph.txt --format edgelist --verbose
//!
//! # Additionally draw the graph and its spanning tree for GraphViz
//! wgraphs graph.txt --dot graph.dot
//! ```

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use wgraphs::{algo::*, error::Result, io::*, prelude::*};

/// Interactive analysis of weighted undirected graphs
#[derive(Parser)]
#[command(name = "wgraphs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Graph file to load (asked for interactively if omitted)
    path: Option<PathBuf>,

    /// Format of the graph file (adj, edgelist)
    #[arg(short, long, default_value = "adj")]
    format: FileFormat,

    /// Also write the graph as GraphViz DOT to FILE, with a minimum spanning tree highlighted
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match run(cli.path, cli.format, cli.dot.as_deref(), stdin, stdout) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Loads the graph and runs the menu until the user quits or the input ends
fn run<R, W>(
    path: Option<PathBuf>,
    format: FileFormat,
    dot: Option<&Path>,
    input: R,
    mut out: W,
) -> Result<ExitCode>
where
    R: BufRead,
    W: Write,
{
    let mut input = Tokens::new(input);

    let path = match path {
        Some(path) => path,
        None => {
            write!(out, "Enter graph file name: ")?;
            out.flush()?;
            match input.next_line()? {
                Some(line) => PathBuf::from(line.trim()),
                None => return Ok(ExitCode::FAILURE),
            }
        }
    };

    let graph = match WeightMatrix::try_from_file(&path, format) {
        Ok(graph) => graph,
        Err(e) if e.is_file_not_found() => {
            writeln!(out, "File not found")?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e),
    };
    info!(
        "Loaded graph with {} nodes and {} edges from {}",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        path.display()
    );

    if let Some(dot) = dot {
        export_dot(&graph, dot)?;
        info!("Wrote GraphViz drawing to {}", dot.display());
    }

    Session { graph, input, out }.run()?;
    Ok(ExitCode::SUCCESS)
}

fn export_dot(graph: &WeightMatrix, path: &Path) -> Result<()> {
    let tree = graph
        .minimum_spanning_tree_edges()
        .into_iter()
        .map(Edge::from);

    DotWriter::new()
        .highlight(tree, DotColor::Red)
        .try_write_graph_file(graph, path)
}

/// Whitespace separated tokens of the console input
struct Tokens<R> {
    reader: R,
    /// Unconsumed tokens of the current line in reverse order
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    /// Returns the next complete line, discarding unconsumed tokens
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.pending.clear();
        let mut line = String::new();
        Ok((self.reader.read_line(&mut line)? > 0).then_some(line))
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(Some(token));
            }

            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
    }
}

/// Menu loop over a loaded graph
struct Session<R, W> {
    graph: WeightMatrix,
    input: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn run(mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.input.next_token()? else {
                writeln!(self.out)?;
                return Ok(());
            };
            debug!("Menu choice {choice:?}");

            if choice == "8" {
                return Ok(());
            }
            writeln!(self.out)?;

            match choice.as_str() {
                "1" => self.is_connected()?,
                "2" => self.minimum_spanning_tree()?,
                "3" => self.shortest_paths()?,
                "4" => self.is_metric()?,
                "5" => self.make_metric()?,
                "6" => self.best_tour()?,
                "7" => self.approximate_tour()?,
                _ => writeln!(self.out, "Invalid choice")?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        for (i, item) in [
            "Is Connected",
            "Minimum Spanning Tree",
            "Shortest Path",
            "Is Metric",
            "Make Metric",
            "Traveling Salesman Problem",
            "Approximate TSP",
            "Quit",
        ]
        .iter()
        .enumerate()
        {
            writeln!(self.out, "{}. {item}", i + 1)?;
        }
        writeln!(self.out)?;
        write!(self.out, "Make your choice (1 - 8): ")?;
        self.out.flush()
    }

    fn is_connected(&mut self) -> io::Result<()> {
        if self.graph.is_connected() {
            writeln!(self.out, "Graph is connected.")
        } else {
            writeln!(self.out, "Graph is not connected.")
        }
    }

    fn minimum_spanning_tree(&mut self) -> io::Result<()> {
        if !self.graph.is_connected() {
            return writeln!(self.out, "Error: Graph is not connected.");
        }
        writeln!(self.out, "{}", self.graph.minimum_spanning_tree())
    }

    fn shortest_paths(&mut self) -> io::Result<()> {
        write!(
            self.out,
            "From which node would you like to find the shortest paths (0 - {}): ",
            self.graph.number_of_nodes() - 1
        )?;
        self.out.flush()?;

        let source = self
            .input
            .next_token()?
            .and_then(|token| token.parse::<Node>().ok())
            .filter(|&u| u < self.graph.number_of_nodes());

        match source {
            Some(source) => write!(self.out, "{}", self.graph.shortest_paths(source)),
            None => writeln!(self.out, "Invalid node"),
        }
    }

    fn is_metric(&mut self) -> io::Result<()> {
        if !self.graph.is_completely_connected() {
            writeln!(
                self.out,
                "Graph is not metric:  Graph is not completely connected."
            )
        } else if !self.graph.obeys_triangle_inequality() {
            writeln!(
                self.out,
                "Graph is not metric: Edges do not obey the triangle inequality."
            )
        } else {
            writeln!(self.out, "Graph is metric.")
        }
    }

    fn make_metric(&mut self) -> io::Result<()> {
        self.graph.make_metric();
        writeln!(self.out, "{}", self.graph)
    }

    /// A disconnected graph is reported but still searched, which then finds no tour
    fn best_tour(&mut self) -> io::Result<()> {
        if !self.graph.is_connected() {
            writeln!(self.out, "Error: Graph is not connected.")?;
        }
        match self.graph.best_tour() {
            Some(tour) => writeln!(self.out, "{tour}"),
            None => writeln!(self.out, "Error: Graph has no tour."),
        }
    }

    fn approximate_tour(&mut self) -> io::Result<()> {
        if !self.graph.is_metric() {
            return writeln!(self.out, "Error: Graph is not metric.");
        }
        match self.graph.approximate_tour() {
            Some(tour) => writeln!(self.out, "{tour}"),
            None => writeln!(self.out, "Error: Graph has no tour."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(graph: &str, input: &str) -> String {
        let mut out = Vec::new();
        Session {
            graph: graph.parse().unwrap(),
            input: Tokens::new(input.as_bytes()),
            out: &mut out,
        }
        .run()
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    const SQUARE: &str = "4\n2 1 1 3 4\n2 0 1 2 2\n2 1 2 3 3\n2 2 3 0 4\n";

    #[test]
    fn connectivity_and_invalid_choice() {
        let output = session(SQUARE, "1\n9\nx 8\n");
        assert!(output.contains("Graph is connected."));
        assert_eq!(output.matches("Invalid choice").count(), 2);
        assert!(output.ends_with("Make your choice (1 - 8): "));
    }

    #[test]
    fn shortest_paths_prompt() {
        let output = session(SQUARE, "3 2\n3\n7\n8");
        assert!(output
            .contains("From which node would you like to find the shortest paths (0 - 3): "));
        assert!(output.contains("0: (3)\t2 -> 1 -> 0\n"));
        assert!(output.contains("Invalid node"));
    }

    #[test]
    fn tours_and_metric() {
        let output = session(SQUARE, "4 6 7 5 4 7 8");
        assert!(output.contains("Graph is not metric:  Graph is not completely connected."));
        assert!(output.contains("10: 0 -> 1 -> 2 -> 3 -> 0\n"));
        assert!(output.contains("Error: Graph is not metric."));
        assert!(output.contains("Graph is metric."));
        assert!(output.contains("4\n3 1 1 2 3 3 4\n"));
    }

    #[test]
    fn disconnected_graph() {
        let output = session("3\n1 1 5\n0\n0\n", "2 6 8");
        assert_eq!(output.matches("Error: Graph is not connected.").count(), 2);
        assert!(output.contains("Error: Graph is not connected.\nError: Graph has no tour.\n"));
        assert_eq!(output.matches("Error: Graph has no tour.").count(), 1);
    }

    #[test]
    fn dot_export_highlights_spanning_tree() {
        let graph: WeightMatrix = SQUARE.parse().unwrap();
        let path = std::env::temp_dir().join(format!("wgraphs-{}.dot", std::process::id()));

        export_dot(&graph, &path).unwrap();
        let drawing = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(drawing.starts_with("graph {\nu0;u1;u2;u3;\n"));
        assert!(drawing.contains("u0--u1[label=1,color=red];"));
        assert!(drawing.contains("u1--u2[label=2,color=red];"));
        assert!(drawing.contains("u2--u3[label=3,color=red];"));
        assert!(drawing.contains("u0--u3[label=4];"));
    }

    #[test]
    fn missing_file() {
        let mut out = Vec::new();
        run(
            None,
            FileFormat::AdjacencyList,
            None,
            "/this/file/does/not/exist.txt\n".as_bytes(),
            &mut out,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter graph file name: File not found\n"
        );
    }
}

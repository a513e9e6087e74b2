/*!
`wgraphs` is a library for small, dense, **w**eighted graphs that are
- unlabelled : Nodes are numbered `0` to `n - 1`
- undirected : Every edge `(u, v)` is also the edge `(v, u)` with the same weight
- non-negatively weighted : Edge weights are `u64` values, `0` included

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
**Edges** are the tuple-structs `Edge(Node, Node)` and `WeightedEdge(Node, Node, Weight)`.

The only storage backend is the dense [`WeightMatrix`](crate::repr::WeightMatrix) with `n * n`
cells. A cell is either absent or holds a weight. Absence is a dedicated value, so an edge of
weight `0` is an edge like any other.

# Design

Algorithms are implemented via traits on the graph itself, e.g. `graph.minimum_spanning_tree()`
or `graph.best_tour()`. Algorithms with options are also available as configurable structs that
can be altered using the *Builder* pattern before running them on a provided graph.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, weights, basic graph operations and the matrix representation,
- [`algo`] includes connectivity, minimum spanning trees, shortest paths, metric analysis and tours,
- [`gens`] includes random weighted graph generators (and deterministic substructures such as paths/cycles/cliques),
- [`io`] includes readers and writers for the adjacency-list format, weighted edge lists and GraphViz,
- [`error`] includes the error type returned by all fallible operations.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let g: WeightMatrix = "3\n2 1 4 2 1\n1 0 4\n1 0 1".parse().unwrap();

assert!(g.is_connected());
assert_eq!(g.minimum_spanning_tree().total_weight(), 5);
assert_eq!(g.shortest_paths(1).distance_to(2), Some(5));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod weight;

pub use edge::*;
pub use node::*;
pub use weight::*;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, all basic graph operation traits as well as the matrix representation.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*, weight::*};
}

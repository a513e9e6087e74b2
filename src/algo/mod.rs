/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of [`WeightMatrix`](crate::repr::WeightMatrix)
and the traits in [`ops`](crate::ops).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, connectivity, spanning trees, shortest paths, metric analysis and tours.

Every algorithm is available as a trait method on the graph itself (`graph.best_tour()`) and
owns all of its scratch data for the duration of a single call. Algorithms with options are
additionally exposed as configurable structs (e.g. [`ExactTourSearch`]).
*/

mod connectivity;
mod metric;
mod mst;
mod shortest_path;
mod traversal;
mod tsp;

use crate::prelude::*;

pub use connectivity::*;
pub use metric::*;
pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;
pub use tsp::*;

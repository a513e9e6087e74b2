/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph, with every new edge carrying the same weight:

- **Paths**
- **Cycles**
- **Cliques**

These methods are useful when enriching a graph with specific structures for
testing algorithms or modeling networks with known sub-components.

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = WeightMatrix::new(5);
g.connect_path([0, 1, 2], 1);
g.connect_cycle([2, 3, 4], 2);
g.connect_clique([0, 2, 4], 3);

assert_eq!(
    g.edges(true).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
assert_eq!(g.weight_of(2, 4), Some(2));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path** of edges with weight `weight`.
    ///
    /// # Example
    /// ```rust
    /// use wgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = WeightMatrix::new(4);
    /// g.connect_path([0, 1, 2, 3], 5);
    ///
    /// assert_eq!(g.total_weight(), 15);
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    ///
    /// ** Panics if fewer than three nodes are given **
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph).
    /// Edges that already exist keep their weight.
    fn connect_clique<C>(&mut self, nodes: C, weight: Weight)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v, weight);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        assert!(nodes.len() >= 3, "A cycle needs at least three nodes");

        for (&u, &v) in nodes.iter().circular_tuple_windows() {
            self.add_edge(u, v, weight);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C, weight: Weight)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().sorted_unstable().dedup().collect_vec();
        for (&u, &v) in nodes.iter().tuple_combinations() {
            self.try_add_edge(u, v, weight);
        }
    }
}

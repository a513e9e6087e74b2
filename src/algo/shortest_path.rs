/*!
# Single-Source Shortest Paths

Dijkstra's algorithm on the dense matrix in `O(n^2)`: in every round, the unsettled node with
the smallest finite distance is settled (ties go to the smallest index) and its edges are
relaxed. The search ends as soon as no unsettled node has a finite distance, so disconnected
graphs simply leave the unreachable nodes at an infinite distance.

Infinite distances are represented as `None`. Extending a distance by an edge weight is
overflow-checked; a sum that does not fit into a [`Weight`] counts as infinite.

# Example
```
use wgraphs::{prelude::*, algo::*};

let g = WeightMatrix::from_edges(4, [(0, 1, 4), (1, 2, 1), (0, 2, 7)]);
let paths = g.shortest_paths(0);

assert_eq!(paths.distance_to(2), Some(5));
assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
assert_eq!(paths.distance_to(3), None);
assert_eq!(paths.to_string(), "0: (0)\t0\n1: (4)\t0 -> 1\n2: (5)\t0 -> 1 -> 2\n3: (Infinity)\n");
```
*/

use std::fmt::Display;

use itertools::Itertools;
use tracing::trace;

use super::*;

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: Node,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<OptionalNode>>,
}

impl ShortestPaths {
    /// Node the distances are measured from
    pub fn source(&self) -> Node {
        self.source
    }

    /// Shortest distance from the source to `v` or `None` if `v` is unreachable
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Option<Weight> {
        self.distances[v as usize]
    }

    /// Shortest distances to all nodes, indexed by node
    pub fn distances(&self) -> &[Option<Weight>] {
        &self.distances
    }

    /// Node preceding `v` on its shortest path; `None` for the source and unreachable nodes
    /// ** Panics if `v >= n` **
    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        self.predecessors[v as usize].map(|u| u.get())
    }

    /// Returns *true* if `v` can be reached from the source
    /// ** Panics if `v >= n` **
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distance_to(v).is_some()
    }

    /// Reconstructs the shortest path `source -> ... -> v` by walking predecessor links.
    /// Returns `None` if `v` is unreachable.
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.is_reachable(v) {
            return None;
        }

        let mut path = vec![v];
        let mut current = v;
        while let Some(pred) = self.predecessor_of(current) {
            path.push(pred);
            current = pred;
        }
        path.reverse();

        debug_assert_eq!(path.first(), Some(&self.source));
        Some(path)
    }
}

/// Report with one line per node: `i: (distance)\tsource -> ... -> i` or `i: (Infinity)`
impl Display for ShortestPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in 0..self.distances.len() as Node {
            match (self.distance_to(v), self.path_to(v)) {
                (Some(dist), Some(path)) => {
                    writeln!(f, "{v}: ({dist})\t{}", path.iter().join(" -> "))?
                }
                _ => writeln!(f, "{v}: (Infinity)")?,
            }
        }
        Ok(())
    }
}

/// Single-source shortest paths on graphs with non-negative weights
pub trait ShortestPath: WeightedAdjacency + Sized {
    /// Computes shortest distances and predecessors from `source` to every node.
    /// ** Panics if `source >= n` **
    fn shortest_paths(&self, source: Node) -> ShortestPaths {
        Dijkstra::new(self).compute(source)
    }

    /// Computes only the shortest distances from `source` to every node.
    /// ** Panics if `source >= n` **
    fn shortest_distances(&self, source: Node) -> Vec<Option<Weight>> {
        self.shortest_paths(source).distances
    }
}

impl<G> ShortestPath for G where G: WeightedAdjacency + Sized {}

/// Per-call state of Dijkstra's algorithm
pub struct Dijkstra<'a, G>
where
    G: WeightedAdjacency,
{
    graph: &'a G,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<OptionalNode>>,
    settled: NodeBitSet,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacency,
{
    /// Allocates the scratch buffers for `graph`
    pub fn new(graph: &'a G) -> Self {
        let n = graph.len();
        Self {
            graph,
            distances: vec![None; n],
            predecessors: vec![None; n],
            settled: graph.vertex_bitset_unset(),
        }
    }

    /// Runs the search from `source`, consuming the scratch buffers
    /// ** Panics if `source >= n` **
    pub fn compute(mut self, source: Node) -> ShortestPaths {
        assert!(source < self.graph.number_of_nodes());
        self.distances[source as usize] = Some(0);

        while let Some((dist_u, u)) = self.closest_unsettled() {
            self.settled.set_bit(u);

            for (v, w) in self.graph.weighted_neighbors_of(u) {
                if self.settled.get_bit(v) {
                    continue;
                }

                let Some(dist_v) = extend_distance(Some(dist_u), w) else {
                    continue;
                };

                if self.distances[v as usize].is_none_or(|old| dist_v < old) {
                    trace!("Relaxing {v} via {u} to distance {dist_v}");
                    self.distances[v as usize] = Some(dist_v);
                    self.predecessors[v as usize] = OptionalNode::new(u);
                }
            }
        }

        ShortestPaths {
            source,
            distances: self.distances,
            predecessors: self.predecessors,
        }
    }

    /// Unsettled node with minimum finite distance; ties go to the smallest index
    fn closest_unsettled(&self) -> Option<(Weight, Node)> {
        self.graph
            .vertices()
            .filter(|&u| !self.settled.get_bit(u))
            .filter_map(|u| self.distances[u as usize].map(|d| (d, u)))
            .min()
    }
}

/*!
# Minimum Spanning Tree

Prim's algorithm on the dense matrix. The tree is grown from node `0`: in each round, the
lightest edge between the tree and the remaining nodes is searched by a full linear scan over
the tree nodes (in the order they joined) and their neighbors (ascending). The first minimum
encountered wins, which makes the result deterministic even with equal weights.

The graph is required to be connected. This is **not** checked: on a disconnected graph the
growth stops once no edge leaves the tree, and the result only spans the component of `0`.
*/

use tracing::{trace, warn};

use super::*;

/// Computes minimum spanning trees
pub trait MinimumSpanningTree: WeightedAdjacency + Sized {
    /// Returns the edges of a minimum spanning tree in the order they were added to the tree.
    /// Each edge is oriented from its tree endpoint to the newly attached node.
    fn minimum_spanning_tree_edges(&self) -> Vec<WeightedEdge>;

    /// Returns a new graph with the same nodes that contains exactly the edges of a
    /// minimum spanning tree.
    ///
    /// # Example
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightMatrix::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 5)]);
    /// let mst = g.minimum_spanning_tree();
    ///
    /// assert_eq!(mst.number_of_edges(), 2);
    /// assert_eq!(mst.total_weight(), 3);
    /// assert!(!mst.has_edge(0, 2));
    /// ```
    fn minimum_spanning_tree(&self) -> Self
    where
        Self: GraphNew + GraphEdgeEditing,
    {
        Self::from_edges(self.number_of_nodes(), self.minimum_spanning_tree_edges())
    }
}

impl<G> MinimumSpanningTree for G
where
    G: WeightedAdjacency + Sized,
{
    fn minimum_spanning_tree_edges(&self) -> Vec<WeightedEdge> {
        PrimSearch::new(self).compute()
    }
}

/// Per-call state of Prim's algorithm
struct PrimSearch<'a, G>
where
    G: WeightedAdjacency,
{
    graph: &'a G,
    /// Tree nodes in the order they joined
    tree: Vec<Node>,
    remaining: NodeBitSet,
}

impl<'a, G> PrimSearch<'a, G>
where
    G: WeightedAdjacency,
{
    fn new(graph: &'a G) -> Self {
        let mut remaining = graph.vertex_bitset_set();
        remaining.clear_bit(0);

        let mut tree = Vec::with_capacity(graph.len());
        tree.push(0);

        Self {
            graph,
            tree,
            remaining,
        }
    }

    fn compute(mut self) -> Vec<WeightedEdge> {
        let mut edges = Vec::with_capacity(self.graph.len() - 1);

        while self.remaining.cardinality() > 0 {
            let Some(edge) = self.lightest_crossing_edge() else {
                warn!(
                    "No edge leaves the spanning tree; {} nodes remain unreachable",
                    self.remaining.cardinality()
                );
                break;
            };

            trace!("Adding {edge} to the spanning tree");
            let WeightedEdge(_, v, _) = edge;
            self.remaining.clear_bit(v);
            self.tree.push(v);
            edges.push(edge);
        }

        edges
    }

    /// Lightest edge `(s, v)` with `s` in the tree and `v` remaining; ties go to the first found
    fn lightest_crossing_edge(&self) -> Option<WeightedEdge> {
        let mut lightest: Option<WeightedEdge> = None;

        for &s in &self.tree {
            for (v, w) in self.graph.weighted_neighbors_of(s) {
                if self.remaining.get_bit(v) && lightest.is_none_or(|e| w < e.weight()) {
                    lightest = Some(WeightedEdge(s, v, w));
                }
            }
        }

        lightest
    }
}

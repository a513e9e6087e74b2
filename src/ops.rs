use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns full bitset with one entry per node
    fn vertex_bitset_set(&self) -> NodeBitSet {
        NodeBitSet::new_all_set(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (undirected) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighbors of a given vertex in ascending order.
    /// The iterator can be cloned to restart it and walked from both ends.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl DoubleEndedIterator<Item = Node> + Clone + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns *true* if `u` has no neighbors
    /// ** Panics if `u >= n` **
    fn is_isolated(&self, u: Node) -> bool {
        self.neighbors_of(u).next().is_none()
    }

    /// Returns an iterator over edges incident to a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .filter(move |&v| !only_normalized || u <= v)
            .map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Getters for edge weights
pub trait WeightedAdjacency: AdjacencyList + AdjacencyTest {
    /// Returns the weight of edge `(u, v)` or `None` if it does not exist.
    /// ** Panics if `u >= n || v >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns an iterator over `(neighbor, weight)` pairs of `u` in ascending neighbor order.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over all weighted edges incident to `u`.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(
        &self,
        u: Node,
        only_normalized: bool,
    ) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_neighbors_of(u)
            .filter(move |&(v, _)| !only_normalized || u <= v)
            .map(move |(v, w)| WeightedEdge(u, v, w))
    }

    /// Returns an iterator over all weighted edges in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn weighted_edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices()
            .flat_map(move |u| self.weighted_edges_of(u, only_normalized))
    }

    /// Returns the sum of all edge weights (every undirected edge counted once).
    /// Saturates at `Weight::MAX`.
    fn total_weight(&self) -> Weight {
        self.weighted_edges(true)
            .fold(0, |acc: Weight, e| acc.saturating_add(e.weight()))
    }

    /// Returns the total weight of walking along `path`, or `None` if two consecutive
    /// nodes are not connected by an edge. Staying on a node costs nothing.
    /// ** Panics if any node is `>= n` **
    fn path_weight<I>(&self, path: I) -> Option<Weight>
    where
        I: IntoIterator<Item = Node>,
    {
        path.into_iter()
            .tuple_windows()
            .try_fold(0 as Weight, |acc, (u, v)| {
                let w = if u == v { 0 } else { self.weight_of(u, v)? };
                acc.checked_add(w)
            })
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete weighted edges
pub trait GraphEdgeEditing: GraphNew {
    /// Sets the weight of edge `(u, v)`, inserting it if absent.
    /// Returns the previous weight if the edge existed.
    /// ** Panics if `u >= n || v >= n`, `u == v` or `w == INVALID_WEIGHT` **
    fn set_edge(&mut self, u: Node, v: Node, w: Weight) -> Option<Weight>;

    /// Adds the edge *(u,v)* with weight `w` to the graph.
    /// ** Panics if `u >= n || v >= n`, `u == v` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) {
        assert!(!self.try_add_edge(u, v, w))
    }

    /// Adds the edge `(u, v)` with weight `w` if it is not present yet.
    /// Returns *true* if the edge was present previously (it is left untouched then).
    /// ** Panics if `u >= n || v >= n` or `u == v` **
    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }

    /// Removes the edge *(u,v)* from the graph and returns its weight.
    /// ** Panics if the edge is not present or u, v >= n **
    fn remove_edge(&mut self, u: Node, v: Node) -> Weight {
        self.try_remove_edge(u, v)
            .unwrap_or_else(|| panic!("Edge ({u},{v}) is not present"))
    }

    /// Removes the edge *(u,v)* from the graph.
    /// Returns the weight of the removed edge or `None` if there was no such edge.
    /// ** Panics if u, v >= n **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight>;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over weighted edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}

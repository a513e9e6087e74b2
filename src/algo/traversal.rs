/*!
Graph traversal primitives.

This module provides:
- [`DepthFirstSearch`], a lazy depth-first preorder iterator driven by an explicit stack.
- A [`Traversal`] trait that exposes traversals directly as methods on graphs, including
  the depth-first visit numbering used to decide connectivity.

Neighbors are always explored in ascending order, so the preorder is exactly the one a
recursive depth-first search would produce.
*/

use super::*;

/// Depth-first preorder iterator.
///
/// Nodes are marked as visited when they are popped from the stack (not when pushed), and
/// the unvisited neighbors of a popped node are pushed in descending order. A node may thus
/// sit on the stack more than once, but it is yielded exactly once, and the yielded order
/// matches a recursive depth-first search visiting neighbors in ascending order.
pub struct DepthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<PredecessorOfNode>,
}

/// Compact representation of `(predecessor, node)` pairs yielded by
/// [`DepthFirstSearch::with_predecessors`].
///
/// The start node is reported as its own predecessor.
pub type PredecessorOfNode = (Node, Node);

impl<'a, G> DepthFirstSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());
        let mut stack = Vec::with_capacity(graph.len());
        stack.push((start, start));
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack,
        }
    }

    /// Turns the iterator into one that additionally yields the tree edge each node was reached by
    pub fn with_predecessors(self) -> impl Iterator<Item = PredecessorOfNode> + 'a {
        let mut search = self;
        std::iter::from_fn(move || search.next_with_predecessor())
    }

    /// Returns *true* if `u` was already yielded
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Consumes the (possibly partially executed) iterator and returns the set of all nodes
    /// it visits
    pub fn into_visited(mut self) -> NodeBitSet {
        while self.next().is_some() {}
        self.visited
    }

    fn next_with_predecessor(&mut self) -> Option<PredecessorOfNode> {
        loop {
            let (parent, u) = self.stack.pop()?;
            if self.visited.set_bit(u) {
                continue;
            }

            for v in self.graph.neighbors_of(u).rev() {
                if !self.visited.get_bit(v) {
                    self.stack.push((u, v));
                }
            }

            return Some((parent, u));
        }
    }
}

impl<G> Iterator for DepthFirstSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_predecessor().map(|(_, u)| u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            0,
            Some(self.graph.len() - self.visited.cardinality() as usize),
        )
    }
}

/// Traversal algorithms available directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first preorder**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightMatrix::from_edges(4, [(0, 2, 1), (2, 1, 1), (0, 3, 1)]);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 2, 1, 3]);
    /// ```
    fn dfs(&self, start: Node) -> DepthFirstSearch<'_, Self> {
        DepthFirstSearch::new(self, start)
    }

    /// Numbers the nodes in depth-first preorder starting at `start`.
    ///
    /// Entry `u` holds the position at which `u` was visited (`start` gets `0`), or
    /// `None` if `u` is not reachable from `start`.
    fn dfs_numbering(&self, start: Node) -> Vec<Option<Node>> {
        let mut numbering = vec![None; self.len()];
        for (order, u) in self.dfs(start).enumerate() {
            numbering[u as usize] = Some(order as Node);
        }
        numbering
    }
}

impl<G: AdjacencyList + Sized> Traversal for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    /// Recursive reference implementation
    fn recursive_dfs<G: AdjacencyList>(
        graph: &G,
        u: Node,
        visited: &mut NodeBitSet,
        order: &mut Vec<Node>,
    ) {
        visited.set_bit(u);
        order.push(u);
        for v in graph.neighbors_of(u) {
            if !visited.get_bit(v) {
                recursive_dfs(graph, v, visited, order);
            }
        }
    }

    #[test]
    fn dfs_matches_recursive_order() {
        let mut graph = WeightMatrix::new(7);
        graph.add_edges([
            (0, 4, 1),
            (0, 1, 1),
            (4, 2, 1),
            (2, 1, 1),
            (1, 5, 1),
            (3, 6, 1),
        ]);

        for start in graph.vertices() {
            let mut visited = graph.vertex_bitset_unset();
            let mut expected = Vec::new();
            recursive_dfs(&graph, start, &mut visited, &mut expected);

            assert_eq!(graph.dfs(start).collect_vec(), expected);
        }

        assert_eq!(graph.dfs(0).collect_vec(), vec![0, 1, 2, 4, 5]);
    }

    #[test]
    fn dfs_with_predecessors() {
        let graph = WeightMatrix::from_edges(5, [(0, 1, 1), (1, 2, 1), (0, 3, 1), (3, 4, 1)]);

        assert_eq!(
            graph.dfs(0).with_predecessors().collect_vec(),
            vec![(0, 0), (0, 1), (1, 2), (0, 3), (3, 4)]
        );
    }

    #[test]
    fn numbering() {
        let graph = WeightMatrix::from_edges(5, [(0, 3, 1), (3, 1, 1)]);

        assert_eq!(
            graph.dfs_numbering(0),
            vec![Some(0), Some(2), None, Some(1), None]
        );
        assert_eq!(graph.dfs_numbering(4), vec![None, None, None, None, Some(0)]);

        let visited = graph.dfs(1).into_visited();
        assert_eq!(visited.iter_set_bits().collect_vec(), vec![0, 1, 3]);
    }
}

use std::fmt::{Debug, Display};

use super::*;

/// A dense, undirected, edge-weighted graph.
///
/// Stores an `n x n` row-major matrix of cells. A cell is either absent (no edge) or holds the
/// weight of the edge; zero is a valid weight. The matrix is kept symmetric and its diagonal is
/// always absent.
///
/// # Example
/// ```
/// use wgraphs::prelude::*;
///
/// let mut g = WeightMatrix::new(3);
/// g.add_edge(0, 1, 4);
/// g.add_edge(1, 2, 0);
///
/// assert_eq!(g.weight_of(1, 0), Some(4));
/// assert_eq!(g.weight_of(2, 1), Some(0));
/// assert_eq!(g.weight_of(0, 2), None);
/// assert_eq!(g.number_of_edges(), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct WeightMatrix {
    n: NumNodes,
    cells: Vec<Option<OptionalWeight>>,
    num_edges: NumEdges,
}

impl WeightMatrix {
    /// Index of cell `(u, v)` in the row-major cell vector
    #[inline]
    fn index(&self, u: Node, v: Node) -> usize {
        assert!(
            u < self.n && v < self.n,
            "Node out of range: ({u},{v}) in graph with {} nodes",
            self.n
        );
        u as usize * self.n as usize + v as usize
    }

    /// Returns the row of `u`
    #[inline]
    fn row(&self, u: Node) -> &[Option<OptionalWeight>] {
        let n = self.n as usize;
        let start = u as usize * n;
        &self.cells[start..start + n]
    }

    /// Returns *true* if the matrix is symmetric and has an empty diagonal.
    /// Holds at all times; exposed for assertions in tests.
    pub fn is_symmetric(&self) -> bool {
        self.vertices().all(|u| {
            self.cells[self.index(u, u)].is_none()
                && self
                    .vertices()
                    .all(|v| self.cells[self.index(u, v)] == self.cells[self.index(v, u)])
        })
    }
}

impl GraphNodeOrder for WeightMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for WeightMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for WeightMatrix {
    fn neighbors_of(&self, u: Node) -> impl DoubleEndedIterator<Item = Node> + Clone + '_ {
        let row = self.row(u);
        (0..self.n).filter(move |&v| row[v as usize].is_some())
    }
}

impl AdjacencyTest for WeightMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.cells[self.index(u, v)].is_some()
    }
}

impl WeightedAdjacency for WeightMatrix {
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.cells[self.index(u, v)].map(|w| w.get())
    }

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, cell)| cell.map(|w| (v as Node, w.get())))
    }
}

impl GraphNew for WeightMatrix {
    fn new(n: NumNodes) -> Self {
        assert!(n > 0);
        Self {
            n,
            cells: vec![None; n as usize * n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for WeightMatrix {
    fn set_edge(&mut self, u: Node, v: Node, w: Weight) -> Option<Weight> {
        assert_ne!(u, v, "Self-loops are not supported");
        let Some(cell) = OptionalWeight::new(w) else {
            panic!("Weight {w} is reserved for absent edges");
        };

        let uv = self.index(u, v);
        let vu = self.index(v, u);
        let prev = self.cells[uv].replace(cell);
        self.cells[vu] = self.cells[uv];

        if prev.is_none() {
            self.num_edges += 1;
        }
        prev.map(|w| w.get())
    }

    fn try_add_edge(&mut self, u: Node, v: Node, w: Weight) -> bool {
        if self.has_edge(u, v) {
            true
        } else {
            self.set_edge(u, v, w);
            false
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight> {
        let uv = self.index(u, v);
        let vu = self.index(v, u);
        let prev = self.cells[uv].take();
        self.cells[vu] = None;

        if prev.is_some() {
            self.num_edges -= 1;
        }
        prev.map(|w| w.get())
    }
}

impl Debug for WeightMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightMatrix")
            .field("n", &self.n)
            .field("edges", &self.weighted_edges(true).collect::<Vec<_>>())
            .finish()
    }
}

/// Formats the graph in the adjacency-list text format read by [`crate::io::AdjacencyListReader`]
impl Display for WeightMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&crate::io::AdjacencyListDisplay(self), f)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn graph_new() {
        for n in 1..20 {
            let graph = WeightMatrix::new(n);

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            assert!(graph.vertices().all(|u| graph.is_isolated(u)));
            assert!(graph.is_symmetric());
        }
    }

    #[test]
    #[should_panic]
    fn graph_new_empty() {
        WeightMatrix::new(0);
    }

    #[test]
    fn edge_editing_keeps_symmetry() {
        let mut graph = WeightMatrix::new(5);

        graph.add_edge(0, 3, 7);
        graph.add_edge(4, 1, 0);
        assert!(graph.try_add_edge(3, 0, 9));
        assert_eq!(graph.weight_of(0, 3), Some(7));
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.is_symmetric());

        assert_eq!(graph.set_edge(3, 0, 2), Some(7));
        assert_eq!(graph.weight_of(0, 3), Some(2));
        assert_eq!(graph.set_edge(2, 3, 5), None);
        assert_eq!(graph.number_of_edges(), 3);
        assert!(graph.is_symmetric());

        assert_eq!(graph.try_remove_edge(1, 4), Some(0));
        assert_eq!(graph.try_remove_edge(1, 4), None);
        assert_eq!(graph.remove_edge(2, 3), 5);
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn neighbors_are_ascending_and_restartable() {
        let mut graph = WeightMatrix::new(6);
        graph.add_edges([(2, 5, 1), (2, 0, 3), (2, 3, 0), (1, 4, 2)]);

        let nbs = graph.neighbors_of(2);
        assert_eq!(nbs.clone().collect_vec(), vec![0, 3, 5]);
        assert_eq!(nbs.clone().rev().collect_vec(), vec![5, 3, 0]);
        assert_eq!(nbs.count(), 3);

        assert_eq!(
            graph.weighted_neighbors_of(2).collect_vec(),
            vec![(0, 3), (3, 0), (5, 1)]
        );
        assert_eq!(graph.degree_of(2), 3);
        assert_eq!(graph.degree_of(1), 1);
        assert_eq!(
            graph.edges(true).collect_vec(),
            vec![Edge(0, 2), Edge(1, 4), Edge(2, 3), Edge(2, 5)]
        );
        assert_eq!(graph.total_weight(), 6);
    }

    #[test]
    fn path_weights() {
        let mut graph = WeightMatrix::new(4);
        graph.add_edges([(0, 1, 2), (1, 2, 3), (2, 3, 4)]);

        assert_eq!(graph.path_weight([0, 1, 2, 3]), Some(9));
        assert_eq!(graph.path_weight([0]), Some(0));
        assert_eq!(graph.path_weight([0, 0]), Some(0));
        assert_eq!(graph.path_weight([0, 2]), None);
    }

    #[test]
    #[should_panic]
    fn self_loops_are_rejected() {
        let mut graph = WeightMatrix::new(3);
        graph.add_edge(1, 1, 1);
    }

    #[test]
    #[should_panic]
    fn reserved_weight_is_rejected() {
        let mut graph = WeightMatrix::new(3);
        graph.add_edge(0, 1, INVALID_WEIGHT);
    }
}

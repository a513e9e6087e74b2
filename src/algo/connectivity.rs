use itertools::Itertools;

use super::*;

/// Connectivity queries on undirected graphs
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns *true* if every node is reachable from node `0`.
    ///
    /// The nodes are numbered in depth-first order starting at `0`; the graph is connected
    /// exactly if every node receives a number.
    ///
    /// # Example
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = WeightMatrix::from_edges(3, [(0, 1, 5)]);
    /// assert!(!g.is_connected());
    ///
    /// g.add_edge(2, 1, 3);
    /// assert!(g.is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        self.dfs_numbering(0).iter().all(Option::is_some)
    }

    /// Returns the connected components of the graph, each sorted ascendingly and ordered
    /// by their smallest node
    fn connected_components(&self) -> Vec<Vec<Node>> {
        let mut assigned = self.vertex_bitset_unset();
        let mut components = Vec::new();

        for u in self.vertices() {
            if assigned.get_bit(u) {
                continue;
            }

            let component = self.dfs(u).sorted_unstable().collect_vec();
            assigned.set_bits(component.iter().copied());
            components.push(component);
        }

        components
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    #[test]
    fn isolated_node_is_not_connected() {
        let mut graph = WeightMatrix::new(4);
        graph.connect_path([0, 1, 2], 1);
        assert!(!graph.is_connected());
        assert_eq!(graph.connected_components(), vec![vec![0, 1, 2], vec![3]]);

        graph.add_edge(3, 0, 0);
        assert!(graph.is_connected());
    }

    #[test]
    fn single_node_is_connected() {
        assert!(WeightMatrix::new(1).is_connected());
        assert!(!WeightMatrix::new(2).is_connected());
    }

    #[test]
    fn complete_graphs_are_connected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in 1..12 {
            let graph = WeightMatrix::complete(rng, n, 1..=100);
            assert!(graph.is_connected());
            assert_eq!(graph.connected_components().len(), 1);
        }
    }

    #[test]
    fn components_partition_the_nodes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..20 {
            let graph = WeightMatrix::gnp(rng, 15, 0.1, 1..=10);
            let components = graph.connected_components();

            let mut nodes = components.iter().flatten().copied().collect_vec();
            nodes.sort_unstable();
            assert_eq!(nodes, graph.vertices().collect_vec());

            assert_eq!(graph.is_connected(), components.len() == 1);
            for component in &components {
                for &u in component {
                    for v in graph.neighbors_of(u) {
                        assert!(component.contains(&v));
                    }
                }
            }
        }
    }
}

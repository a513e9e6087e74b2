/*!
# Metric Graphs

A graph is *metric* if it is complete and every edge is a shortest path between its endpoints,
i.e. no detour `i -> k -> j` is ever cheaper than the direct edge `i -> j`. Metric graphs are
the inputs on which the spanning-tree tour of [`TravelingSalesman::approximate_tour`] is
guaranteed to be at most twice as long as an optimal tour.

Any connected graph can be turned into a metric graph by replacing every direct edge by the
shortest-path distance between its endpoints (the *metric closure*), see
[`Metric::make_metric`].

# Example
```
use wgraphs::{prelude::*, algo::*};

let mut g = WeightMatrix::from_edges(3, [(0, 1, 2), (1, 2, 3)]);
assert!(!g.is_completely_connected());

g.make_metric();
assert!(g.is_metric());
assert_eq!(g.weight_of(0, 2), Some(5));
```
*/

use itertools::Itertools;
use tracing::{debug, info};

use super::*;

/// Metric analysis and metric closure
pub trait Metric: WeightedAdjacency + Sized {
    /// Returns *true* if every pair of distinct nodes is connected by an edge
    fn is_completely_connected(&self) -> bool {
        let n = self.number_of_nodes();
        self.degrees().all(|d| d + 1 == n)
    }

    /// Returns the first edge `(i, j)` (ordered by `i`, then `j`) whose weight exceeds the
    /// shortest-path distance between `i` and `j`, or `None` if there is none.
    fn find_triangle_violation(&self) -> Option<WeightedEdge> {
        for i in self.vertices() {
            let distances = self.shortest_distances(i);

            if let Some((j, w)) = self
                .weighted_neighbors_of(i)
                .find(|&(j, w)| distances[j as usize] != Some(w))
            {
                debug!(
                    "Edge ({i},{j}) has weight {w} but its endpoints are at distance {:?}",
                    distances[j as usize]
                );
                return Some(WeightedEdge(i, j, w));
            }
        }

        None
    }

    /// Returns *true* if no edge can be bypassed by a cheaper path
    fn obeys_triangle_inequality(&self) -> bool {
        self.find_triangle_violation().is_none()
    }

    /// Returns *true* if the graph is complete and obeys the triangle inequality
    fn is_metric(&self) -> bool {
        self.is_completely_connected() && self.obeys_triangle_inequality()
    }

    /// Replaces every edge by the shortest-path distance between its endpoints and inserts
    /// edges between all pairs connected by some path.
    ///
    /// Pairs in different components remain without an edge, so only a connected graph
    /// becomes metric.
    fn make_metric(&mut self)
    where
        Self: GraphEdgeEditing,
    {
        let distances = self
            .vertices()
            .map(|i| self.shortest_distances(i))
            .collect_vec();

        let mut num_changed = 0;
        for i in self.vertices() {
            for (j, dist) in distances[i as usize].iter().enumerate() {
                let j = j as Node;
                if j <= i {
                    continue;
                }

                if let Some(dist) = *dist {
                    if self.set_edge(i, j, dist) != Some(dist) {
                        num_changed += 1;
                    }
                }
            }
        }

        info!("Metric closure inserted or shortened {num_changed} edges");
    }
}

impl<G> Metric for G where G: WeightedAdjacency + Sized {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    #[test]
    fn complete_connectivity() {
        assert!(WeightMatrix::new(1).is_completely_connected());
        assert!(!WeightMatrix::new(2).is_completely_connected());

        let mut graph = WeightMatrix::new(4);
        graph.connect_clique([0, 1, 2, 3], 1);
        assert!(graph.is_completely_connected());

        graph.remove_edge(1, 3);
        assert!(!graph.is_completely_connected());
    }

    #[test]
    fn triangle_violation() {
        // 0 -> 2 directly costs 10, via 1 only 3
        let mut graph = WeightMatrix::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 10)]);

        assert!(graph.is_completely_connected());
        assert_eq!(graph.find_triangle_violation(), Some(WeightedEdge(0, 2, 10)));
        assert!(!graph.obeys_triangle_inequality());
        assert!(!graph.is_metric());

        graph.set_edge(0, 2, 3);
        assert!(graph.obeys_triangle_inequality());
        assert!(graph.is_metric());
    }

    #[test]
    fn zero_weight_shortcut_violates() {
        let graph = WeightMatrix::from_edges(3, [(0, 1, 0), (1, 2, 0), (0, 2, 1)]);
        assert_eq!(graph.find_triangle_violation(), Some(WeightedEdge(0, 2, 1)));
    }

    #[test]
    fn incomplete_graph_is_not_metric() {
        let graph = WeightMatrix::from_edges(3, [(0, 1, 1), (1, 2, 1)]);
        assert!(graph.obeys_triangle_inequality());
        assert!(!graph.is_metric());
    }

    #[test]
    fn make_metric_on_path() {
        let mut graph = WeightMatrix::new(4);
        graph.connect_path([0, 1, 2, 3], 2);
        graph.make_metric();

        assert!(graph.is_metric());
        assert!(graph.is_symmetric());
        assert_eq!(graph.weight_of(0, 3), Some(6));
        assert_eq!(graph.weight_of(1, 3), Some(4));
        assert_eq!(graph.weight_of(0, 1), Some(2));
    }

    #[test]
    fn make_metric_keeps_components_apart() {
        let mut graph = WeightMatrix::from_edges(4, [(0, 1, 5), (2, 3, 1)]);
        graph.make_metric();

        assert_eq!(graph.number_of_edges(), 2);
        assert!(!graph.has_edge(0, 2));
        assert!(graph.obeys_triangle_inequality());
        assert!(!graph.is_metric());
    }

    #[test]
    fn make_metric_random_connected_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in 1..=10 {
            for _ in 0..10 {
                let mut graph = WeightMatrix::gnp(rng, n, 0.4, 0..=30);
                if !graph.is_connected() {
                    continue;
                }

                let before = graph.vertices().map(|u| graph.shortest_distances(u)).collect_vec();
                graph.make_metric();

                assert!(graph.is_completely_connected());
                assert!(graph.obeys_triangle_inequality());
                assert!(graph.is_symmetric());

                let after = graph.vertices().map(|u| graph.shortest_distances(u)).collect_vec();
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn random_metric_generator_is_metric() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);
        for n in 1..=8 {
            assert!(WeightMatrix::random_metric(rng, n, 1..=50).is_metric());
        }
    }
}

/*!
# Traveling Salesman Tours

Two ways of finding a closed tour that starts and ends at node `0` and visits every other node
exactly once:

- [`TravelingSalesman::best_tour`] searches all simple paths from `0` by backtracking and
  returns a shortest tour. The search is exponential in the number of nodes.
- [`TravelingSalesman::approximate_tour`] walks a minimum spanning tree in depth-first preorder
  and returns to `0`. On metric graphs the result is at most twice as long as an optimal tour.

# Example
```
use wgraphs::{prelude::*, algo::*};

let g = WeightMatrix::from_edges(
    4,
    [(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 5), (1, 3, 6)],
);

let tour = g.best_tour().unwrap();
assert_eq!(tour.length(), 10);
assert_eq!(tour.to_string(), "10: 0 -> 1 -> 2 -> 3 -> 0");
```
*/

use std::fmt::Display;

use itertools::Itertools;
use tracing::{debug, info};

use super::*;

/// A closed walk starting and ending at node `0` together with its total weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    nodes: Vec<Node>,
    length: Weight,
}

impl Tour {
    /// Nodes in visiting order; the first and last entry are both `0`
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Total weight of all steps
    pub fn length(&self) -> Weight {
        self.length
    }

    /// Returns an iterator over the steps of the tour
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.iter().tuple_windows().map(|(&u, &v)| Edge(u, v))
    }
}

/// Formats as `length: 0 -> a -> ... -> 0`
impl Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.length, self.nodes.iter().join(" -> "))
    }
}

/// Tour computations on weighted graphs
pub trait TravelingSalesman: WeightedAdjacency + Sized {
    /// Returns a shortest tour or `None` if the graph has no Hamiltonian cycle.
    /// Among several shortest tours, the first one in lexicographic order of the visited nodes
    /// is returned. Graphs with less than three nodes have no tour.
    fn best_tour(&self) -> Option<Tour> {
        ExactTourSearch::new(self).compute()
    }

    /// Returns the preorder tour of a minimum spanning tree rooted at `0`.
    ///
    /// The length is measured with the direct edges of `self` between consecutive nodes. Returns
    /// `None` if the spanning tree does not reach every node or if two consecutive nodes of the
    /// walk are not adjacent. Whether `self` is metric is not checked.
    fn approximate_tour(&self) -> Option<Tour>
    where
        Self: GraphEdgeEditing,
    {
        let tree = self.minimum_spanning_tree();
        let mut nodes = tree.dfs(0).collect_vec();
        if nodes.len() != self.len() {
            debug!(
                "Spanning tree reaches only {} of {} nodes",
                nodes.len(),
                self.len()
            );
            return None;
        }
        nodes.push(0);

        let length = self.path_weight(nodes.iter().copied())?;
        Some(Tour { nodes, length })
    }
}

impl<G> TravelingSalesman for G where G: WeightedAdjacency + Sized {}

/// Entry of the explicit backtracking stack
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: Node,
    /// Smallest neighbor that was not tried yet
    next: Node,
    /// Length of the path up to `node`
    length: Weight,
}

/// Exhaustive search for a shortest tour.
///
/// Paths are extended with neighbors in ascending order and only replaced by strictly shorter
/// tours, so the result does not depend on whether pruning is enabled.
pub struct ExactTourSearch<'a, G>
where
    G: WeightedAdjacency,
{
    graph: &'a G,
    prune: bool,
}

impl<'a, G> ExactTourSearch<'a, G>
where
    G: WeightedAdjacency,
{
    /// Creates a new search with pruning enabled
    pub fn new(graph: &'a G) -> Self {
        Self { graph, prune: true }
    }

    /// If enabled, paths that are already at least as long as the best tour found so far are
    /// not extended any further
    pub fn prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Runs the search
    pub fn compute(self) -> Option<Tour> {
        let n = self.graph.len();
        if n < 3 {
            return None;
        }

        let mut on_path = self.graph.vertex_bitset_unset();
        on_path.set_bit(0);

        let mut frames = Vec::with_capacity(n);
        frames.push(Frame {
            node: 0,
            next: 0,
            length: 0,
        });

        let mut best: Option<Tour> = None;
        let mut num_tours = 0usize;

        loop {
            let depth = frames.len();
            let Some(frame) = frames.last_mut() else {
                break;
            };
            let Frame { node: u, length, .. } = *frame;

            if depth == n {
                let closed = self
                    .graph
                    .weight_of(u, 0)
                    .and_then(|w| length.checked_add(w));

                if let Some(total) = closed {
                    num_tours += 1;
                    if best.as_ref().is_none_or(|tour| total < tour.length) {
                        let nodes = frames.iter().map(|f| f.node).chain([0]).collect_vec();
                        debug!("Found tour of length {total}");
                        best = Some(Tour {
                            nodes,
                            length: total,
                        });
                    }
                }

                frames.pop();
                on_path.clear_bit(u);
                continue;
            }

            let start = frame.next;
            let Some((v, w)) = self
                .graph
                .weighted_neighbors_of(u)
                .find(|&(v, _)| v >= start && !on_path.get_bit(v))
            else {
                frames.pop();
                on_path.clear_bit(u);
                continue;
            };
            frame.next = v + 1;

            let Some(extended) = length.checked_add(w) else {
                continue;
            };
            if self.prune && best.as_ref().is_some_and(|tour| extended >= tour.length) {
                continue;
            }

            on_path.set_bit(v);
            frames.push(Frame {
                node: v,
                next: 0,
                length: extended,
            });
        }

        info!("Exact tour search closed {num_tours} tours");
        best
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    fn four_cycle_with_chords() -> WeightMatrix {
        WeightMatrix::from_edges(
            4,
            [(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 0, 4), (0, 2, 5), (1, 3, 6)],
        )
    }

    #[test]
    fn known_instance() {
        let graph = four_cycle_with_chords();

        let tour = graph.best_tour().unwrap();
        assert_eq!(tour.nodes(), &[0, 1, 2, 3, 0]);
        assert_eq!(tour.length(), 10);
        assert_eq!(
            tour.edges().collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 0)]
        );

        let unpruned = ExactTourSearch::new(&graph).prune(false).compute();
        assert_eq!(unpruned, Some(tour));
    }

    #[test]
    fn ties_keep_first_tour() {
        let mut graph = WeightMatrix::new(4);
        graph.connect_clique([0, 1, 2, 3], 1);

        let tour = graph.best_tour().unwrap();
        assert_eq!(tour.nodes(), &[0, 1, 2, 3, 0]);
        assert_eq!(tour.length(), 4);
    }

    #[test]
    fn no_tour() {
        assert_eq!(WeightMatrix::new(1).best_tour(), None);
        assert_eq!(WeightMatrix::from_edges(2, [(0, 1, 1)]).best_tour(), None);

        // a path has no Hamiltonian cycle
        let mut graph = WeightMatrix::new(5);
        graph.connect_path([0, 1, 2, 3, 4], 1);
        assert_eq!(graph.best_tour(), None);

        // neither has a star
        let graph = WeightMatrix::from_edges(4, [(0, 1, 1), (0, 2, 1), (0, 3, 1)]);
        assert_eq!(graph.best_tour(), None);
    }

    #[test]
    fn triangle() {
        let graph = WeightMatrix::from_edges(3, [(0, 1, 2), (1, 2, 0), (0, 2, 3)]);
        let tour = graph.best_tour().unwrap();
        assert_eq!(tour.to_string(), "5: 0 -> 1 -> 2 -> 0");
    }

    #[test]
    fn random_graphs_against_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(19);

        for n in 1..=7 {
            for _ in 0..10 {
                let graph = WeightMatrix::gnp(rng, n, 0.7, 0..=25);

                let best = graph.best_tour();
                assert_eq!(best.as_ref().map(Tour::length), brute_force_tour_length(&graph));

                if let Some(tour) = best {
                    assert_eq!(tour.nodes().len(), n as usize + 1);
                    assert_eq!(graph.path_weight(tour.nodes().iter().copied()), Some(tour.length()));
                    assert_eq!(
                        tour.nodes().iter().copied().sorted_unstable().dedup().count(),
                        n as usize
                    );
                }

                assert_eq!(
                    ExactTourSearch::new(&graph).prune(false).compute(),
                    graph.best_tour()
                );
            }
        }
    }

    #[test]
    fn approximation_on_known_instance() {
        let tour = four_cycle_with_chords().approximate_tour().unwrap();
        assert_eq!(tour.to_string(), "10: 0 -> 1 -> 2 -> 3 -> 0");
    }

    #[test]
    fn approximation_of_single_node() {
        let tour = WeightMatrix::new(1).approximate_tour().unwrap();
        assert_eq!(tour.nodes(), &[0, 0]);
        assert_eq!(tour.length(), 0);
    }

    #[test]
    fn approximation_requires_consecutive_edges() {
        let mut graph = WeightMatrix::new(4);
        graph.connect_path([0, 1, 2, 3], 1);
        assert_eq!(graph.approximate_tour(), None);

        let graph = WeightMatrix::from_edges(3, [(0, 1, 1)]);
        assert_eq!(graph.approximate_tour(), None);
    }

    #[test]
    fn approximation_is_within_factor_two_on_metric_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for n in 3..=7 {
            for _ in 0..10 {
                let graph = WeightMatrix::random_metric(rng, n, 1..=40);
                assert!(graph.is_metric());

                let exact = graph.best_tour().unwrap();
                let approx = graph.approximate_tour().unwrap();

                assert_eq!(approx.nodes().len(), n as usize + 1);
                assert!(approx.length() >= exact.length());
                assert!(approx.length() <= 2 * exact.length());
            }
        }
    }
}

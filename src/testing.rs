//! Exhaustive reference implementations used to cross-check the algorithms on small graphs.

use itertools::Itertools;

use crate::{algo::*, prelude::*};

/// Weight of a minimum spanning tree found by trying every set of `n - 1` edges,
/// or `None` if the graph is disconnected
pub fn brute_force_mst_weight<G>(graph: &G) -> Option<Weight>
where
    G: WeightedAdjacency,
{
    let n = graph.number_of_nodes();
    graph
        .weighted_edges(true)
        .combinations(n as usize - 1)
        .filter(|edges| WeightMatrix::from_edges(n, edges.iter()).is_connected())
        .map(|edges| edges.iter().map(|e| e.weight()).sum())
        .min()
}

/// Shortest distances from `source` found by enumerating all simple paths
pub fn brute_force_distances<G>(graph: &G, source: Node) -> Vec<Option<Weight>>
where
    G: WeightedAdjacency,
{
    fn explore<G: WeightedAdjacency>(
        graph: &G,
        u: Node,
        length: Weight,
        on_path: &mut NodeBitSet,
        best: &mut [Option<Weight>],
    ) {
        let entry = &mut best[u as usize];
        if entry.is_none_or(|b| length < b) {
            *entry = Some(length);
        }

        for (v, w) in graph.weighted_neighbors_of(u) {
            if !on_path.set_bit(v) {
                explore(graph, v, length + w, on_path, best);
                on_path.clear_bit(v);
            }
        }
    }

    let mut best = vec![None; graph.len()];
    let mut on_path = graph.vertex_bitset_unset();
    on_path.set_bit(source);
    explore(graph, source, 0, &mut on_path, &mut best);
    best
}

/// Length of a shortest Hamiltonian cycle found by trying every permutation of `1..n`,
/// or `None` if there is none
pub fn brute_force_tour_length<G>(graph: &G) -> Option<Weight>
where
    G: WeightedAdjacency,
{
    let n = graph.number_of_nodes();
    if n < 3 {
        return None;
    }

    (1..n)
        .permutations(n as usize - 1)
        .filter_map(|order| {
            graph.path_weight(std::iter::once(0).chain(order).chain(std::iter::once(0)))
        })
        .min()
}

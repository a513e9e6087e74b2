/*!
# Random Trees

Generator for random weighted **trees**. Nodes are attached one after another: node `v > 0`
is connected to a node `u < v` chosen uniformly at random. The result is therefore always
connected and contains exactly `n - 1` edges, which makes it a convenient backbone for
connected test instances.

# Examples

```
use wgraphs::gens::*;

let mut rng = rand::rng();
let edges = RandomTree::new().nodes(5).weights(1..=9).generate(&mut rng);

assert_eq!(edges.len(), 4); // Always n-1 edges
```
*/

use std::ops::RangeInclusive;

use super::*;

/// Generator for a random recursive tree with uniformly drawn weights
#[derive(Debug, Clone)]
pub struct RandomTree {
    n: NumNodes,
    weights: RangeInclusive<Weight>,
}

impl Default for RandomTree {
    fn default() -> Self {
        Self {
            n: 0,
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl RandomTree {
    /// Creates a new tree generator with default settings.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for RandomTree {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl WeightRangeGen for RandomTree {
    fn set_weights(&mut self, weights: RangeInclusive<Weight>) {
        assert_valid_weight_range(&weights);
        self.weights = weights;
    }
}

impl GraphGenerator for RandomTree {
    /// Yields the edge attaching node `v` for every `v` in `1..n`; edges are normalized
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        let weights = self.weights.clone();

        (1..self.n).map(move |v| {
            let u = rng.random_range(0..v);
            WeightedEdge(u, v, rng.random_range(weights.clone()))
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::algo::*;

    #[test]
    fn trees_are_connected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(43);

        for n in 1..30 {
            let tree = WeightMatrix::random_tree(rng, n, 0..=10);

            assert_eq!(tree.number_of_edges() + 1, n as NumEdges);
            assert!(tree.is_connected());
            assert!(tree.weighted_edges(true).all(|e| e.weight() <= 10));

            // a tree is its own minimum spanning tree
            assert_eq!(tree.minimum_spanning_tree(), tree);
        }
    }
}

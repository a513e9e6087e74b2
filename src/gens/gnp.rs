use std::ops::RangeInclusive;

use super::*;

/// `G(n,p)` graphs contain every possible edge `{u, v}` with `u != v` with probability `p`
/// independent from each other. Each present edge gets a weight drawn uniformly from the
/// configured range.
#[derive(Debug, Clone)]
pub struct Gnp {
    n: NumNodes,
    p: Option<f64>,
    weights: RangeInclusive<Weight>,
}

impl Default for Gnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: None,
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "Invalid probability {prob}");
        self.p = Some(prob);
        self
    }
}

impl NumNodesGen for Gnp {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl WeightRangeGen for Gnp {
    fn set_weights(&mut self, weights: RangeInclusive<Weight>) {
        assert_valid_weight_range(&weights);
        self.weights = weights;
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges in sorted order
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        let Some(p) = self.p else {
            panic!("Probability of Gnp was not set!");
        };
        let n = self.n;
        let weights = self.weights.clone();

        (0..n)
            .flat_map(move |u| (u + 1..n).map(move |v| Edge(u, v)))
            .filter_map(move |Edge(u, v)| {
                if rng.random_bool(p) {
                    Some(Edge(u, v).with_weight(rng.random_range(weights.clone())))
                } else {
                    None
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(37);

        for n in 1..10 {
            let none = Gnp::new().nodes(n).prob(0.0).generate(rng);
            assert!(none.is_empty());

            let all = Gnp::new().nodes(n).prob(1.0).weights(5..=5).generate(rng);
            assert_eq!(all.len() as NumNodes, n * (n - 1) / 2);
            assert!(all.iter().all(|e| e.is_normalized() && e.weight() == 5));
            assert!(all.iter().tuple_windows().all(|(a, b)| a.edge() < b.edge()));
        }
    }

    #[test]
    fn weights_stay_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);
        let edges = Gnp::new().nodes(30).prob(0.5).weights(0..=3).generate(rng);

        assert!(!edges.is_empty());
        assert!(edges.iter().all(|e| e.weight() <= 3 && !e.edge().is_loop()));
    }

    #[test]
    #[should_panic]
    fn reserved_weight_range() {
        let _ = Gnp::new().weights(0..=INVALID_WEIGHT);
    }
}

/*!
# Graph Generators

This module provides a small suite of traits and builder patterns for constructing random
**weighted** graph generators.

Each generator allows parameterized control over the structure of the graph (number of nodes,
edge probability) and over the range edge weights are drawn from. Generators can produce
either a complete collection of edges or a stream of them through iterators.

The typical usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).weights(1..=10)`).
3. Generate edges via `generate()` or `stream()`.

In addition, the [`RandomGraph`] trait abstracts the generation of whole graph instances into
reusable constructors:
- `complete`: every pair of nodes is connected
- `gnp`: Erdős–Rényi model with independent edge probability
- `random_tree`: a uniformly attached random tree, hence always connected
- `random_metric`: the metric closure of a random complete graph

# Example
```
use rand::SeedableRng;
use wgraphs::{prelude::*, algo::*, gens::*};

let rng = &mut rand::rngs::StdRng::seed_from_u64(1);

let g = WeightMatrix::random_metric(rng, 6, 1..=20);
assert!(g.is_metric());

let edges = Gnp::new().nodes(10).prob(0.5).weights(3..=3).generate(rng);
assert!(edges.iter().all(|e| e.weight() == 3 && e.is_normalized()));
```
*/

use std::ops::RangeInclusive;

use rand::Rng;

use crate::{algo::Metric, prelude::*};

mod gnp;
mod substructures;
mod tree;

pub use gnp::*;
pub use substructures::*;
pub use tree::*;

/// Default range edge weights are drawn from
pub const DEFAULT_WEIGHTS: RangeInclusive<Weight> = 1..=100;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes, consuming and returning `self` for chaining.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the range of edge weights.
pub trait WeightRangeGen: Sized {
    /// Sets the (inclusive) range weights are drawn from uniformly.
    /// ** Panics if the range is empty or contains `INVALID_WEIGHT` **
    fn set_weights(&mut self, weights: RangeInclusive<Weight>);

    /// Sets the weight range, consuming and returning `self` for chaining.
    fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        self.set_weights(weights);
        self
    }
}

/// Asserts that `weights` can be sampled and never yields the absent marker
fn assert_valid_weight_range(weights: &RangeInclusive<Weight>) {
    assert!(
        !weights.is_empty() && is_valid_weight(*weights.end()),
        "Invalid weight range {weights:?}"
    );
}

/// General trait for a configurable random weighted edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges. All edges are normalized
/// and free of self-loops.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<WeightedEdge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng;
}

/// Trait for building full graph instances from common random models.
///
/// Requires that the implementing type supports construction from a set of edges.
/// Provided implementations use the corresponding edge generators under the hood.
pub trait RandomGraph: Sized {
    /// Creates a complete graph with random weights.
    fn complete<R>(rng: &mut R, n: NumNodes, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng;

    /// Creates a random `G(n,p)` graph using edge probability `p`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng;

    /// Creates a random tree in which every node `v > 0` is attached to a uniformly chosen
    /// node `u < v`.
    fn random_tree<R>(rng: &mut R, n: NumNodes, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng;

    /// Creates a complete graph with random weights and replaces every edge by the
    /// shortest-path distance between its endpoints. The result is always metric.
    fn random_metric<R>(rng: &mut R, n: NumNodes, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphEdgeEditing + WeightedAdjacency,
{
    fn complete<R>(rng: &mut R, n: NumNodes, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng,
    {
        Self::gnp(rng, n, 1.0, weights)
    }

    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnp::new().nodes(n).prob(p).weights(weights).stream(rng),
        )
    }

    fn random_tree<R>(rng: &mut R, n: NumNodes, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, RandomTree::new().nodes(n).weights(weights).stream(rng))
    }

    fn random_metric<R>(rng: &mut R, n: NumNodes, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng,
    {
        let mut graph = Self::complete(rng, n, weights);
        graph.make_metric();
        graph
    }
}

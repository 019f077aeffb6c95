//! Fixture generators for graph property tests.
//!
//! Every generator is driven by a seeded [`SmallRng`] so a failing proptest
//! case can be replayed as a targeted rstest case with the same seed.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::WeightedEdge;

use super::types::{FixtureConfig, GraphFixture, WeightDistribution};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 8;
/// Cap applied to dense graphs to bound the quadratic edge count.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates fixtures across all weight distributions.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> GraphFixture {
    let config = FixtureConfig::load();
    let max_vertices = config.max_vertices;
    let mut edges = EdgeList::default();

    let vertex_count = match distribution {
        WeightDistribution::Unique => {
            let count = rng.gen_range(MIN_VERTICES..=max_vertices);
            edges.random_pairs(0, count, (0.15, 0.5), rng, continuous_weight);
            count
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            let count = rng.gen_range(MIN_VERTICES..=max_vertices);
            edges.random_pairs(0, count, (0.3, 0.7), rng, |r| {
                pool[r.gen_range(0..pool.len())]
            });
            count
        }
        WeightDistribution::Sparse => {
            let count = rng.gen_range(MIN_VERTICES..=max_vertices);
            edges.spanning_tree(0, count, rng);
            edges.extra_edges(count, count / 2, rng);
            count
        }
        WeightDistribution::Dense => {
            let count = rng.gen_range(MIN_VERTICES..=max_vertices.min(DENSE_MAX_VERTICES));
            edges.random_pairs(0, count, (0.7, 0.95), rng, continuous_weight);
            count
        }
        WeightDistribution::Disconnected => {
            let components = rng.gen_range(2..=4);
            let mut offset = 0;
            for _ in 0..components {
                let size = rng.gen_range(1..=(max_vertices / components).max(2));
                edges.random_pairs(offset, size, (0.3, 0.8), rng, continuous_weight);
                offset += size;
            }
            offset
        }
        WeightDistribution::Multigraph => {
            let count = rng.gen_range(MIN_VERTICES..=max_vertices);
            edges.spanning_tree(0, count, rng);
            edges.extra_edges(count, count / 4, rng);
            edges.self_loops(count, rng);
            edges.parallel_copies(rng);
            count
        }
    };

    GraphFixture {
        vertex_count,
        edges: edges.0,
        distribution,
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

#[derive(Default)]
struct EdgeList(Vec<WeightedEdge<usize>>);

impl EdgeList {
    fn push(&mut self, left: usize, right: usize, weight: f64) {
        self.0.push(WeightedEdge::new(left, right, weight));
    }

    /// Adds each pair in `offset..offset + size` with a sampled probability.
    fn random_pairs(
        &mut self,
        offset: usize,
        size: usize,
        probability: (f64, f64),
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> f64,
    ) {
        let probability = rng.gen_range(probability.0..=probability.1);
        for left in offset..offset + size {
            for right in (left + 1)..offset + size {
                if rng.gen_bool(probability) {
                    let value = weight(rng);
                    self.push(left, right, value);
                }
            }
        }
    }

    /// Adds a random spanning tree over `offset..offset + size`.
    fn spanning_tree(&mut self, offset: usize, size: usize, rng: &mut SmallRng) {
        let mut order: Vec<usize> = (offset..offset + size).collect();
        for i in (1..order.len()).rev() {
            order.swap(i, rng.gen_range(0..=i));
        }
        for pair in order.windows(2) {
            let weight = continuous_weight(rng);
            // Alternate orientation so reversed endpoints are exercised.
            if rng.gen_bool(0.5) {
                self.push(pair[0], pair[1], weight);
            } else {
                self.push(pair[1], pair[0], weight);
            }
        }
    }

    fn extra_edges(&mut self, vertex_count: usize, count: usize, rng: &mut SmallRng) {
        for _ in 0..count {
            let left = rng.gen_range(0..vertex_count);
            let right = rng.gen_range(0..vertex_count);
            if left != right {
                let weight = continuous_weight(rng);
                self.push(left, right, weight);
            }
        }
    }

    fn self_loops(&mut self, vertex_count: usize, rng: &mut SmallRng) {
        for _ in 0..rng.gen_range(1..=3) {
            let vertex = rng.gen_range(0..vertex_count);
            let weight = rng.gen_range(0.0..10.0);
            self.push(vertex, vertex, weight);
        }
    }

    /// Duplicates random existing edges with new weights.
    fn parallel_copies(&mut self, rng: &mut SmallRng) {
        if self.0.is_empty() {
            return;
        }
        for _ in 0..rng.gen_range(1..=4) {
            let (left, right, _) = self.0[rng.gen_range(0..self.0.len())].clone().into_parts();
            let weight = continuous_weight(rng);
            self.push(right, left, weight);
        }
    }
}

impl Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            1 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
            2 => Just(Self::Multigraph),
        ]
        .boxed()
    }
}

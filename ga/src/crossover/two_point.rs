//! Two-point crossover.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chromosome::Chromosome;
use crate::traits::crossover::CrossoverOperator;

/// Draws two points in `[0, len)`, orders them `start <= end` and swaps
/// the gene segment `[start, end)` between the parents; outside the
/// segment each child equals its own parent.
pub struct TwoPointCrossover {
    rng: StdRng,
}

impl TwoPointCrossover {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CrossoverOperator for TwoPointCrossover {
    fn crossover(&mut self, first: &Chromosome, second: &Chromosome) -> (Chromosome, Chromosome) {
        let length = first.len();
        let mut child_one = first.clone();
        let mut child_two = second.clone();

        let a = self.rng.gen_range(0..length);
        let b = self.rng.gen_range(0..length);
        let (start, end) = if a < b { (a, b) } else { (b, a) };

        for i in start..end {
            child_one.set_gene(i, second.gene(i));
            child_two.set_gene(i, first.gene(i));
        }

        (child_one, child_two)
    }
}

//! Single-point crossover.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chromosome::Chromosome;
use crate::traits::crossover::CrossoverOperator;

/// Draws one cut point in `[0, len)`; the first child takes the first
/// parent's genes before the cut and the second parent's genes from the
/// cut onward, the second child is the complementary swap.
pub struct SinglePointCrossover {
    rng: StdRng,
}

impl SinglePointCrossover {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CrossoverOperator for SinglePointCrossover {
    fn crossover(&mut self, first: &Chromosome, second: &Chromosome) -> (Chromosome, Chromosome) {
        let length = first.len();
        let mut child_one = first.clone();
        let mut child_two = second.clone();

        let point = self.rng.gen_range(0..length);
        for i in point..length {
            child_one.set_gene(i, second.gene(i));
            child_two.set_gene(i, first.gene(i));
        }

        (child_one, child_two)
    }
}

//! Uniform-random single-gene mutation.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chromosome::Chromosome;
use crate::traits::mutation::MutationOperator;

/// Overwrites one random position with one random color in `[0, len)`.
/// Exactly one gene changes position per call (possibly to the value it
/// already held).
pub struct RandomizeGeneMutation {
    rng: StdRng,
}

impl RandomizeGeneMutation {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MutationOperator for RandomizeGeneMutation {
    fn mutate(&mut self, chromosome: &mut Chromosome) {
        let length = chromosome.len();
        let position = self.rng.gen_range(0..length);
        let color = self.rng.gen_range(0..length as u32);
        chromosome.set_gene(position, color);
    }
}

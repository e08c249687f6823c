//! Segment inversion operator.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chromosome::Chromosome;

/// Reverses a random contiguous gene segment in place.
///
/// Two indices are drawn with replacement over `[0, len]`, ordered as
/// `start <= end`, and the segment `[start, end)` of the caller's genome
/// is reversed through its backing storage, so the caller always
/// observes the reversal after the call returns.
pub struct InversionOperator {
    rng: StdRng,
}

impl InversionOperator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn inverse(&mut self, chromosome: &mut Chromosome) {
        let length = chromosome.len();
        let a = self.rng.gen_range(0..=length);
        let b = self.rng.gen_range(0..=length);
        let (start, end) = if a < b { (a, b) } else { (b, a) };

        chromosome.genes_mut()[start..end].reverse();
    }
}

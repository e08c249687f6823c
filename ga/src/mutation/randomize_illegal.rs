//! Conflict-aware randomizing mutation.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chromosome::{Chromosome, PhenotypeInterpreter};
use crate::instance::GraphInstance;
use crate::traits::mutation::MutationOperator;

/// Walks vertices in index order and reassigns every vertex that shares
/// a color with a neighbor to a freshly drawn random color in
/// `[0, len)`.
///
/// The replacement is not itself conflict-checked, so a single pass can
/// trade one conflict for another; that is accepted behavior.
pub struct RandomizeIllegalGenesMutation<'a> {
    interpreter: &'a PhenotypeInterpreter,
    instance: &'a dyn GraphInstance,
    rng: StdRng,
}

impl<'a> RandomizeIllegalGenesMutation<'a> {
    pub fn new(
        interpreter: &'a PhenotypeInterpreter,
        instance: &'a dyn GraphInstance,
        seed: u64,
    ) -> Self {
        Self {
            interpreter,
            instance,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MutationOperator for RandomizeIllegalGenesMutation<'_> {
    fn mutate(&mut self, chromosome: &mut Chromosome) {
        let length = chromosome.len();
        for vertex in 0..length {
            let color = self.interpreter.color(chromosome, vertex);
            let conflicted = self
                .instance
                .adjacent_edges(vertex)
                .iter()
                .any(|edge| self.interpreter.color(chromosome, edge.to) == color);

            if conflicted {
                let fresh = self.rng.gen_range(0..length as u32);
                self.interpreter.set_color(chromosome, vertex, fresh);
            }
        }
    }
}

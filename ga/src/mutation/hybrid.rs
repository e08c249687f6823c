//! Probabilistic dispatcher over the three mutation variants.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chromosome::{Chromosome, PhenotypeInterpreter};
use crate::instance::GraphInstance;
use crate::mutation::fix_illegal::FixIllegalGenesMutation;
use crate::mutation::randomize_gene::RandomizeGeneMutation;
use crate::mutation::randomize_illegal::RandomizeIllegalGenesMutation;
use crate::traits::mutation::MutationOperator;

const DEFAULT_RANDOMIZE_GENE_FREQ: f64 = 0.90;
const DEFAULT_RANDOMIZE_ILLEGAL_FREQ: f64 = 0.07;

/// Draws one uniform value per call and routes to uniform-random
/// mutation, conflict-aware randomization or greedy repair. Exactly one
/// sub-operator executes per call. The remaining probability mass
/// (0.03 by default) goes to greedy repair.
pub struct HybridMutation<'a> {
    randomize_gene_freq: f64,
    randomize_illegal_freq: f64,
    rng: StdRng,
    randomize_gene: RandomizeGeneMutation,
    randomize_illegal: RandomizeIllegalGenesMutation<'a>,
    fix_illegal: FixIllegalGenesMutation<'a>,
}

impl<'a> HybridMutation<'a> {
    pub fn new(
        interpreter: &'a PhenotypeInterpreter,
        instance: &'a dyn GraphInstance,
        seed: u64,
    ) -> Self {
        let mut seeder = StdRng::seed_from_u64(seed);
        let randomize_gene = RandomizeGeneMutation::new(seeder.r#gen());
        let randomize_illegal =
            RandomizeIllegalGenesMutation::new(interpreter, instance, seeder.r#gen());
        Self {
            randomize_gene_freq: DEFAULT_RANDOMIZE_GENE_FREQ,
            randomize_illegal_freq: DEFAULT_RANDOMIZE_ILLEGAL_FREQ,
            rng: seeder,
            randomize_gene,
            randomize_illegal,
            fix_illegal: FixIllegalGenesMutation::new(interpreter, instance),
        }
    }

    /// Override the routing probabilities. `randomize_gene_freq +
    /// randomize_illegal_freq` must not exceed 1; the remainder routes
    /// to greedy repair.
    pub fn with_frequencies(
        mut self,
        randomize_gene_freq: f64,
        randomize_illegal_freq: f64,
    ) -> Self {
        self.randomize_gene_freq = randomize_gene_freq;
        self.randomize_illegal_freq = randomize_illegal_freq;
        self
    }
}

impl MutationOperator for HybridMutation<'_> {
    fn mutate(&mut self, chromosome: &mut Chromosome) {
        let draw = self.rng.r#gen::<f64>();

        if draw < self.randomize_gene_freq {
            self.randomize_gene.mutate(chromosome);
        } else if draw < self.randomize_gene_freq + self.randomize_illegal_freq {
            self.randomize_illegal.mutate(chromosome);
        } else {
            self.fix_illegal.mutate(chromosome);
        }
    }
}

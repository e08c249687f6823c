//! Fixed-size ordered collection of chromosomes.
//!
//! A population is built once at run start and a brand-new one replaces
//! it every generation; individual slots are never mutated after the
//! generational operators have run.

use crate::chromosome::{Chromosome, PhenotypeInterpreter};

#[derive(Debug, Clone)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
}

impl Population {
    pub fn new(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }

    /// Initial population of `population_size` random chromosomes, each
    /// of length `genome_length`.
    pub fn random(
        interpreter: &mut PhenotypeInterpreter,
        population_size: usize,
        genome_length: usize,
    ) -> Self {
        let chromosomes = (0..population_size)
            .map(|_| interpreter.generate_random(genome_length))
            .collect();
        Self { chromosomes }
    }

    pub fn size(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn chromosome(&self, index: usize) -> &Chromosome {
        &self.chromosomes[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chromosome> {
        self.chromosomes.iter()
    }
}

//! Genome representation and genotype-to-phenotype mapping.
//!
//! A [`Chromosome`] holds one color index per vertex. Its length is
//! fixed at creation; operators mutate genes in place but never resize.
//! The [`PhenotypeInterpreter`] is the only place that knows how genes
//! encode colors, so a different seeding scheme (e.g. greedy) can be
//! introduced without touching the operators.

use rand::Rng;
use rand::rngs::StdRng;
use rand::{SeedableRng, rngs::OsRng};
use std::fmt;

/// Per-vertex color assignment; the searchable solution encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    genes: Vec<u32>,
}

impl Chromosome {
    /// All-zero chromosome of the given length.
    pub fn new(length: usize) -> Self {
        Self {
            genes: vec![0; length],
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn gene(&self, index: usize) -> u32 {
        self.genes[index]
    }

    pub fn set_gene(&mut self, index: usize, value: u32) {
        self.genes[index] = value;
    }

    pub fn genes(&self) -> &[u32] {
        &self.genes
    }

    /// Mutable view of the backing storage, for operators that rewrite
    /// whole segments in place.
    pub fn genes_mut(&mut self) -> &mut [u32] {
        &mut self.genes
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.genes.iter().map(|g| g.to_string()).collect();
        write!(f, "{}", rendered.join(" "))
    }
}

/// Maps genome positions to colors and generates random genomes.
pub struct PhenotypeInterpreter {
    rng: StdRng,
}

impl PhenotypeInterpreter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Interpreter seeded from the operating system, for callers that do
    /// not need reproducible runs.
    pub fn from_entropy() -> Self {
        Self::new(OsRng.r#gen())
    }

    /// Random chromosome of the given size, every gene drawn
    /// independently in `[0, size)`. Using the vertex count as the color
    /// bound guarantees enough colors exist for a trivially valid
    /// solution.
    pub fn generate_random(&mut self, size: usize) -> Chromosome {
        let mut chromosome = Chromosome::new(size);
        for vertex in 0..size {
            let color = self.rng.gen_range(0..size as u32);
            chromosome.set_gene(vertex, color);
        }
        chromosome
    }

    pub fn color(&self, chromosome: &Chromosome, vertex: usize) -> u32 {
        chromosome.gene(vertex)
    }

    pub fn set_color(&self, chromosome: &mut Chromosome, vertex: usize, color: u32) {
        chromosome.set_gene(vertex, color);
    }
}

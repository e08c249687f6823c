//! Scalar objective combining color count and constraint violations.

use std::collections::HashSet;

use crate::chromosome::Chromosome;
use crate::instance::GraphInstance;
use crate::population::Population;

/// Stateless evaluator over a borrowed graph instance.
///
/// Fitness is `1 / (distinct colors + invalid edges)`. Both terms are
/// non-negative and any non-empty chromosome uses at least one color,
/// so the denominator is at least 1 and fitness lies in `(0, 1]`.
/// Fewer colors or fewer violations always score strictly higher.
#[derive(Clone, Copy)]
pub struct FitnessCalculator<'a> {
    instance: &'a dyn GraphInstance,
}

impl<'a> FitnessCalculator<'a> {
    pub fn new(instance: &'a dyn GraphInstance) -> Self {
        Self { instance }
    }

    pub fn fitness(&self, chromosome: &Chromosome) -> f64 {
        let colors = self.color_count(chromosome);
        let invalid = self.invalid_edge_count(chromosome);
        1.0 / (colors + invalid) as f64
    }

    /// Number of distinct color values across all positions.
    pub fn color_count(&self, chromosome: &Chromosome) -> usize {
        let colors: HashSet<u32> = chromosome.genes().iter().copied().collect();
        colors.len()
    }

    /// Number of unordered adjacent pairs sharing a color, counted once
    /// per pair.
    pub fn invalid_edge_count(&self, chromosome: &Chromosome) -> usize {
        let size = self.instance.size();
        let mut count = 0;
        for i in 0..size {
            for j in (i + 1)..size {
                if self.instance.are_connected(i, j) && chromosome.gene(i) == chromosome.gene(j) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Chromosome with the maximum fitness; ties keep the first
    /// encountered (strict `>` comparison).
    pub fn find_fittest<'p>(&self, population: &'p Population) -> &'p Chromosome {
        let mut best = population.chromosome(0);
        let mut best_fitness = self.fitness(best);
        for index in 1..population.size() {
            let candidate = population.chromosome(index);
            let candidate_fitness = self.fitness(candidate);
            if candidate_fitness > best_fitness {
                best = candidate;
                best_fitness = candidate_fitness;
            }
        }
        best
    }
}

//! k-point crossover.

use std::collections::BTreeSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chromosome::Chromosome;
use crate::traits::crossover::CrossoverOperator;

/// Draws `points` cut points in `[0, len)` and deduplicates them into an
/// ascending set, so duplicates yield fewer effective cuts. Gene copying
/// starts un-swapped and the contributing parent toggles after each cut
/// point, boundary index included; the tail after the last cut keeps the
/// final toggle state.
pub struct MultiPointCrossover {
    rng: StdRng,
    points: usize,
}

impl MultiPointCrossover {
    pub fn new(points: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            points,
        }
    }
}

impl CrossoverOperator for MultiPointCrossover {
    fn crossover(&mut self, first: &Chromosome, second: &Chromosome) -> (Chromosome, Chromosome) {
        let length = first.len();
        let mut child_one = first.clone();
        let mut child_two = second.clone();

        let cut_points: BTreeSet<usize> = (0..self.points)
            .map(|_| self.rng.gen_range(0..length))
            .collect();

        let mut swapped = false;
        let mut gene = 0;
        for &cut in &cut_points {
            while gene <= cut {
                if swapped {
                    child_one.set_gene(gene, second.gene(gene));
                    child_two.set_gene(gene, first.gene(gene));
                }
                gene += 1;
            }
            swapped = !swapped;
        }
        while gene < length {
            if swapped {
                child_one.set_gene(gene, second.gene(gene));
                child_two.set_gene(gene, first.gene(gene));
            }
            gene += 1;
        }

        (child_one, child_two)
    }
}

//! Best-of-k tournament selection.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chromosome::Chromosome;
use crate::fitness::FitnessCalculator;
use crate::population::Population;
use crate::traits::chooser::Chooser;

/// Draws `tournament_size` indices uniformly at random **with
/// replacement** and returns the fittest drawn chromosome. Comparison is
/// strict `>`, so an equally fit later draw never replaces the
/// incumbent. A size of 1 degenerates to uniform random selection.
pub struct TournamentChooser<'a> {
    fitness: FitnessCalculator<'a>,
    rng: StdRng,
    tournament_size: usize,
}

impl<'a> TournamentChooser<'a> {
    pub fn new(fitness: FitnessCalculator<'a>, tournament_size: usize, seed: u64) -> Self {
        Self {
            fitness,
            rng: StdRng::seed_from_u64(seed),
            tournament_size,
        }
    }
}

impl Chooser for TournamentChooser<'_> {
    fn choose<'p>(&mut self, population: &'p Population) -> &'p Chromosome {
        let first = self.rng.gen_range(0..population.size());
        let mut best = population.chromosome(first);
        let mut best_fitness = self.fitness.fitness(best);

        for _ in 1..self.tournament_size {
            let index = self.rng.gen_range(0..population.size());
            let participant = population.chromosome(index);
            let participant_fitness = self.fitness.fitness(participant);
            if participant_fitness > best_fitness {
                best = participant;
                best_fitness = participant_fitness;
            }
        }

        best
    }

    fn reset_for_new_population(&mut self) {
        // no per-generation state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::PhenotypeInterpreter;
    use crate::instance::MatrixInstance;

    #[test]
    fn test_size_one_is_uniform() {
        let instance = MatrixInstance::new(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let mut interpreter = PhenotypeInterpreter::new(11);
        let population = Population::random(&mut interpreter, 8, 4);
        let fitness = FitnessCalculator::new(&instance);
        let mut chooser = TournamentChooser::new(fitness, 1, 99);

        let mut counts = vec![0usize; population.size()];
        let draws = 16_000;
        for _ in 0..draws {
            let chosen = chooser.choose(&population);
            let index = (0..population.size())
                .find(|&i| std::ptr::eq(population.chromosome(i), chosen))
                .unwrap();
            counts[index] += 1;
        }

        let expected = draws as f64 / population.size() as f64;
        for &count in &counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.15,
                "draw count {count} too far from uniform expectation {expected}"
            );
        }
    }

    #[test]
    fn test_large_tournament_prefers_the_fittest() {
        let instance = MatrixInstance::new(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let fitness = FitnessCalculator::new(&instance);

        // One conflict-free 2-coloring among all-same-color chromosomes.
        let mut good = Chromosome::new(4);
        for v in 0..4 {
            good.set_gene(v, (v % 2) as u32);
        }
        let bad = Chromosome::new(4);
        let population = Population::new(vec![bad.clone(), good.clone(), bad.clone(), bad]);

        let mut chooser = TournamentChooser::new(fitness, 16, 5);
        for _ in 0..50 {
            // With 16 draws over 4 slots, missing the fittest is ~1%.
            let chosen = chooser.choose(&population);
            if chosen == &good {
                return;
            }
        }
        panic!("tournament of size 16 never selected the fittest chromosome");
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let instance = MatrixInstance::new(5, &[(0, 1), (2, 3)]);
        let mut interpreter = PhenotypeInterpreter::new(3);
        let population = Population::random(&mut interpreter, 6, 5);
        let fitness = FitnessCalculator::new(&instance);

        let mut first = TournamentChooser::new(fitness, 3, 1234);
        let mut second = TournamentChooser::new(fitness, 3, 1234);
        for _ in 0..20 {
            assert_eq!(first.choose(&population), second.choose(&population));
        }
    }
}

//! Fitness-proportional (roulette wheel) selection.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chromosome::Chromosome;
use crate::fitness::FitnessCalculator;
use crate::population::Population;
use crate::traits::chooser::Chooser;

struct Wheel {
    cumulative: Vec<f64>,
    total: f64,
}

/// Selects a parent with probability proportional to its fitness.
///
/// On first use per population a cumulative-fitness array is built in
/// index order and cached; [`Chooser::reset_for_new_population`]
/// invalidates the cache so it is rebuilt lazily exactly once per
/// generation.
pub struct RouletteWheelChooser<'a> {
    fitness: FitnessCalculator<'a>,
    rng: StdRng,
    wheel: Option<Wheel>,
}

impl<'a> RouletteWheelChooser<'a> {
    pub fn new(fitness: FitnessCalculator<'a>, seed: u64) -> Self {
        Self {
            fitness,
            rng: StdRng::seed_from_u64(seed),
            wheel: None,
        }
    }

    fn build_wheel(&self, population: &Population) -> Wheel {
        let mut cumulative = Vec::with_capacity(population.size());
        let mut total = 0.0;
        for chromosome in population.iter() {
            total += self.fitness.fitness(chromosome);
            cumulative.push(total);
        }
        Wheel { cumulative, total }
    }
}

impl Chooser for RouletteWheelChooser<'_> {
    fn choose<'p>(&mut self, population: &'p Population) -> &'p Chromosome {
        if self.wheel.is_none() {
            self.wheel = Some(self.build_wheel(population));
        }
        let wheel = self.wheel.as_ref().unwrap();

        let pick = self.rng.r#gen::<f64>() * wheel.total;
        for (index, &bucket) in wheel.cumulative.iter().enumerate() {
            if bucket > pick {
                return population.chromosome(index);
            }
        }

        // Floating-point rounding can push the draw past the last
        // bucket; clamp to the final chromosome rather than failing.
        population.chromosome(population.size() - 1)
    }

    fn reset_for_new_population(&mut self) {
        self.wheel = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::PhenotypeInterpreter;
    use crate::instance::MatrixInstance;

    fn cycle4() -> MatrixInstance {
        MatrixInstance::new(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])
    }

    #[test]
    fn test_never_fails_over_many_draws() {
        let instance = cycle4();
        let mut interpreter = PhenotypeInterpreter::new(21);
        let population = Population::random(&mut interpreter, 10, 4);
        let fitness = FitnessCalculator::new(&instance);
        let mut chooser = RouletteWheelChooser::new(fitness, 77);

        for _ in 0..10_000 {
            let chosen = chooser.choose(&population);
            assert_eq!(chosen.len(), 4);
        }
    }

    #[test]
    fn test_upper_boundary_clamps_to_last() {
        let instance = cycle4();
        let mut interpreter = PhenotypeInterpreter::new(21);
        let population = Population::random(&mut interpreter, 3, 4);
        let fitness = FitnessCalculator::new(&instance);
        let mut chooser = RouletteWheelChooser::new(fitness, 0);

        // Force a draw exactly at the top of the range: no bucket is
        // strictly greater, so the clamp must return the last slot.
        let wheel = chooser.build_wheel(&population);
        let last = population.chromosome(population.size() - 1);
        let past_every_bucket = wheel.total;
        let clamped = wheel
            .cumulative
            .iter()
            .position(|&b| b > past_every_bucket)
            .map(|i| population.chromosome(i))
            .unwrap_or(last);
        assert!(std::ptr::eq(clamped, last));
    }

    #[test]
    fn test_fitter_chromosomes_drawn_more_often() {
        let instance = cycle4();
        let fitness = FitnessCalculator::new(&instance);

        let mut good = Chromosome::new(4);
        for v in 0..4 {
            good.set_gene(v, (v % 2) as u32);
        }
        let bad = Chromosome::new(4); // one color, four conflicts
        let population = Population::new(vec![bad.clone(), good.clone()]);

        let mut chooser = RouletteWheelChooser::new(fitness, 31);
        let mut good_draws = 0;
        let draws = 4_000;
        for _ in 0..draws {
            if chooser.choose(&population) == &good {
                good_draws += 1;
            }
        }

        // good scores 1/2, bad scores 1/5: expect ~71% of draws.
        let share = good_draws as f64 / draws as f64;
        assert!(share > 0.6, "fitter chromosome drawn only {share} of draws");
    }

    #[test]
    fn test_reset_invalidates_cache() {
        let instance = cycle4();
        let mut interpreter = PhenotypeInterpreter::new(4);
        let population = Population::random(&mut interpreter, 4, 4);
        let fitness = FitnessCalculator::new(&instance);
        let mut chooser = RouletteWheelChooser::new(fitness, 8);

        chooser.choose(&population);
        assert!(chooser.wheel.is_some());
        chooser.reset_for_new_population();
        assert!(chooser.wheel.is_none());
    }
}

use crate::chromosome::Chromosome;

/// CrossoverOperator is a strategy trait for recombination.
/// Implementations take two same-length parents and return two new,
/// independent children; parents are never mutated.
pub trait CrossoverOperator {
    fn crossover(&mut self, first: &Chromosome, second: &Chromosome) -> (Chromosome, Chromosome);
}

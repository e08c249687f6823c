use crate::chromosome::Chromosome;
use crate::population::Population;

/// Chooser is a strategy trait for parent selection.
/// Each implementation picks one chromosome from the population,
/// returning a reference rather than a copy.
pub trait Chooser {
    /// Pick one parent from `population`.
    fn choose<'p>(&mut self, population: &'p Population) -> &'p Chromosome;

    /// Invalidate any per-generation cache. Called once before slot
    /// filling begins for a new generation, so caches are rebuilt
    /// against the current population exactly once.
    fn reset_for_new_population(&mut self);
}

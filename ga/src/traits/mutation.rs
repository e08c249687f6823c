use crate::chromosome::Chromosome;

/// MutationOperator is a strategy trait for in-place perturbation of a
/// single chromosome. No variant guarantees that all conflicts are
/// resolved unless its own documentation states so.
pub trait MutationOperator {
    fn mutate(&mut self, chromosome: &mut Chromosome);
}

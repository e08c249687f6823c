//! Conflict-aware greedy repair mutation.

use std::collections::HashSet;

use crate::chromosome::{Chromosome, PhenotypeInterpreter};
use crate::instance::GraphInstance;
use crate::traits::mutation::MutationOperator;

/// Walks vertices in index order; every vertex that shares a color with
/// a neighbor is reassigned the smallest non-negative color not used by
/// any of its neighbors (first fit).
///
/// Single pass, no backtracking: fixing a vertex can introduce a fresh
/// conflict with a higher-index neighbor that is fixed later but never
/// re-checked against it.
pub struct FixIllegalGenesMutation<'a> {
    interpreter: &'a PhenotypeInterpreter,
    instance: &'a dyn GraphInstance,
}

impl<'a> FixIllegalGenesMutation<'a> {
    pub fn new(interpreter: &'a PhenotypeInterpreter, instance: &'a dyn GraphInstance) -> Self {
        Self {
            interpreter,
            instance,
        }
    }
}

impl MutationOperator for FixIllegalGenesMutation<'_> {
    fn mutate(&mut self, chromosome: &mut Chromosome) {
        for vertex in 0..chromosome.len() {
            let color = self.interpreter.color(chromosome, vertex);
            let adjacent = self.instance.adjacent_edges(vertex);

            let conflicted = adjacent
                .iter()
                .any(|edge| self.interpreter.color(chromosome, edge.to) == color);
            if !conflicted {
                continue;
            }

            let neighbor_colors: HashSet<u32> = adjacent
                .iter()
                .map(|edge| self.interpreter.color(chromosome, edge.to))
                .collect();

            let mut fresh = 0;
            while neighbor_colors.contains(&fresh) {
                fresh += 1;
            }
            self.interpreter.set_color(chromosome, vertex, fresh);
        }
    }
}

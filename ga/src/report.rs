//! Derived summary of a coloring result.

use serde::{Deserialize, Serialize};

use crate::chromosome::Chromosome;
use crate::fitness::FitnessCalculator;
use crate::instance::GraphInstance;

/// Color count and constraint violations of one chromosome against one
/// instance, recomputed on demand; nothing here is cached by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringReport {
    pub color_count: usize,
    pub invalid_edge_count: usize,
    pub genes: Vec<u32>,
}

impl ColoringReport {
    pub fn for_chromosome(chromosome: &Chromosome, instance: &dyn GraphInstance) -> Self {
        let calculator = FitnessCalculator::new(instance);
        Self {
            color_count: calculator.color_count(chromosome),
            invalid_edge_count: calculator.invalid_edge_count(chromosome),
            genes: chromosome.genes().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::MatrixInstance;

    #[test]
    fn test_report_derives_both_terms() {
        let instance = MatrixInstance::new(3, &[(0, 1), (1, 2)]);
        let mut chromosome = Chromosome::new(3);
        chromosome.set_gene(0, 1);
        chromosome.set_gene(1, 1);
        chromosome.set_gene(2, 0);

        let report = ColoringReport::for_chromosome(&chromosome, &instance);
        assert_eq!(report.color_count, 2);
        assert_eq!(report.invalid_edge_count, 1);
        assert_eq!(report.genes, vec![1, 1, 0]);
    }

    #[test]
    fn test_report_serializes() {
        let instance = MatrixInstance::new(2, &[(0, 1)]);
        let chromosome = Chromosome::new(2);
        let report = ColoringReport::for_chromosome(&chromosome, &instance);
        let json = serde_json::to_string(&report).unwrap();
        let back: ColoringReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}

pub mod multi_point;
pub mod single_point;
pub mod two_point;

pub use multi_point::MultiPointCrossover;
pub use single_point::SinglePointCrossover;
pub use two_point::TwoPointCrossover;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::chromosome::Chromosome;

    /// Two same-length parents with disjoint gene values, so every child
    /// gene can be attributed to exactly one parent.
    pub fn parents(length: usize) -> (Chromosome, Chromosome) {
        let mut first = Chromosome::new(length);
        let mut second = Chromosome::new(length);
        for i in 0..length {
            first.set_gene(i, i as u32);
            second.set_gene(i, 100 + i as u32);
        }
        (first, second)
    }

    /// Checks the positional contract shared by every crossover variant:
    /// lengths are preserved, every child gene comes from one of the two
    /// parents at the same position, and the children are complementary.
    pub fn assert_children_well_formed(
        first: &Chromosome,
        second: &Chromosome,
        child_one: &Chromosome,
        child_two: &Chromosome,
    ) {
        assert_eq!(child_one.len(), first.len());
        assert_eq!(child_two.len(), first.len());
        for i in 0..first.len() {
            let one_from_first = child_one.gene(i) == first.gene(i);
            let one_from_second = child_one.gene(i) == second.gene(i);
            assert!(
                one_from_first || one_from_second,
                "child one gene {i} came from neither parent"
            );
            if one_from_first {
                assert_eq!(child_two.gene(i), second.gene(i));
            } else {
                assert_eq!(child_two.gene(i), first.gene(i));
            }
        }
    }
}

pub mod fix_illegal;
pub mod hybrid;
pub mod randomize_gene;
pub mod randomize_illegal;

pub use fix_illegal::FixIllegalGenesMutation;
pub use hybrid::HybridMutation;
pub use randomize_gene::RandomizeGeneMutation;
pub use randomize_illegal::RandomizeIllegalGenesMutation;

pub mod chooser;
pub mod crossover;
pub mod mutation;

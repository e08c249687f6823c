//! # Graph-Coloring Evolutionary Engine
//!
//! This crate provides the core logic for a generational genetic
//! algorithm that searches for low-conflict, low-color assignments of
//! colors to the vertices of a fixed graph. It supports pluggable
//! selection, crossover and mutation strategies, elitism, segment
//! inversion, cooperative cancellation, and a deterministic final
//! repair pass that guarantees the returned coloring has no conflicting
//! edges.
//!
//! ## Key Concepts
//! - **Algorithm**: the engine owning the generation loop and the
//!   best-so-far record.
//! - **Chromosome / PhenotypeInterpreter**: the per-vertex color genome
//!   and the only component that knows how genes encode colors.
//! - **Choosers**: pluggable parent-selection strategies (tournament,
//!   roulette wheel).
//! - **Operators**: pluggable crossover and mutation strategies plus a
//!   segment inversion operator, all preserving genome length.
//! - **GraphInstance**: the read-only graph contract the engine
//!   consumes; loaders live outside this crate.

pub mod chromosome;
pub mod config;
pub mod crossover;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod instance;
pub mod inversion;
pub mod mutation;
pub mod population;
pub mod report;
pub mod selection;
pub mod traits;

pub use chromosome::{Chromosome, PhenotypeInterpreter};
pub use config::{CrossoverStrategy, EvolutionConfig, MutationStrategy, SelectionStrategy};
pub use engine::{Algorithm, CancellationToken, apply_result_fix};
pub use error::GaError;
pub use fitness::FitnessCalculator;
pub use instance::{Edge, GraphInstance, MatrixInstance};
pub use population::Population;
pub use report::ColoringReport;

//! Error types for the evolutionary engine.
//!
//! All configuration and instance problems are rejected loudly at
//! construction time; nothing inside the generation loop itself returns
//! an error.

use thiserror::Error;

/// Represents all error types that can occur in the evolutionary engine.
#[derive(Debug, Error, PartialEq)]
pub enum GaError {
    /// Population size must be positive and even; slot-filling works in
    /// parent pairs and an odd size would leave the last slot empty.
    #[error("population size must be a positive even number, got {0}")]
    InvalidPopulationSize(usize),

    /// A probability parameter is outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// Tournament selection needs at least one participant per draw.
    #[error("tournament size must be at least 1, got {0}")]
    InvalidTournamentSize(usize),

    /// Multi-point crossover needs at least one cut point.
    #[error("crossover point count must be at least 1, got {0}")]
    InvalidPointCount(usize),

    /// The graph instance has no vertices, so there is nothing to color.
    #[error("graph instance must have at least one vertex")]
    EmptyInstance,

    /// Configuration JSON is malformed or does not match the schema.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

//! Run configuration.
//!
//! `EvolutionConfig` is plain validated data: strategy choices are
//! enums resolved to concrete operators when a run starts, every field
//! has a serde default so partial JSON configs work, and all range
//! checks happen once in [`EvolutionConfig::validate`] rather than at
//! use time.

use serde::{Deserialize, Serialize};

use crate::error::GaError;

fn default_population_size() -> usize {
    100
}

fn default_crossover_rate() -> f64 {
    0.8
}

fn default_mutation_rate() -> f64 {
    0.01
}

fn default_elitism() -> bool {
    true
}

fn default_tournament_size() -> usize {
    2
}

fn default_point_count() -> usize {
    4
}

fn default_selection() -> SelectionStrategy {
    SelectionStrategy::Tournament {
        size: default_tournament_size(),
    }
}

fn default_crossover() -> CrossoverStrategy {
    CrossoverStrategy::SinglePoint
}

fn default_mutation() -> MutationStrategy {
    MutationStrategy::RandomizeGene
}

/// Parent-selection strategy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SelectionStrategy {
    Tournament {
        #[serde(default = "default_tournament_size")]
        size: usize,
    },
    Roulette,
}

/// Crossover strategy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum CrossoverStrategy {
    SinglePoint,
    TwoPoint,
    MultiPoint {
        #[serde(default = "default_point_count")]
        points: usize,
    },
}

/// Mutation strategy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationStrategy {
    RandomizeGene,
    RandomizeIllegal,
    FixIllegal,
    Hybrid,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EvolutionConfig {
    /// Number of chromosomes per generation. Must be positive and even;
    /// slot filling works in parent pairs.
    #[serde(default = "default_population_size")]
    pub population_size: usize,

    /// Fixed generation budget. 0 runs unbounded with cooperative
    /// cancellation checked at generation boundaries.
    #[serde(default)]
    pub generations: usize,

    /// Probability of recombining a selected parent pair.
    #[serde(default = "default_crossover_rate")]
    pub crossover_rate: f64,

    /// Probability of mutating each non-elite slot.
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,

    /// Probability of inverting each non-elite slot. 0 disables the
    /// inversion pass entirely.
    #[serde(default)]
    pub inversion_rate: f64,

    /// Whether the generation's fittest chromosome is copied unmodified
    /// into the first two slots of the next population.
    #[serde(default = "default_elitism")]
    pub elitism: bool,

    #[serde(default = "default_selection")]
    pub selection: SelectionStrategy,

    #[serde(default = "default_crossover")]
    pub crossover: CrossoverStrategy,

    #[serde(default = "default_mutation")]
    pub mutation: MutationStrategy,

    /// Master seed for the whole run. `None` seeds from the operating
    /// system; `Some` makes the run reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            generations: 0,
            crossover_rate: default_crossover_rate(),
            mutation_rate: default_mutation_rate(),
            inversion_rate: 0.0,
            elitism: default_elitism(),
            selection: default_selection(),
            crossover: default_crossover(),
            mutation: default_mutation(),
            seed: None,
        }
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), GaError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GaError::RateOutOfRange { name, value });
    }
    Ok(())
}

impl EvolutionConfig {
    /// Load a configuration from JSON, applying field defaults for
    /// anything omitted, and validate it.
    pub fn from_json(json: &str) -> Result<Self, GaError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GaError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(GaError::InvalidPopulationSize(self.population_size));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("inversion_rate", self.inversion_rate)?;

        if let SelectionStrategy::Tournament { size } = self.selection {
            if size == 0 {
                return Err(GaError::InvalidTournamentSize(size));
            }
        }
        if let CrossoverStrategy::MultiPoint { points } = self.crossover {
            if points == 0 {
                return Err(GaError::InvalidPointCount(points));
            }
        }
        Ok(())
    }
}

//! Generational control loop.
//!
//! [`Algorithm`] owns a validated configuration and, per run, wires the
//! configured strategy choices into concrete operators, drives the
//! evolve loop with elitism and per-slot operator rates, tracks the
//! best chromosome seen across completed generations, and finishes with
//! a deterministic repair pass that removes every remaining conflict
//! from the returned result.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chromosome::{Chromosome, PhenotypeInterpreter};
use crate::config::{CrossoverStrategy, EvolutionConfig, MutationStrategy, SelectionStrategy};
use crate::crossover::{MultiPointCrossover, SinglePointCrossover, TwoPointCrossover};
use crate::error::GaError;
use crate::fitness::FitnessCalculator;
use crate::instance::GraphInstance;
use crate::inversion::InversionOperator;
use crate::mutation::{
    FixIllegalGenesMutation, HybridMutation, RandomizeGeneMutation, RandomizeIllegalGenesMutation,
};
use crate::population::Population;
use crate::report::ColoringReport;
use crate::selection::{RouletteWheelChooser, TournamentChooser};
use crate::traits::chooser::Chooser;
use crate::traits::crossover::CrossoverOperator;
use crate::traits::mutation::MutationOperator;

/// Cooperative cancellation flag shared between the evolution thread
/// and an external controller. Observed once per generation boundary;
/// no generation is ever partially applied.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Callback invoked once per completed generation with the generation
/// index and that generation's fittest chromosome. Runs synchronously on
/// the evolution thread.
pub type GenerationListener<'a> = Box<dyn FnMut(usize, &Chromosome) + 'a>;

/// The evolutionary engine.
///
/// `execute` takes `&mut self`: overlapping runs on one engine instance
/// are a compile error, which serializes access to the per-run best
/// record and random state.
pub struct Algorithm<'a> {
    config: EvolutionConfig,
    listener: Option<GenerationListener<'a>>,
    token: Option<CancellationToken>,
    best: Option<Chromosome>,
}

impl<'a> Algorithm<'a> {
    /// Create an engine from a validated configuration.
    pub fn new(config: EvolutionConfig) -> Result<Self, GaError> {
        config.validate()?;
        Ok(Self {
            config,
            listener: None,
            token: None,
            best: None,
        })
    }

    /// Attach a per-generation progress listener.
    pub fn with_listener(mut self, listener: impl FnMut(usize, &Chromosome) + 'a) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Attach a cancellation token, observed at generation boundaries
    /// when no fixed generation budget is configured.
    pub fn with_token(mut self, token: CancellationToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Best chromosome of the most recent completed run, post-repair.
    pub fn best(&self) -> Option<&Chromosome> {
        self.best.as_ref()
    }

    /// Run the full evolution against `instance` and return the repaired
    /// best chromosome found.
    ///
    /// The best-so-far record is reset at the start of every run. With a
    /// positive generation budget the loop runs exactly that many
    /// generations; with a zero budget it runs until the attached token
    /// is cancelled.
    pub fn execute(&mut self, instance: &dyn GraphInstance) -> Result<Chromosome, GaError> {
        if instance.size() == 0 {
            return Err(GaError::EmptyInstance);
        }
        self.best = None;

        let mut seeder = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut interpreter = PhenotypeInterpreter::new(seeder.r#gen());
        let mut population = Population::random(
            &mut interpreter,
            self.config.population_size,
            instance.size(),
        );
        // Frozen from here on: operators only read colors through it.
        let interpreter = interpreter;

        let fitness = FitnessCalculator::new(instance);
        let mut chooser: Box<dyn Chooser + '_> = match self.config.selection {
            SelectionStrategy::Tournament { size } => {
                Box::new(TournamentChooser::new(fitness, size, seeder.r#gen()))
            }
            SelectionStrategy::Roulette => {
                Box::new(RouletteWheelChooser::new(fitness, seeder.r#gen()))
            }
        };
        let mut crossover: Box<dyn CrossoverOperator> = match self.config.crossover {
            CrossoverStrategy::SinglePoint => Box::new(SinglePointCrossover::new(seeder.r#gen())),
            CrossoverStrategy::TwoPoint => Box::new(TwoPointCrossover::new(seeder.r#gen())),
            CrossoverStrategy::MultiPoint { points } => {
                Box::new(MultiPointCrossover::new(points, seeder.r#gen()))
            }
        };
        let mut mutation: Box<dyn MutationOperator + '_> = match self.config.mutation {
            MutationStrategy::RandomizeGene => {
                Box::new(RandomizeGeneMutation::new(seeder.r#gen()))
            }
            MutationStrategy::RandomizeIllegal => Box::new(RandomizeIllegalGenesMutation::new(
                &interpreter,
                instance,
                seeder.r#gen(),
            )),
            MutationStrategy::FixIllegal => {
                Box::new(FixIllegalGenesMutation::new(&interpreter, instance))
            }
            MutationStrategy::Hybrid => {
                Box::new(HybridMutation::new(&interpreter, instance, seeder.r#gen()))
            }
        };
        let mut inversion = InversionOperator::new(seeder.r#gen());
        let mut rng = StdRng::seed_from_u64(seeder.r#gen());

        info!(
            "starting run: {} vertices, population {}, generation budget {}",
            instance.size(),
            self.config.population_size,
            self.config.generations
        );

        let mut best: Option<Chromosome> = None;
        let mut best_fitness = 0.0;
        let mut generation = 0;

        loop {
            if self.config.generations > 0 {
                if generation >= self.config.generations {
                    break;
                }
            } else if self.token.as_ref().is_some_and(|t| t.is_cancelled()) {
                break;
            }

            // Evaluate the current population and update the best-so-far
            // record before it is replaced, so every completed
            // generation is reflected, including the final one.
            let fittest = fitness.find_fittest(&population).clone();
            let fittest_score = fitness.fitness(&fittest);
            if fittest_score > best_fitness {
                best = Some(fittest.clone());
                best_fitness = fittest_score;
            }
            debug!("generation {generation}: fittest {fittest_score:.6}");
            if let Some(listener) = self.listener.as_mut() {
                listener(generation, &fittest);
            }

            chooser.reset_for_new_population();

            let mut next = Vec::with_capacity(self.config.population_size);
            if self.config.elitism {
                next.push(fittest.clone());
                next.push(fittest.clone());
            }
            while next.len() < self.config.population_size {
                let first = chooser.choose(&population).clone();
                let second = chooser.choose(&population).clone();

                if rng.r#gen::<f64>() < self.config.crossover_rate {
                    let (child_one, child_two) = crossover.crossover(&first, &second);
                    next.push(child_one);
                    next.push(child_two);
                } else {
                    next.push(first);
                    next.push(second);
                }
            }

            let elite_slots = if self.config.elitism { 2 } else { 0 };
            for slot in next.iter_mut().skip(elite_slots) {
                if rng.r#gen::<f64>() < self.config.mutation_rate {
                    mutation.mutate(slot);
                }
            }
            if self.config.inversion_rate > 0.0 {
                for slot in next.iter_mut().skip(elite_slots) {
                    if rng.r#gen::<f64>() < self.config.inversion_rate {
                        inversion.inverse(slot);
                    }
                }
            }

            population = Population::new(next);
            generation += 1;
        }

        // A cancelled run can stop before any generation completes;
        // fall back to the fittest of the population built so far.
        let mut result = match best {
            Some(best) => best,
            None => fitness.find_fittest(&population).clone(),
        };
        apply_result_fix(&mut result, instance);

        let report = ColoringReport::for_chromosome(&result, instance);
        info!(
            "run complete after {generation} generations: {} colors, {} invalid edges",
            report.color_count, report.invalid_edge_count
        );

        self.best = Some(result.clone());
        Ok(result)
    }
}

/// Deterministic final repair pass.
///
/// Walks the instance's edge list; for every edge whose endpoints share
/// a color, the full set of colors used anywhere in the genome is
/// recomputed and the edge's `from` endpoint is reassigned the smallest
/// color outside that set. Every reassigned color is therefore unused in
/// the whole genome, so independently fixed vertices can never collide:
/// the result has zero invalid edges, possibly at the cost of extra
/// colors.
pub fn apply_result_fix(chromosome: &mut Chromosome, instance: &dyn GraphInstance) {
    for edge in instance.all_edges() {
        if chromosome.gene(edge.from) == chromosome.gene(edge.to) {
            let used: HashSet<u32> = chromosome.genes().iter().copied().collect();
            let mut fresh = 0;
            while used.contains(&fresh) {
                fresh += 1;
            }
            chromosome.set_gene(edge.from, fresh);
        }
    }
}

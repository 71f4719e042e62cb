//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → evaluation → repeat.

use super::config::GaConfig;
use super::genome::Genome;
use super::operators::{pmx_crossover, swap_mutation};
use crate::error::{Result, TspError};
use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA optimization run.
///
/// Contains the best tour found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult<'g> {
    /// The best genome found during the entire run.
    ///
    /// This is the minimum over every generation, including the initial
    /// population, not just the terminal one; elitism is not applied, so
    /// the last generation can be worse.
    pub best: Genome<'g>,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: u64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether a generation beat the target fitness.
    pub target_reached: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness so far: the initial population, then each generation.
    pub fitness_history: Vec<u64>,
}

/// Executes the GA for one graph and start vertex.
///
/// # Usage
///
/// ```
/// use u_tsp::ga::{GaConfig, GaRunner, Selection};
/// use u_tsp::Graph;
///
/// let graph = Graph::new(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).unwrap();
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_reproduction_size(10)
///     .with_max_generations(20)
///     .with_selection(Selection::Tournament(5))
///     .with_seed(42);
///
/// let runner = GaRunner::new(&graph, 0, config).unwrap();
/// let result = runner.optimize().unwrap();
/// assert_eq!(result.best_fitness, 80);
/// ```
#[derive(Debug, Clone)]
pub struct GaRunner<'g> {
    graph: &'g Graph,
    start: usize,
    config: GaConfig,
}

impl<'g> GaRunner<'g> {
    /// Creates a runner after validating the graph, start and config.
    ///
    /// # Errors
    /// - [`TspError::TooFewVertices`] if the graph has fewer than 2 vertices
    /// - [`TspError::InvalidStart`] if `start` is not a vertex
    /// - [`TspError::InvalidConfig`] if [`GaConfig::validate`] fails
    pub fn new(graph: &'g Graph, start: usize, config: GaConfig) -> Result<Self> {
        if graph.len() < 2 {
            return Err(TspError::TooFewVertices {
                vertices: graph.len(),
                min: 2,
            });
        }
        graph.check_start(start)?;
        config.validate()?;
        Ok(Self {
            graph,
            start,
            config,
        })
    }

    /// The configuration this runner was built with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the GA, seeding from `config.seed` (or randomly).
    pub fn optimize(&self) -> Result<GaResult<'g>> {
        self.optimize_with_cancel(None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA will
    /// stop before the next generation and return the best genome found
    /// so far.
    pub fn optimize_with_cancel(&self, cancel: Option<Arc<AtomicBool>>) -> Result<GaResult<'g>> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.run(&mut rng, cancel.as_deref())
    }

    /// Runs the GA drawing all randomness from `rng`.
    pub fn optimize_with_rng<R: Rng>(&self, rng: &mut R) -> Result<GaResult<'g>> {
        self.run(rng, None)
    }

    fn run<R: Rng>(&self, rng: &mut R, cancel: Option<&AtomicBool>) -> Result<GaResult<'g>> {
        let config = &self.config;

        // 1. Initialize population
        let mut population: Vec<Genome<'g>> = (0..config.population_size)
            .map(|_| Genome::random_unchecked(self.graph, self.start, rng))
            .collect();

        // 2. Track best
        let mut best = find_best(&population)?.clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness());

        let mut generations = 0usize;
        let mut target_reached = false;
        let mut cancelled = false;

        // 3. Evolutionary loop
        while generations < config.max_generations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }

            let pool = self.select_pool(&population, rng)?;
            population = self.reproduce(&population, &pool, rng);
            generations += 1;

            let gen_best = find_best(&population)?;
            if gen_best.fitness() < best.fitness() {
                best = gen_best.clone();
            }
            fitness_history.push(best.fitness());

            log::debug!(
                "generation {generations}: best {} (overall {})",
                gen_best.fitness(),
                best.fitness()
            );

            if gen_best.fitness() < config.target_fitness {
                target_reached = true;
                break;
            }
        }

        log::info!(
            "ga finished after {generations} generations: best {}{}{}",
            best.fitness(),
            if target_reached { ", target reached" } else { "" },
            if cancelled { ", cancelled" } else { "" },
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            target_reached,
            cancelled,
            fitness_history,
        })
    }

    /// Fills the reproduction pool with `reproduction_size` selected indices.
    fn select_pool<R: Rng>(&self, population: &[Genome<'g>], rng: &mut R) -> Result<Vec<usize>> {
        (0..self.config.reproduction_size)
            .map(|_| self.config.selection.select(population, rng))
            .collect()
    }

    /// Builds the next generation from pairs drawn out of the pool.
    fn reproduce<R: Rng>(
        &self,
        population: &[Genome<'g>],
        pool: &[usize],
        rng: &mut R,
    ) -> Vec<Genome<'g>> {
        let size = self.config.population_size;
        let mut next_gen = Vec::with_capacity(size);

        while next_gen.len() < size {
            let pair = index::sample(rng, pool.len(), 2);
            let parent1 = &population[pool[pair.index(0)]];
            let parent2 = &population[pool[pair.index(1)]];

            let (child1, child2) = pmx_crossover(parent1.tour(), parent2.tour(), rng);
            for child in [child1, child2] {
                if next_gen.len() >= size {
                    break;
                }
                next_gen.push(self.mutate(child, rng));
            }
        }

        next_gen
    }

    /// Applies swap mutation with probability `mutation_rate`.
    fn mutate<R: Rng>(&self, mut tour: Vec<usize>, rng: &mut R) -> Genome<'g> {
        if rng.random_bool(self.config.mutation_rate) {
            swap_mutation(&mut tour, rng);
        }
        Genome::from_parts(self.graph, self.start, tour)
    }
}

/// Find the genome with the best (lowest) fitness.
fn find_best<'a, 'g>(population: &'a [Genome<'g>]) -> Result<&'a Genome<'g>> {
    population
        .iter()
        .min_by_key(|g| g.fitness())
        .ok_or_else(|| TspError::InvalidConfig("population must not be empty".into()))
}

// ============================================================================
// Tests
// ============================================================================

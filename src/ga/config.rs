//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{Result, TspError};

/// Configuration for the Genetic Algorithm.
///
/// Controls population and pool sizes, selection strategy, mutation rate
/// and termination conditions.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 5000);
/// assert_eq!(config.reproduction_size, 200);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.selection, Selection::Tournament(40));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(300)
///     .with_reproduction_size(40)
///     .with_selection(Selection::Roulette)
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of genomes in every generation.
    pub population_size: usize,

    /// Number of parents selected into the reproduction pool per generation.
    ///
    /// Offspring pairs are drawn from this pool until the next generation
    /// is full.
    pub reproduction_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Probability of applying swap mutation to each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Selection strategy for filling the reproduction pool.
    pub selection: Selection,

    /// Stop as soon as a generation's best fitness is strictly below this.
    ///
    /// 0 disables early termination.
    pub target_fitness: u64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 5000,
            reproduction_size: 200,
            max_generations: 1000,
            mutation_rate: 0.1,
            selection: Selection::default(),
            target_fitness: 0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the reproduction pool size.
    pub fn with_reproduction_size(mut self, n: usize) -> Self {
        self.reproduction_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = if rate.is_nan() {
            0.0
        } else {
            rate.clamp(0.0, 1.0)
        };
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the target fitness (0 to disable).
    pub fn with_target_fitness(mut self, target: u64) -> Self {
        self.target_fitness = target;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`TspError::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.reproduction_size < 2 {
            return Err(invalid("reproduction_size must be at least 2"));
        }
        if self.max_generations == 0 {
            return Err(invalid("max_generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be within [0, 1]"));
        }
        if let Selection::Tournament(k) = self.selection {
            if k == 0 {
                return Err(invalid("tournament size must be at least 1"));
            }
            if k > self.population_size {
                return Err(TspError::InvalidConfig(format!(
                    "tournament size {k} exceeds population_size {}",
                    self.population_size
                )));
            }
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> TspError {
    TspError::InvalidConfig(msg.into())
}

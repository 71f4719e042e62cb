//! Parent selection strategies.
//!
//! Selection determines which individuals enter the reproduction pool.
//! Both strategies assume **minimization** (lower fitness = better).
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use crate::error::{Result, TspError};
use rand::seq::index;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::Selection;
///
/// // Best of 40 distinct random members
/// let sel = Selection::Tournament(40);
///
/// // Probability inversely proportional to tour cost
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Deterministic tournament: sample `k` distinct individuals without
    /// replacement and return the fittest.
    ///
    /// Requires `k <= population.len()`.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Individual `i` is weighted by `1 / fitness_i`, so cheaper tours are
    /// proportionally more likely. A zero fitness is weighted as 1.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(40)
    }
}

impl Selection {
    /// Selects a parent index from the population.
    ///
    /// # Errors
    /// Returns [`TspError::InvalidConfig`] if the population is empty, or
    /// if a tournament is larger than the population.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> Result<usize> {
        if population.is_empty() {
            return Err(TspError::InvalidConfig(
                "cannot select from empty population".into(),
            ));
        }

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => Ok(roulette(population, rng)),
        }
    }
}

/// Tournament selection: sample `k` distinct indices, return the best.
///
/// Ties go to the first sampled index.
fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> Result<usize> {
    let n = population.len();
    if k == 0 || k > n {
        return Err(TspError::InvalidConfig(format!(
            "tournament size {k} must be between 1 and population size {n}"
        )));
    }

    index::sample(rng, n, k)
        .into_iter()
        .min_by_key(|&i| population[i].fitness())
        .ok_or_else(|| TspError::InvalidConfig("empty tournament".into()))
}

/// Roulette wheel selection with weights `1 / fitness`.
fn roulette<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let weights: Vec<f64> = population
        .iter()
        .map(|ind| 1.0 / ind.fitness().max(1) as f64)
        .collect();

    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    // Rounding can leave the scan just short of `threshold`.
    log::trace!("roulette scan did not cross {threshold}; picking uniformly");
    rng.random_range(0..n)
}

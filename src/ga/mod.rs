//! Genetic Algorithm for the TSP.
//!
//! Each candidate tour is a [`Genome`]: a permutation of every vertex
//! except the fixed start, carrying its own cycle cost as fitness. The
//! [`GaRunner`] evolves a fixed-size population generation by generation:
//!
//! 1. **Select** a reproduction pool with [`Selection`] (roulette or
//!    tournament)
//! 2. **Reproduce** pairs from the pool with partially mapped crossover
//! 3. **Mutate** each child by a random transposition
//! 4. **Evaluate** the new generation and stop on the target fitness or
//!    the generation limit
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, selection, target)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best genome found, with run statistics
//!
//! # Submodules
//!
//! - [`operators`]: Permutation crossover (PMX) and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod genome;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use genome::Genome;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::Individual;

//! Exact TSP by bitmask dynamic programming.
//!
//! [`DpSolver`] finds a minimum-cost Hamiltonian cycle in O(n²·2ⁿ) time.
//! The state space is exponential, so callers must bound the vertex count
//! to what fits in memory before solving.
//!
//! # References
//!
//! - Bellman (1962), "Dynamic Programming Treatment of the Travelling
//!   Salesman Problem"
//! - Held & Karp (1962), "A Dynamic Programming Approach to Sequencing
//!   Problems"

mod solver;
mod subsets;

pub use solver::{DpSolution, DpSolver, MAX_VERTICES, MIN_VERTICES};
pub use subsets::{combinations, contains, MAX_UNIVERSE};

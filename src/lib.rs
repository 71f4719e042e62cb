//! Exact and evolutionary solvers for the Traveling Salesman Problem.
//!
//! Every solver works on a [`Graph`]: a dense matrix of non-negative
//! integer distances over a small, fully-connected vertex set. Tours start
//! and end at a caller-chosen start vertex.
//!
//! - **Dynamic Programming ([`dp`])**: exact minimum-cost cycle by
//!   subset-indexed DP over bitmasks, O(n²·2ⁿ).
//! - **Genetic Algorithm ([`ga`])**: best-effort cycle by evolving a
//!   population of permutation genomes with roulette or tournament
//!   selection, partially mapped crossover and swap mutation.
//! - **Brute force ([`brute_force`])**: exhaustive enumeration, the
//!   baseline for tiny instances.
//!
//! # Example
//!
//! ```
//! use u_tsp::{DpSolver, Graph};
//!
//! let graph = Graph::new(vec![
//!     vec![0, 1, 1],
//!     vec![1, 0, 1],
//!     vec![1, 1, 0],
//! ]).unwrap();
//!
//! let solver = DpSolver::new(&graph, 0).unwrap();
//! assert_eq!(solver.cost(), 3);
//! ```
//!
//! All solvers are single-threaded. A [`Graph`] is never mutated, so it
//! can be shared by any number of solver instances.

pub mod brute_force;
pub mod dp;
pub mod error;
pub mod ga;
pub mod graph;

pub use dp::{DpSolution, DpSolver};
pub use error::{Result, TspError};
pub use ga::{GaConfig, GaResult, GaRunner, Genome, Selection};
pub use graph::Graph;

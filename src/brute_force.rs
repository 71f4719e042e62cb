//! Exhaustive permutation search.
//!
//! Tries every ordering of the non-start vertices and keeps the cheapest
//! closed cycle. O(n!) time, so it is only useful as a baseline and as a
//! correctness oracle for the other solvers on tiny instances.

use crate::error::{Result, TspError};
use crate::graph::Graph;

/// Fewest vertices the enumerator accepts.
pub const MIN_VERTICES: usize = 2;

/// Most vertices the enumerator accepts (11! orderings).
pub const MAX_VERTICES: usize = 12;

/// Cheapest cycle found by [`solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BruteForceResult {
    /// `n + 1` vertices, beginning and ending at the start vertex.
    pub tour: Vec<usize>,

    /// Total cost of `tour`.
    pub cost: u64,

    /// Number of orderings evaluated.
    pub evaluated: usize,
}

/// Enumerates all cycles through `start` and returns the cheapest.
///
/// Orderings are visited in lexicographic order; the first minimum wins.
///
/// # Errors
/// - [`TspError::TooFewVertices`] / [`TspError::TooManyVertices`] outside
///   `MIN_VERTICES..=MAX_VERTICES`
/// - [`TspError::InvalidStart`] if `start` is not a vertex
pub fn solve(graph: &Graph, start: usize) -> Result<BruteForceResult> {
    let n = graph.len();
    if n < MIN_VERTICES {
        return Err(TspError::TooFewVertices {
            vertices: n,
            min: MIN_VERTICES,
        });
    }
    if n > MAX_VERTICES {
        return Err(TspError::TooManyVertices {
            vertices: n,
            max: MAX_VERTICES,
        });
    }
    graph.check_start(start)?;

    let mut order: Vec<usize> = (0..n).filter(|&v| v != start).collect();
    let mut best_order = order.clone();
    let mut best_cost = u64::MAX;
    let mut evaluated = 0usize;

    loop {
        let cost = graph.cycle_cost(start, &order);
        evaluated += 1;
        if cost < best_cost {
            best_cost = cost;
            best_order.copy_from_slice(&order);
        }
        if !next_permutation(&mut order) {
            break;
        }
    }

    let mut tour = Vec::with_capacity(n + 1);
    tour.push(start);
    tour.extend_from_slice(&best_order);
    tour.push(start);

    log::debug!("brute force evaluated {evaluated} orderings, best cost {best_cost}");
    Ok(BruteForceResult {
        tour,
        cost: best_cost,
        evaluated,
    })
}

/// Rearranges `data` into the next lexicographic permutation.
///
/// Returns `false` (leaving `data` untouched) once the last permutation
/// has been reached.
pub fn next_permutation<T: Ord>(data: &mut [T]) -> bool {
    if data.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts right after the pivot.
    let Some(pivot) = (0..data.len() - 1).rev().find(|&i| data[i] < data[i + 1]) else {
        return false;
    };

    let successor = (pivot + 1..data.len())
        .rev()
        .find(|&i| data[i] > data[pivot])
        .unwrap_or(pivot + 1);
    data.swap(pivot, successor);
    data[pivot + 1..].reverse();
    true
}

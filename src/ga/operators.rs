//! Permutation-preserving genetic operators.
//!
//! These operate on `&[usize]` vertex orderings. Any slice of distinct
//! values is accepted; values need not be `0..n` (a genome omits its
//! start vertex).
//!
//! # Crossover
//!
//! - [`pmx_crossover`]: partially mapped crossover by value swapping —
//!   O(n)
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two random positions — O(1)
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

use rand::Rng;
use std::ops::Range;

// ============================================================================
// Crossover
// ============================================================================

/// Partially Mapped Crossover (PMX) with a random breakpoint.
///
/// Draws `breakpoint` uniformly from `0..n` and delegates to
/// [`pmx_crossover_at`].
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn pmx_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    assert!(!parent1.is_empty(), "parents must not be empty");
    let breakpoint = rng.random_range(0..parent1.len());
    pmx_crossover_at(parent1, parent2, breakpoint)
}

/// Partially Mapped Crossover (PMX) at a fixed breakpoint.
///
/// # Algorithm
///
/// 1. Child 1 starts as a copy of parent1. For each `i < breakpoint`, the
///    value `parent2[i]` is located in the child and swapped into
///    position `i`.
/// 2. Child 2 starts as a copy of parent2. For each `i >= breakpoint`, the
///    value `parent1[i]` is located in the child and swapped into
///    position `i`.
///
/// Every step is a transposition, so both children remain permutations
/// of the parents' value set.
///
/// # Panics
/// Panics if parents have different lengths, are empty, or if
/// `breakpoint > n`.
pub fn pmx_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    breakpoint: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");
    assert!(breakpoint <= n, "breakpoint {breakpoint} out of range");

    let child1 = swap_into(parent1, parent2, 0..breakpoint);
    let child2 = swap_into(parent2, parent1, breakpoint..n);

    (child1, child2)
}

/// Copy `template`, then swap `donor`'s values into place over `range`.
fn swap_into(template: &[usize], donor: &[usize], range: Range<usize>) -> Vec<usize> {
    let mut child = template.to_vec();
    let max = template.iter().copied().max().unwrap_or(0);
    let mut position = vec![usize::MAX; max + 1];
    for (i, &v) in child.iter().enumerate() {
        position[v] = i;
    }

    for i in range {
        let value = donor[i];
        let from = position[value];
        let displaced = child[i];
        child.swap(from, i);
        position[displaced] = from;
        position[value] = i;
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange two random positions.
///
/// Both positions are drawn independently, so they may coincide.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}

// ============================================================================
// Tests
// ============================================================================

//! Held–Karp style bitmask dynamic programming.

use super::subsets::{combinations, contains};
use crate::error::{Result, TspError};
use crate::graph::Graph;
use std::cell::OnceCell;
use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Fewest vertices the DP solver accepts.
pub const MIN_VERTICES: usize = 3;

/// Most vertices the DP solver accepts.
///
/// This is an addressability limit, not a memory budget: subsets must fit a
/// `u64` mask and `n · 2ⁿ` must index a `Vec` on 64-bit targets. The memo
/// table holds `n · 2ⁿ` `u64` entries, roughly 1 TiB at this cap and
/// about 1.4 GiB at `n = 23`. [`DpSolver::new`] does not allocate; the
/// table is built on the first solve, so callers must keep `n` within
/// what the machine can hold.
pub const MAX_VERTICES: usize = 32;

/// Marks memo states that no path reaches.
const UNREACHED: u64 = u64::MAX;

/// Optimal Hamiltonian cycle found by [`DpSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpSolution {
    /// `n + 1` vertices, beginning and ending at the start vertex.
    pub tour: Vec<usize>,

    /// Total cost of `tour`.
    pub cost: u64,
}

/// Exact TSP solver over subset-indexed dynamic programming.
///
/// `memo[v][S]` holds the cheapest path that leaves `start`, visits
/// exactly the vertex set `S` and ends at `v`. Sets grow one vertex at a
/// time, so every state only reads states of the previous size.
///
/// The result is computed once and cached: [`solve`](Self::solve),
/// [`tour`](Self::tour) and [`cost`](Self::cost) all share it.
///
/// # Complexity
/// O(n²·2ⁿ) time, O(n·2ⁿ) memory during the solve.
///
/// # Examples
///
/// ```
/// use u_tsp::{DpSolver, Graph};
///
/// let graph = Graph::new(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).unwrap();
///
/// let solver = DpSolver::new(&graph, 0).unwrap();
/// assert_eq!(solver.cost(), 80);
/// assert_eq!(solver.tour(), &[0, 1, 3, 2, 0]);
/// ```
#[derive(Debug)]
pub struct DpSolver<'g> {
    graph: &'g Graph,
    start: usize,
    solution: OnceCell<DpSolution>,
}

impl<'g> DpSolver<'g> {
    /// Creates a solver for `graph` with tours anchored at `start`.
    ///
    /// # Errors
    /// - [`TspError::TooFewVertices`] if the graph has 2 vertices or fewer
    /// - [`TspError::TooManyVertices`] if it has more than [`MAX_VERTICES`]
    /// - [`TspError::InvalidStart`] if `start` is not a vertex
    pub fn new(graph: &'g Graph, start: usize) -> Result<Self> {
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

        Ok(Self {
            graph,
            start,
            solution: OnceCell::new(),
        })
    }

    /// The start vertex.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Whether the solution has already been computed.
    pub fn is_solved(&self) -> bool {
        self.solution.get().is_some()
    }

    /// Solves the instance, or returns the cached solution.
    pub fn solve(&self) -> &DpSolution {
        self.solution.get_or_init(|| {
            let mut table = self.seed_table();
            for r in 3..=self.graph.len() {
                self.fill_layer(&mut table, r);
            }
            self.reconstruct(&table)
        })
    }

    /// Solves with an optional cancellation token.
    ///
    /// The token is checked before each subset size is processed. A
    /// cancelled solve leaves nothing cached, so a later call starts over.
    ///
    /// # Errors
    /// Returns [`TspError::Cancelled`] if the flag was set.
    pub fn solve_with_cancel(&self, cancel: Option<Arc<AtomicBool>>) -> Result<&DpSolution> {
        if let Some(solution) = self.solution.get() {
            return Ok(solution);
        }

        let mut table = self.seed_table();
        for r in 3..=self.graph.len() {
            if cancel.as_deref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                log::info!("dp solve cancelled before subsets of size {r}");
                return Err(TspError::Cancelled);
            }
            self.fill_layer(&mut table, r);
        }
        let solution = self.reconstruct(&table);
        Ok(self.solution.get_or_init(|| solution))
    }

    /// The optimal tour, solving first if needed.
    pub fn tour(&self) -> &[usize] {
        &self.solve().tour
    }

    /// The optimal tour cost, solving first if needed.
    pub fn cost(&self) -> u64 {
        self.solve().cost
    }

    /// Memo table holding only the single-edge paths `start → end`.
    fn seed_table(&self) -> Table {
        let n = self.graph.len();
        let mut table = Table::new(n);
        for end in (0..n).filter(|&v| v != self.start) {
            let set = (1u64 << self.start) | (1u64 << end);
            table.set(end, set, self.graph.distance(self.start, end));
        }
        table
    }

    /// Fills every state whose subset has `r` members.
    fn fill_layer(&self, table: &mut Table, r: usize) {
        let n = self.graph.len();
        let start = self.start;
        let subsets = combinations(r, n);
        log::debug!("dp: {} subsets of size {r}", subsets.len());

        for subset in subsets.into_iter().filter(|&s| contains(s, start)) {
            for next in 0..n {
                if next == start || !contains(subset, next) {
                    continue;
                }
                let without_next = subset ^ (1u64 << next);
                let mut best = UNREACHED;
                for end in 0..n {
                    if end == start || end == next || !contains(subset, end) {
                        continue;
                    }
                    let prev = table.get(end, without_next);
                    if prev == UNREACHED {
                        continue;
                    }
                    best = best.min(prev.saturating_add(self.graph.distance(end, next)));
                }
                table.set(next, subset, best);
            }
        }
    }

    /// Walks back from the full set to recover the optimal cycle.
    ///
    /// Among equally cheap predecessors the highest vertex index wins.
    fn reconstruct(&self, table: &Table) -> DpSolution {
        let n = self.graph.len();
        let start = self.start;
        let full = table.full();

        let cost = (0..n)
            .filter(|&v| v != start)
            .map(|v| table.get(v, full).saturating_add(self.graph.distance(v, start)))
            .min()
            .unwrap_or(UNREACHED);

        let mut tour = Vec::with_capacity(n + 1);
        tour.push(start);
        let mut state = full;
        let mut last = start;
        loop {
            let Some(v) = (0..n)
                .filter(|&v| v != start && contains(state, v))
                .min_by_key(|&v| {
                    let c = table.get(v, state).saturating_add(self.graph.distance(v, last));
                    (c, Reverse(v))
                })
            else {
                break;
            };
            tour.push(v);
            state ^= 1u64 << v;
            last = v;
        }
        tour.push(start);
        tour.reverse();

        log::info!("dp solved {n} vertices from {start}: cost {cost}");
        DpSolution { tour, cost }
    }
}

/// Flat `n · 2ⁿ` memo: row `v`, column `S`.
struct Table {
    states: usize,
    full: u64,
    memo: Vec<u64>,
}

impl Table {
    fn new(n: usize) -> Self {
        let states = 1usize << n;
        Self {
            states,
            full: (1u64 << n) - 1,
            memo: vec![UNREACHED; n * states],
        }
    }

    #[inline]
    fn get(&self, v: usize, set: u64) -> u64 {
        self.memo[v * self.states + set as usize]
    }

    #[inline]
    fn set(&mut self, v: usize, set: u64, cost: u64) {
        self.memo[v * self.states + set as usize] = cost;
    }

    fn full(&self) -> u64 {
        self.full
    }
}

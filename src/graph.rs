//! Distance matrix shared by all solvers.
//!
//! A [`Graph`] is a fully-connected weighted graph over `n` labeled
//! vertices `0..n`, stored as a dense `n × n` matrix of non-negative
//! integer distances. The diagonal is ignored.
//!
//! Symmetry is **not** required: every solver reads `distance(i, j)` in
//! the direction of travel, so directed weights are handled correctly even
//! though graphs produced by [`Graph::random`] are symmetric.

use crate::error::{Result, TspError};
use rand::Rng;

/// Lower bound of the edge weights produced by [`Graph::random`].
pub const RANDOM_WEIGHT_MIN: u64 = 10;

/// Upper bound (inclusive) of the edge weights produced by [`Graph::random`].
pub const RANDOM_WEIGHT_MAX: u64 = 30;

/// An immutable, validated `n × n` distance matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::Graph;
///
/// let graph = Graph::new(vec![
///     vec![0, 10, 15],
///     vec![10, 0, 35],
///     vec![15, 35, 0],
/// ]).unwrap();
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.distance(1, 2), 35);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u64>>", into = "Vec<Vec<u64>>")
)]
pub struct Graph {
    n: usize,
    distances: Vec<u64>,
}

impl Graph {
    /// Builds a graph from a row-major matrix.
    ///
    /// # Errors
    /// - [`TspError::EmptyGraph`] if there are no rows
    /// - [`TspError::NotSquare`] if any row length differs from the row count
    pub fn new(rows: Vec<Vec<u64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(TspError::EmptyGraph);
        }

        let mut distances = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(TspError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            distances.extend(values);
        }

        Ok(Self { n, distances })
    }

    /// Builds an `n × n` graph where `distance(i, j) = f(i, j)`.
    ///
    /// # Errors
    /// Returns [`TspError::EmptyGraph`] if `n == 0`.
    pub fn from_fn<F>(n: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> u64,
    {
        if n == 0 {
            return Err(TspError::EmptyGraph);
        }
        let distances = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Ok(Self { n, distances })
    }

    /// Generates a random symmetric graph with a zero diagonal.
    ///
    /// Off-diagonal weights are drawn uniformly from
    /// `RANDOM_WEIGHT_MIN..=RANDOM_WEIGHT_MAX`.
    ///
    /// # Errors
    /// Returns [`TspError::EmptyGraph`] if `n == 0`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(TspError::EmptyGraph);
        }
        let mut distances = vec![0u64; n * n];
        for i in 0..n {
            for j in 0..i {
                let w = rng.random_range(RANDOM_WEIGHT_MIN..=RANDOM_WEIGHT_MAX);
                distances[i * n + j] = w;
                distances[j * n + i] = w;
            }
        }
        Ok(Self { n, distances })
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`: construction rejects empty matrices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance of the edge `from → to`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> u64 {
        self.distances[from * self.n + to]
    }

    /// Iterates over the matrix rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.distances.chunks(self.n)
    }

    /// Sum of consecutive edge weights along an explicit vertex path.
    ///
    /// The path is not closed implicitly: pass `[s, a, b, s]` for a cycle.
    /// Returns 0 for paths with fewer than two vertices.
    pub fn path_cost(&self, path: &[usize]) -> u64 {
        path.windows(2)
            .map(|w| self.distance(w[0], w[1]))
            .fold(0u64, u64::saturating_add)
    }

    /// Cost of the closed cycle `start → order… → start`.
    ///
    /// `order` lists the vertices visited between the two occurrences of
    /// `start`.
    pub(crate) fn cycle_cost(&self, start: usize, order: &[usize]) -> u64 {
        let mut cost = 0u64;
        let mut current = start;
        for &v in order {
            cost = cost.saturating_add(self.distance(current, v));
            current = v;
        }
        cost.saturating_add(self.distance(current, start))
    }

    /// Checks that `start` names a vertex of this graph.
    pub(crate) fn check_start(&self, start: usize) -> Result<()> {
        if start >= self.n {
            return Err(TspError::InvalidStart {
                start,
                vertices: self.n,
            });
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<u64>>> for Graph {
    type Error = TspError;

    fn try_from(rows: Vec<Vec<u64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Graph> for Vec<Vec<u64>> {
    fn from(graph: Graph) -> Self {
        graph.rows().map(<[u64]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_square() {
        let g = Graph::new(vec![vec![0, 1], vec![2, 0]]).unwrap();
        assert_eq!(g.len(), 2);
        assert_eq!(g.distance(0, 1), 1);
        assert_eq!(g.distance(1, 0), 2);
    }

    #[test]
    fn test_new_empty() {
        assert_eq!(Graph::new(vec![]), Err(TspError::EmptyGraph));
    }

    #[test]
    fn test_new_ragged() {
        let err = Graph::new(vec![vec![0, 1, 2], vec![1, 0], vec![2, 1, 0]]).unwrap_err();
        assert_eq!(
            err,
            TspError::NotSquare {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn test_new_wide_rows() {
        // n rows of n+1 columns is not square either
        let err = Graph::new(vec![vec![0, 1, 2], vec![1, 0, 3]]).unwrap_err();
        assert!(matches!(err, TspError::NotSquare { row: 0, .. }));
    }

    #[test]
    fn test_from_fn() {
        let g = Graph::from_fn(4, |i, j| (i * 10 + j) as u64).unwrap();
        assert_eq!(g.distance(3, 2), 32);
        assert_eq!(g.distance(0, 3), 3);
        assert!(Graph::from_fn(0, |_, _| 0).is_err());
    }

    #[test]
    fn test_random_symmetric_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = Graph::random(12, &mut rng).unwrap();
        for i in 0..12 {
            assert_eq!(g.distance(i, i), 0);
            for j in 0..12 {
                assert_eq!(g.distance(i, j), g.distance(j, i));
                if i != j {
                    let d = g.distance(i, j);
                    assert!((RANDOM_WEIGHT_MIN..=RANDOM_WEIGHT_MAX).contains(&d));
                }
            }
        }
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let a = Graph::random(8, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = Graph::random(8, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_path_cost() {
        let g = Graph::new(vec![
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
        .unwrap();
        assert_eq!(g.path_cost(&[0, 1, 3, 2, 0]), 80);
        assert_eq!(g.path_cost(&[0]), 0);
        assert_eq!(g.path_cost(&[]), 0);
    }

    #[test]
    fn test_cycle_cost_closes_the_loop() {
        let g = Graph::from_fn(4, |i, j| (i * 4 + j) as u64).unwrap();
        // 2→0 (8) + 0→3 (3) + 3→1 (13) + 1→2 (6)
        assert_eq!(g.cycle_cost(2, &[0, 3, 1]), 30);
        assert_eq!(g.cycle_cost(2, &[0, 3, 1]), g.path_cost(&[2, 0, 3, 1, 2]));
        // An empty order is the self-loop on start.
        assert_eq!(g.cycle_cost(1, &[]), 5);
    }

    #[test]
    fn test_cycle_cost_saturates() {
        let g = Graph::from_fn(3, |i, j| if i == j { 0 } else { u64::MAX / 2 }).unwrap();
        assert_eq!(g.cycle_cost(0, &[1, 2]), u64::MAX);
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = vec![vec![0, 4, 5], vec![4, 0, 6], vec![5, 6, 0]];
        let g = Graph::new(rows.clone()).unwrap();
        let back: Vec<Vec<u64>> = g.into();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_check_start() {
        let g = Graph::from_fn(3, |_, _| 1).unwrap();
        assert!(g.check_start(2).is_ok());
        assert_eq!(
            g.check_start(3),
            Err(TspError::InvalidStart {
                start: 3,
                vertices: 3
            })
        );
    }
}

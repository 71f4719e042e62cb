//! Tour representation used by the GA.

use super::types::Individual;
use crate::error::{Result, TspError};
use crate::graph::Graph;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// One candidate tour: a permutation of every vertex except `start`.
///
/// The tour is implicitly closed, `start → tour[0] → … → tour[last] → start`,
/// and its total cost (the fitness) is computed when the genome is built.
/// A genome never changes afterwards; operators always build new ones.
///
/// Genomes order by fitness ascending, with the permutation as tie-breaker.
///
/// # Examples
///
/// ```
/// use u_tsp::{Genome, Graph};
///
/// let graph = Graph::new(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).unwrap();
///
/// let genome = Genome::new(&graph, 0, vec![1, 3, 2]).unwrap();
/// assert_eq!(genome.fitness(), 80);
/// assert_eq!(genome.to_string(), "Path: [0, 1, 3, 2, 0]\nLength: 80");
/// ```
#[derive(Debug, Clone)]
pub struct Genome<'g> {
    graph: &'g Graph,
    start: usize,
    tour: Vec<usize>,
    fitness: u64,
}

impl<'g> Genome<'g> {
    /// Builds a genome from an explicit ordering of the non-start vertices.
    ///
    /// # Errors
    /// - [`TspError::InvalidStart`] if `start` is not a vertex
    /// - [`TspError::TooFewVertices`] if the graph has fewer than 2 vertices
    /// - [`TspError::InvalidPermutation`] if `tour` is not a permutation of
    ///   all vertices except `start`
    pub fn new(graph: &'g Graph, start: usize, tour: Vec<usize>) -> Result<Self> {
        check_graph(graph, start)?;

        let n = graph.len();
        if tour.len() != n - 1 {
            return Err(TspError::InvalidPermutation(format!(
                "expected {} vertices, got {}",
                n - 1,
                tour.len()
            )));
        }
        let mut seen = vec![false; n];
        for &v in &tour {
            if v >= n {
                return Err(TspError::InvalidPermutation(format!(
                    "vertex {v} is out of range"
                )));
            }
            if v == start {
                return Err(TspError::InvalidPermutation(format!(
                    "start vertex {start} must not appear in the tour"
                )));
            }
            if seen[v] {
                return Err(TspError::InvalidPermutation(format!(
                    "vertex {v} appears more than once"
                )));
            }
            seen[v] = true;
        }

        Ok(Self::from_parts(graph, start, tour))
    }

    /// Builds a genome whose tour is a uniform random shuffle.
    ///
    /// # Errors
    /// Same graph and start checks as [`Genome::new`].
    pub fn random<R: Rng>(graph: &'g Graph, start: usize, rng: &mut R) -> Result<Self> {
        check_graph(graph, start)?;
        Ok(Self::random_unchecked(graph, start, rng))
    }

    pub(crate) fn random_unchecked<R: Rng>(graph: &'g Graph, start: usize, rng: &mut R) -> Self {
        let mut tour: Vec<usize> = (0..graph.len()).filter(|&v| v != start).collect();
        tour.shuffle(rng);
        Self::from_parts(graph, start, tour)
    }

    /// Builds a genome from a tour already known to be a valid permutation.
    pub(crate) fn from_parts(graph: &'g Graph, start: usize, tour: Vec<usize>) -> Self {
        let fitness = graph.cycle_cost(start, &tour);
        Self {
            graph,
            start,
            tour,
            fitness,
        }
    }

    /// The ordering of the non-start vertices.
    #[inline]
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Total cost of the closed tour.
    #[inline]
    pub fn fitness(&self) -> u64 {
        self.fitness
    }

    /// The fixed start vertex.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The graph this genome was evaluated against.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Number of genes (vertex count minus one).
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    /// Always `false`: a genome holds at least one vertex.
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    /// The full cycle, with `start` at both ends.
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.tour.len() + 2);
        path.push(self.start);
        path.extend_from_slice(&self.tour);
        path.push(self.start);
        path
    }
}

fn check_graph(graph: &Graph, start: usize) -> Result<()> {
    if graph.len() < 2 {
        return Err(TspError::TooFewVertices {
            vertices: graph.len(),
            min: 2,
        });
    }
    graph.check_start(start)
}

impl Individual for Genome<'_> {
    fn fitness(&self) -> u64 {
        self.fitness
    }
}

impl PartialEq for Genome<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.fitness == other.fitness && self.start == other.start && self.tour == other.tour
    }
}

impl Eq for Genome<'_> {}

impl PartialOrd for Genome<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Genome<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fitness
            .cmp(&other.fitness)
            .then_with(|| self.tour.cmp(&other.tour))
            .then_with(|| self.start.cmp(&other.start))
    }
}

impl fmt::Display for Genome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path: [{}", self.start)?;
        for gene in &self.tour {
            write!(f, ", {gene}")?;
        }
        write!(f, ", {}]\nLength: {}", self.start, self.fitness)
    }
}

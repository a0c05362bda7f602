//! Tour chromosome for the genetic search.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A candidate solution: a permutation of all location indices `0..n`
/// (depot included) representing one logical visiting order.
///
/// Capacity-based trip splitting is derived at evaluation time, never
/// stored here. The fitness value is `f64::INFINITY` until the evaluator
/// scores the tour; lower is better.
///
/// # Examples
///
/// ```
/// use evoroute::ga::Tour;
///
/// let tour = Tour::new(vec![0, 3, 1, 2]);
/// assert_eq!(tour.genes(), &[0, 3, 1, 2]);
/// assert_eq!(tour.fitness(), f64::INFINITY);
/// assert!(tour.is_permutation());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    genes: Vec<usize>,
    fitness: f64,
}

impl Tour {
    /// Creates a tour from a visiting order.
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            fitness: f64::INFINITY,
        }
    }

    /// Creates a uniformly random permutation of `0..n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut genes: Vec<usize> = (0..n).collect();

        // Fisher-Yates shuffle
        for i in (1..genes.len()).rev() {
            let j = rng.random_range(0..=i);
            genes.swap(i, j);
        }

        Self::new(genes)
    }

    /// Returns the visiting order.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Returns a mutable reference to the visiting order.
    pub fn genes_mut(&mut self) -> &mut Vec<usize> {
        &mut self.genes
    }

    /// Number of locations in this tour.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the tour has no locations.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Fitness of this tour; `f64::INFINITY` until evaluated.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Sets the fitness of this tour.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Returns `true` if the genes are a permutation of `0..len`.
    pub fn is_permutation(&self) -> bool {
        let n = self.genes.len();
        let mut seen = vec![false; n];
        for &g in &self.genes {
            if g >= n || seen[g] {
                return false;
            }
            seen[g] = true;
        }
        true
    }
}

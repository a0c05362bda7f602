//! Population of candidate tours.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

use super::tour::Tour;

/// The current generation's candidate tours.
///
/// Tours keep insertion order, except immediately after
/// [`sort_by_fitness`](Self::sort_by_fitness) where order is
/// fitness-ascending (best first). Population size stays constant across
/// generations; the driver replaces the whole population each step.
///
/// # Examples
///
/// ```
/// use evoroute::ga::Population;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let population = Population::random(10, 20, &mut rng).unwrap();
/// assert_eq!(population.len(), 20);
/// assert!(population.tours().iter().all(|t| t.is_permutation()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Population {
    tours: Vec<Tour>,
}

impl Population {
    /// Creates a population of `size` independent uniformly-random
    /// permutations of `0..n`. Duplicate tours are permitted.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if `n < 1` or `size < 1`.
    pub fn random<R: Rng>(n: usize, size: usize, rng: &mut R) -> Result<Self> {
        if n < 1 {
            return Err(EngineError::invalid_input(
                "at least 1 location required to build a population",
            ));
        }
        if size < 1 {
            return Err(EngineError::invalid_input(
                "population size must be at least 1",
            ));
        }
        let tours = (0..size).map(|_| Tour::random(n, rng)).collect();
        Ok(Self { tours })
    }

    /// Wraps an existing set of tours.
    pub fn from_tours(tours: Vec<Tour>) -> Self {
        Self { tours }
    }

    /// Returns the tours in their current order.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// Returns a mutable view of the tours.
    pub fn tours_mut(&mut self) -> &mut [Tour] {
        &mut self.tours
    }

    /// Number of tours.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    /// Returns `true` if the population holds no tours.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Stable sort by fitness, ascending (best first). Ties keep their
    /// relative order.
    pub fn sort_by_fitness(&mut self) {
        self.tours
            .sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
    }

    /// Returns the best tour, assuming the population is sorted.
    pub fn best(&self) -> Option<&Tour> {
        self.tours.first()
    }
}

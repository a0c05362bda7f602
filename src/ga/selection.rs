//! Parent selection policies.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::population::Population;

/// Substituted for a zero fitness in roulette weighting, where `1/fitness`
/// would otherwise be undefined. Makes a perfect-zero tour overwhelmingly
/// likely to be selected instead of failing the draw.
const ZERO_FITNESS_EPSILON: f64 = 1e-12;

/// How parent pairs are drawn from the evaluated population.
///
/// Callers pick one policy per run and keep it for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Two uniform draws, with replacement, from the best `k` tours of the
    /// fitness-sorted population.
    TopK(usize),
    /// Fitness-proportionate draws over the whole population with weights
    /// `1/fitness` (lower fitness, higher weight).
    RouletteWheel,
}

/// Draws the indices of two parents from a fitness-sorted population.
///
/// Both policies sample with replacement, so the same tour may parent both
/// sides of a crossover.
///
/// # Examples
///
/// ```
/// use evoroute::ga::{select_parents, Population, SelectionPolicy, Tour};
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let mut tours: Vec<Tour> = (0..5).map(|_| Tour::random(4, &mut rng)).collect();
/// for (i, tour) in tours.iter_mut().enumerate() {
///     tour.set_fitness(10.0 + i as f64);
/// }
/// let population = Population::from_tours(tours);
///
/// let (a, b) = select_parents(&population, SelectionPolicy::TopK(2), &mut rng);
/// assert!(a < 2 && b < 2);
/// ```
pub fn select_parents<R: Rng>(
    population: &Population,
    policy: SelectionPolicy,
    rng: &mut R,
) -> (usize, usize) {
    match policy {
        SelectionPolicy::TopK(k) => {
            let k = k.max(1).min(population.len());
            (rng.random_range(0..k), rng.random_range(0..k))
        }
        SelectionPolicy::RouletteWheel => {
            let weights: Vec<f64> = population
                .tours()
                .iter()
                .map(|t| 1.0 / t.fitness().max(ZERO_FITNESS_EPSILON))
                .collect();
            let total: f64 = weights.iter().sum();
            if !(total.is_finite() && total > 0.0) {
                // All tours unevaluated (infinite fitness): fall back to
                // uniform draws rather than spinning a degenerate wheel.
                let n = population.len();
                return (rng.random_range(0..n), rng.random_range(0..n));
            }
            (spin(&weights, total, rng), spin(&weights, total, rng))
        }
    }
}

fn spin<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let target = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (idx, w) in weights.iter().enumerate() {
        cumulative += w;
        if target < cumulative {
            return idx;
        }
    }
    weights.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Tour;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn evaluated_population(fitnesses: &[f64]) -> Population {
        let n = fitnesses.len();
        let tours = fitnesses
            .iter()
            .map(|&f| {
                let mut tour = Tour::new((0..n).collect());
                tour.set_fitness(f);
                tour
            })
            .collect();
        Population::from_tours(tours)
    }

    #[test]
    fn test_top_k_stays_within_k() {
        let mut rng = SmallRng::seed_from_u64(42);
        let population = evaluated_population(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        for _ in 0..100 {
            let (a, b) = select_parents(&population, SelectionPolicy::TopK(3), &mut rng);
            assert!(a < 3);
            assert!(b < 3);
        }
    }

    #[test]
    fn test_top_k_clamped_to_population() {
        let mut rng = SmallRng::seed_from_u64(42);
        let population = evaluated_population(&[1.0, 2.0]);
        for _ in 0..20 {
            let (a, b) = select_parents(&population, SelectionPolicy::TopK(10), &mut rng);
            assert!(a < 2);
            assert!(b < 2);
        }
    }

    #[test]
    fn test_roulette_prefers_low_fitness() {
        let mut rng = SmallRng::seed_from_u64(42);
        let population = evaluated_population(&[1.0, 1000.0]);
        let mut first = 0usize;
        let draws = 500;
        for _ in 0..draws {
            let (a, _) = select_parents(&population, SelectionPolicy::RouletteWheel, &mut rng);
            if a == 0 {
                first += 1;
            }
        }
        // Weight ratio is 1000:1; the better tour should dominate.
        assert!(first > draws * 9 / 10);
    }

    #[test]
    fn test_roulette_zero_fitness_dominates() {
        let mut rng = SmallRng::seed_from_u64(42);
        let population = evaluated_population(&[0.0, 10.0, 10.0]);
        for _ in 0..50 {
            let (a, b) = select_parents(&population, SelectionPolicy::RouletteWheel, &mut rng);
            assert_eq!(a, 0);
            assert_eq!(b, 0);
        }
    }

    #[test]
    fn test_roulette_unevaluated_population_falls_back_to_uniform() {
        let mut rng = SmallRng::seed_from_u64(42);
        let tours: Vec<Tour> = (0..4).map(|_| Tour::new(vec![0, 1, 2, 3])).collect();
        let population = Population::from_tours(tours);
        for _ in 0..20 {
            let (a, b) = select_parents(&population, SelectionPolicy::RouletteWheel, &mut rng);
            assert!(a < 4);
            assert!(b < 4);
        }
    }
}

//! Tour cost evaluation with capacity splitting and priority penalties.

use crate::distance::DistanceMatrix;
use crate::models::Location;

/// Cost model applied when scoring a tour.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CostModel {
    /// Plain closed-tour length, including the wrap-around edge from the
    /// last location back to the first. No route splitting.
    ClosedTour,
    /// Capacity-aware cost: the tour is walked from the depot and split into
    /// trips whenever the next demand would exceed the vehicle capacity.
    CapacitySplit { capacity: i32 },
}

/// Scores candidate tours against a distance matrix.
///
/// The evaluator is a pure function of its inputs: scoring the same tour
/// twice yields the same value, and scores are never negative. It borrows
/// the problem data, so one instance can be shared freely across threads
/// when evaluating a whole population.
///
/// Two cost models are supported: [`closed_tour`](Self::closed_tour) for
/// generic tour-length comparisons, and
/// [`capacity_split`](Self::capacity_split) for depot-anchored delivery
/// routes. A priority penalty can be layered on top of either model with
/// [`with_priority_penalty`](Self::with_priority_penalty).
///
/// # Examples
///
/// ```
/// use evoroute::models::Location;
/// use evoroute::distance::DistanceMatrix;
/// use evoroute::evaluation::FitnessEvaluator;
///
/// let locations = vec![
///     Location::depot(0.0, 0.0),
///     Location::new(1, 100.0, 0.0, 10),
///     Location::new(2, 50.0, 0.0, 10),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
///
/// let evaluator = FitnessEvaluator::closed_tour(&locations, &dm);
/// // 0→1 (100) + 1→2 (50) + 2→0 (50)
/// assert!((evaluator.evaluate(&[0, 1, 2]) - 200.0).abs() < 1e-10);
/// ```
pub struct FitnessEvaluator<'a> {
    locations: &'a [Location],
    distances: &'a DistanceMatrix,
    model: CostModel,
    priority_penalty: f64,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator that scores the plain closed-tour length.
    pub fn closed_tour(locations: &'a [Location], distances: &'a DistanceMatrix) -> Self {
        Self {
            locations,
            distances,
            model: CostModel::ClosedTour,
            priority_penalty: 0.0,
        }
    }

    /// Creates an evaluator that splits the tour into depot-anchored trips
    /// of at most `capacity` total demand.
    pub fn capacity_split(
        locations: &'a [Location],
        distances: &'a DistanceMatrix,
        capacity: i32,
    ) -> Self {
        Self {
            locations,
            distances,
            model: CostModel::CapacitySplit { capacity },
            priority_penalty: 0.0,
        }
    }

    /// Adds a penalty charged for every Normal location visited while any
    /// Critical location is still pending.
    ///
    /// The pending counter runs over the whole visiting order and does not
    /// reset at trip boundaries. A penalty of zero disables the check.
    pub fn with_priority_penalty(mut self, penalty: f64) -> Self {
        self.priority_penalty = penalty;
        self
    }

    /// Scores a tour. Lower is better; the result is never negative.
    ///
    /// `genes` is expected to be a permutation of `0..n`, but partial or
    /// malformed sequences are tolerated: if the depot is absent the walk
    /// starts from the first element unrotated.
    pub fn evaluate(&self, genes: &[usize]) -> f64 {
        match self.model {
            CostModel::ClosedTour => self.closed_tour_length(genes) + self.priority_cost(genes),
            CostModel::CapacitySplit { capacity } => self.split_cost(genes, capacity),
        }
    }

    fn closed_tour_length(&self, genes: &[usize]) -> f64 {
        let n = genes.len();
        let mut total = 0.0;
        for i in 0..n {
            total += self.distances.get(genes[i], genes[(i + 1) % n]);
        }
        total
    }

    /// Priority penalty over a visiting order, independent of trip splits.
    fn priority_cost(&self, visits: &[usize]) -> f64 {
        if self.priority_penalty <= 0.0 {
            return 0.0;
        }
        let mut pending_critical = self
            .locations
            .iter()
            .filter(|loc| loc.is_critical())
            .count();
        let mut total = 0.0;
        for &stop in visits {
            if self.locations[stop].is_critical() {
                pending_critical = pending_critical.saturating_sub(1);
            } else if pending_critical > 0 {
                total += self.priority_penalty;
            }
        }
        total
    }

    fn split_cost(&self, genes: &[usize], capacity: i32) -> f64 {
        if genes.is_empty() {
            return 0.0;
        }

        let rotated = rotate_to_depot(genes);
        let depot = 0;

        let mut total = 0.0;
        let mut current_load = 0i32;
        let mut last = rotated[0];

        let mut pending_critical = if self.priority_penalty > 0.0 {
            self.locations
                .iter()
                .filter(|loc| loc.is_critical())
                .count()
        } else {
            0
        };

        for &stop in &rotated[1..] {
            if self.priority_penalty > 0.0 {
                if self.locations[stop].is_critical() {
                    pending_critical = pending_critical.saturating_sub(1);
                } else if pending_critical > 0 {
                    total += self.priority_penalty;
                }
            }

            let weight = self.locations[stop].demand();
            if current_load + weight > capacity {
                // Close the trip at the depot and open a new one. A stop
                // whose demand alone exceeds capacity rides in its own
                // over-capacity trip.
                total += self.distances.get(last, depot);
                total += self.distances.get(depot, stop);
                current_load = weight;
            } else {
                total += self.distances.get(last, stop);
                current_load += weight;
            }
            last = stop;
        }

        total + self.distances.get(last, depot)
    }
}

/// Rotates a tour so the depot (index 0) comes first.
///
/// Sequences without the depot are returned unrotated; downstream walks
/// treat their leading element as the trip anchor.
pub(crate) fn rotate_to_depot(genes: &[usize]) -> Vec<usize> {
    match genes.iter().position(|&g| g == 0) {
        Some(pos) => genes[pos..]
            .iter()
            .chain(genes[..pos].iter())
            .copied()
            .collect(),
        None => genes.to_vec(),
    }
}

//! Elitist generational evolution driver.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::distance::DistanceMatrix;
use crate::error::{EngineError, Result};
use crate::evaluation::FitnessEvaluator;
use crate::models::Location;

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use super::population::Population;
use super::selection::select_parents;
use super::tour::Tour;

/// Per-generation result handed to the caller after each step.
///
/// The full population stays on the driver and is reachable through
/// [`Evolution::population`] for callers that also want to render
/// secondary candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Number of completed generations.
    pub generation: usize,
    /// Best tour of the generation just evaluated.
    pub best: Tour,
    /// Fitness of the best tour; monotonically non-increasing across
    /// generations thanks to elitism.
    pub best_fitness: f64,
}

/// The generational loop: evaluate, sort, carry the elite, breed, replace.
///
/// The driver holds no hidden state beyond the current population and the
/// generation counter. [`step`](Self::step) never blocks and is safely
/// callable repeatedly; pacing between generations and cancellation belong
/// to the caller. Randomness comes exclusively from the injected `Rng`, so
/// seeded runs are reproducible.
///
/// # Examples
///
/// ```
/// use evoroute::ga::{Evolution, GaConfig};
/// use evoroute::models::Location;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let locations = vec![
///     Location::depot(0.0, 0.0),
///     Location::new(1, 1.0, 0.0, 10),
///     Location::new(2, 2.0, 0.0, 10),
///     Location::new(3, 3.0, 0.0, 10),
/// ];
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(30)
///     .with_capacity(30);
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let mut engine = Evolution::new(locations, config, &mut rng).unwrap();
/// let snapshot = engine.run(&mut rng);
/// assert!(engine.is_finished());
/// assert!(snapshot.best.is_permutation());
/// assert!(snapshot.best_fitness.is_finite());
/// ```
pub struct Evolution {
    locations: Vec<Location>,
    distances: DistanceMatrix,
    config: GaConfig,
    population: Population,
    generation: usize,
}

impl Evolution {
    /// Builds a driver from locations and run parameters, validating both
    /// and creating the distance matrix and initial random population.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if the configuration fails
    /// [`GaConfig::validate`], fewer than 2 locations are supplied, any
    /// demand is negative, location IDs don't match their positions, or
    /// the depot (index 0) carries demand.
    pub fn new<R: Rng>(
        locations: Vec<Location>,
        config: GaConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        validate_locations(&locations)?;
        let distances = DistanceMatrix::from_locations(&locations)?;
        let population = Population::random(locations.len(), config.population_size(), rng)?;
        Ok(Self {
            locations,
            distances,
            config,
            population,
            generation: 0,
        })
    }

    /// Advances one generation and returns its best tour.
    ///
    /// Evaluates every tour, sorts the population by fitness, seeds the
    /// next generation with the best tour unmodified (elitism), then breeds
    /// children (selection, order crossover, swap mutation) until the
    /// population size is restored.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Snapshot {
        // Per-tour evaluation is pure and independent.
        let scores: Vec<f64> = {
            let evaluator = self.evaluator();
            self.population
                .tours()
                .par_iter()
                .map(|tour| evaluator.evaluate(tour.genes()))
                .collect()
        };
        for (tour, score) in self.population.tours_mut().iter_mut().zip(scores) {
            tour.set_fitness(score);
        }

        self.population.sort_by_fitness();
        let best = self.population.tours()[0].clone();
        let best_fitness = best.fitness();

        let mut next = Vec::with_capacity(self.config.population_size());
        next.push(best.clone());
        while next.len() < self.config.population_size() {
            let (a, b) = select_parents(&self.population, self.config.selection(), rng);
            let mut genes = order_crossover(
                self.population.tours()[a].genes(),
                self.population.tours()[b].genes(),
                rng,
            );
            swap_mutation(&mut genes, self.config.mutation_probability(), rng);
            next.push(Tour::new(genes));
        }

        self.population = Population::from_tours(next);
        self.generation += 1;
        debug!(generation = self.generation, best_fitness, "generation complete");

        Snapshot {
            generation: self.generation,
            best,
            best_fitness,
        }
    }

    /// Steps until `max_generations` is reached and returns the final
    /// snapshot. If the run is already finished, returns the current best
    /// without advancing.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Snapshot {
        let mut last = None;
        while !self.is_finished() {
            last = Some(self.step(rng));
        }
        match last {
            Some(snapshot) => {
                info!(
                    generations = snapshot.generation,
                    best_fitness = snapshot.best_fitness,
                    "run complete"
                );
                snapshot
            }
            None => Snapshot {
                generation: self.generation,
                best: self.best().clone(),
                best_fitness: self.best().fitness(),
            },
        }
    }

    /// Scores a tour with this run's cost model, without advancing the
    /// search. Usable standalone, e.g. to score a known reference tour.
    pub fn evaluate(&self, genes: &[usize]) -> f64 {
        self.evaluator().evaluate(genes)
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns `true` once `max_generations` generations have completed.
    pub fn is_finished(&self) -> bool {
        self.generation >= self.config.max_generations()
    }

    /// The current population. After at least one step the leading tour is
    /// the elite carried from the last evaluated generation.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The current best tour (the elite). Before the first step this is an
    /// arbitrary unevaluated member of the initial population.
    pub fn best(&self) -> &Tour {
        &self.population.tours()[0]
    }

    /// The locations this run was built from.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The distance matrix built for this run.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    fn evaluator(&self) -> FitnessEvaluator<'_> {
        FitnessEvaluator::capacity_split(&self.locations, &self.distances, self.config.capacity())
            .with_priority_penalty(self.config.priority_penalty())
    }
}

fn validate_locations(locations: &[Location]) -> Result<()> {
    if locations.len() < 2 {
        return Err(EngineError::invalid_input(format!(
            "at least 2 locations required, got {}",
            locations.len()
        )));
    }
    for (idx, location) in locations.iter().enumerate() {
        if location.id() != idx {
            return Err(EngineError::invalid_input(format!(
                "location id {} does not match its position {}",
                location.id(),
                idx
            )));
        }
        if location.demand() < 0 {
            return Err(EngineError::invalid_input(format!(
                "location {} has negative demand {}",
                idx,
                location.demand()
            )));
        }
    }
    if locations[0].demand() != 0 {
        return Err(EngineError::invalid_input(
            "the depot (location 0) must carry no demand",
        ));
    }
    if locations[0].is_critical() {
        return Err(EngineError::invalid_input(
            "the depot (location 0) cannot be critical",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::SelectionPolicy;
    use crate::models::Priority;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn line_locations(n: usize) -> Vec<Location> {
        (0..n)
            .map(|i| {
                if i == 0 {
                    Location::depot(0.0, 0.0)
                } else {
                    Location::new(i, i as f64, 0.0, 10)
                }
            })
            .collect()
    }

    fn small_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(20)
            .with_max_generations(30)
            .with_capacity(30)
    }

    #[test]
    fn test_new_validates_config() {
        let mut rng = SmallRng::seed_from_u64(42);
        let result = Evolution::new(
            line_locations(4),
            small_config().with_population_size(1),
            &mut rng,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_validates_locations() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(Evolution::new(vec![], small_config(), &mut rng).is_err());

        let mut bad_depot = line_locations(4);
        bad_depot[0] = Location::new(0, 0.0, 0.0, 5);
        assert!(Evolution::new(bad_depot, small_config(), &mut rng).is_err());

        let mut negative = line_locations(4);
        negative[2] = Location::new(2, 2.0, 0.0, -1);
        assert!(Evolution::new(negative, small_config(), &mut rng).is_err());

        let mut misnumbered = line_locations(4);
        misnumbered[3] = Location::new(7, 3.0, 0.0, 10);
        assert!(Evolution::new(misnumbered, small_config(), &mut rng).is_err());
    }

    #[test]
    fn test_step_keeps_population_size_and_permutations() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut engine = Evolution::new(line_locations(6), small_config(), &mut rng).expect("valid");
        for _ in 0..5 {
            engine.step(&mut rng);
            assert_eq!(engine.population().len(), 20);
            assert!(engine.population().tours().iter().all(|t| t.is_permutation()));
        }
    }

    #[test]
    fn test_elitism_best_fitness_never_worsens() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut engine = Evolution::new(line_locations(8), small_config(), &mut rng).expect("valid");
        let mut previous = f64::INFINITY;
        for _ in 0..30 {
            let snapshot = engine.step(&mut rng);
            assert!(snapshot.best_fitness <= previous);
            previous = snapshot.best_fitness;
        }
    }

    #[test]
    fn test_elitism_with_roulette_selection() {
        let mut rng = SmallRng::seed_from_u64(7);
        let config = small_config().with_selection(SelectionPolicy::RouletteWheel);
        let mut engine = Evolution::new(line_locations(8), config, &mut rng).expect("valid");
        let mut previous = f64::INFINITY;
        for _ in 0..30 {
            let snapshot = engine.step(&mut rng);
            assert!(snapshot.best_fitness <= previous);
            previous = snapshot.best_fitness;
        }
    }

    #[test]
    fn test_run_finds_near_optimal_line_tour() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = GaConfig::default()
            .with_population_size(50)
            .with_max_generations(200)
            .with_capacity(100);
        let mut engine = Evolution::new(line_locations(4), config, &mut rng).expect("valid");
        let snapshot = engine.run(&mut rng);
        // Single trip 0→1→2→3→0 = 6 is optimal for capacity 100.
        assert!((snapshot.best_fitness - 6.0).abs() < 1e-10);
        assert!(engine.is_finished());
        assert_eq!(engine.generation(), 200);
    }

    #[test]
    fn test_run_when_already_finished_returns_current_best() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = small_config().with_max_generations(3);
        let mut engine = Evolution::new(line_locations(5), config, &mut rng).expect("valid");
        let first = engine.run(&mut rng);
        let again = engine.run(&mut rng);
        assert_eq!(engine.generation(), 3);
        assert_eq!(first.best_fitness, again.best_fitness);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = |seed: u64| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut engine =
                Evolution::new(line_locations(6), small_config(), &mut rng).expect("valid");
            engine.run(&mut rng).best_fitness
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_standalone_evaluate_matches_step_scores() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut engine = Evolution::new(line_locations(5), small_config(), &mut rng).expect("valid");
        let snapshot = engine.step(&mut rng);
        let rescored = engine.evaluate(snapshot.best.genes());
        assert_eq!(rescored, snapshot.best_fitness);
    }

    #[test]
    fn test_priority_penalty_steers_critical_first() {
        // With a huge penalty, the best tour must serve the critical stop
        // before any normal one.
        let mut locations = line_locations(6);
        locations[5] = Location::new(5, 5.0, 0.0, 10).with_priority(Priority::Critical);
        let mut rng = SmallRng::seed_from_u64(42);
        let config = GaConfig::default()
            .with_population_size(60)
            .with_max_generations(300)
            .with_capacity(100)
            .with_priority_penalty(10_000.0);
        let mut engine = Evolution::new(locations, config, &mut rng).expect("valid");
        let snapshot = engine.run(&mut rng);

        let genes = snapshot.best.genes();
        let depot_pos = genes.iter().position(|&g| g == 0).expect("depot present");
        let rotated: Vec<usize> = genes[depot_pos..]
            .iter()
            .chain(genes[..depot_pos].iter())
            .copied()
            .collect();
        assert_eq!(rotated[1], 5, "critical stop must come first: {rotated:?}");
    }
}

//! # evoroute
//!
//! Capacity- and priority-aware delivery route search over depot-anchored
//! locations, driven by an elitist genetic algorithm.
//!
//! The crate is the evolutionary core only: it owns the distance matrix,
//! the population, fitness evaluation with capacity splitting and priority
//! penalties, the genetic operators, and the generational loop. Rendering,
//! parameter entry, and report generation are external collaborators that
//! poll [`Evolution::step`](ga::Evolution::step) for per-generation
//! snapshots and use [`decompose_into_trips`](evaluation::decompose_into_trips)
//! to display vehicle-by-vehicle routes.
//!
//! ## Modules
//!
//! - [`models`] — Locations with demands and priority tags; derived trips
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`evaluation`] — Fitness evaluation and capacity decomposition
//! - [`ga`] — Chromosome, population, operators, selection, and the driver
//! - [`error`] — Crate error type
//!
//! ## Example
//!
//! ```
//! use evoroute::ga::{Evolution, GaConfig};
//! use evoroute::models::{Location, Priority};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let locations = vec![
//!     Location::depot(0.0, 0.0),
//!     Location::new(1, 4.0, 0.0, 30).with_priority(Priority::Critical),
//!     Location::new(2, 0.0, 3.0, 20),
//!     Location::new(3, 4.0, 3.0, 25),
//! ];
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_max_generations(50)
//!     .with_capacity(60)
//!     .with_priority_penalty(1000.0);
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut engine = Evolution::new(locations, config, &mut rng)?;
//!
//! // Step once per frame, or run to completion.
//! let snapshot = engine.run(&mut rng);
//! assert!(snapshot.best.is_permutation());
//! assert!(snapshot.best_fitness.is_finite());
//! # Ok::<(), evoroute::error::EngineError>(())
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod models;

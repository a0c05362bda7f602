//! Genetic algorithm core.
//!
//! - [`Tour`] — permutation chromosome over all location indices
//! - [`Population`] — the current generation's candidates
//! - [`order_crossover`] / [`swap_mutation`] — genetic operators
//! - [`SelectionPolicy`] / [`select_parents`] — parent selection
//! - [`GaConfig`] — immutable run parameters
//! - [`Evolution`] — the elitist generational driver

mod config;
mod engine;
mod operators;
mod population;
mod selection;
mod tour;

pub use config::GaConfig;
pub use engine::{Evolution, Snapshot};
pub use operators::{order_crossover, swap_mutation};
pub use population::Population;
pub use selection::{select_parents, SelectionPolicy};
pub use tour::Tour;

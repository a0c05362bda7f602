//! Run parameters for the genetic search.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

use super::selection::SelectionPolicy;

/// Immutable per-run configuration of the evolution driver.
///
/// Built with `Default` plus `with_*` setters and validated as a whole by
/// [`validate`](Self::validate) (the driver calls it on construction).
///
/// # Examples
///
/// ```
/// use evoroute::ga::{GaConfig, SelectionPolicy};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(200)
///     .with_capacity(80)
///     .with_mutation_probability(0.5)
///     .with_selection(SelectionPolicy::RouletteWheel);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    population_size: usize,
    max_generations: usize,
    mutation_probability: f64,
    capacity: i32,
    priority_penalty: f64,
    selection: SelectionPolicy,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            mutation_probability: 0.3,
            capacity: 80,
            priority_penalty: 0.0,
            selection: SelectionPolicy::TopK(10),
        }
    }
}

impl GaConfig {
    /// Sets the number of tours per generation.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations the run may advance.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the per-individual mutation probability in `[0, 1]`.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    /// Sets the vehicle capacity used for trip splitting.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the penalty charged per Normal stop visited while a Critical
    /// stop is pending. Zero disables the priority check.
    pub fn with_priority_penalty(mut self, penalty: f64) -> Self {
        self.priority_penalty = penalty;
        self
    }

    /// Sets the parent selection policy.
    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    /// Number of tours per generation.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Generation bound for the run.
    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    /// Per-individual mutation probability.
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Priority penalty.
    pub fn priority_penalty(&self) -> f64 {
        self.priority_penalty
    }

    /// Parent selection policy.
    pub fn selection(&self) -> SelectionPolicy {
        self.selection
    }

    /// Checks every parameter, rejecting misconfigured runs up front.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if `population_size < 2`,
    /// `max_generations < 1`, the mutation probability is outside `[0, 1]`
    /// or non-finite, `capacity <= 0`, the priority penalty is negative or
    /// non-finite, or a `TopK` policy has `k == 0`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(EngineError::invalid_input(
                "population size must be at least 2",
            ));
        }
        if self.max_generations < 1 {
            return Err(EngineError::invalid_input(
                "max generations must be at least 1",
            ));
        }
        if !self.mutation_probability.is_finite()
            || !(0.0..=1.0).contains(&self.mutation_probability)
        {
            return Err(EngineError::invalid_input(format!(
                "mutation probability must be in [0, 1], got {}",
                self.mutation_probability
            )));
        }
        if self.capacity <= 0 {
            return Err(EngineError::invalid_input(format!(
                "capacity must be positive, got {}",
                self.capacity
            )));
        }
        if !self.priority_penalty.is_finite() || self.priority_penalty < 0.0 {
            return Err(EngineError::invalid_input(format!(
                "priority penalty must be non-negative, got {}",
                self.priority_penalty
            )));
        }
        if let SelectionPolicy::TopK(0) = self.selection {
            return Err(EngineError::invalid_input(
                "top-k selection requires k of at least 1",
            ));
        }
        Ok(())
    }
}

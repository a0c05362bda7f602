//! Tour fitness evaluation.
//!
//! - [`FitnessEvaluator`] — closed-tour and capacity-split cost models with
//!   optional priority penalties
//! - [`decompose_into_trips`] — pure capacity decomposition for collaborators

mod evaluator;
mod split;

pub use evaluator::FitnessEvaluator;
pub use split::decompose_into_trips;

//! Distance model.
//!
//! Provides the dense pairwise distance matrix built once per run.

mod matrix;

pub use matrix::DistanceMatrix;

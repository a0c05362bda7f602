//! Dense distance matrix.

use crate::error::{EngineError, Result};
use crate::models::Location;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per run from location coordinates and read-only thereafter.
/// Supports both Euclidean construction and explicit distance specification.
///
/// # Examples
///
/// ```
/// use evoroute::models::Location;
/// use evoroute::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::depot(0.0, 0.0),
///     Location::new(1, 3.0, 4.0, 10),
///     Location::new(2, 6.0, 8.0, 20),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from location coordinates.
    ///
    /// The diagonal is zero and the result is symmetric.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if fewer than 2 locations are
    /// supplied.
    pub fn from_locations(locations: &[Location]) -> Result<Self> {
        if locations.len() < 2 {
            return Err(EngineError::invalid_input(format!(
                "at least 2 locations required, got {}",
                locations.len()
            )));
        }
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

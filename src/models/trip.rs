//! Trip type derived from capacity decomposition.

use serde::{Deserialize, Serialize};

/// A depot-to-depot sub-route derived from a tour by capacity splitting.
///
/// Stops are location indices in visiting order, excluding the depot itself
/// (the vehicle implicitly departs from and returns to location 0). Trips
/// are derived on demand by
/// [`decompose_into_trips`](crate::evaluation::decompose_into_trips) and are
/// never stored on a tour.
///
/// # Examples
///
/// ```
/// use evoroute::models::Trip;
///
/// let trip = Trip::new(vec![3, 1], 25);
/// assert_eq!(trip.stops(), &[3, 1]);
/// assert_eq!(trip.load(), 25);
/// assert_eq!(trip.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    stops: Vec<usize>,
    load: i32,
}

impl Trip {
    /// Creates a trip from stops in visiting order and their total load.
    pub fn new(stops: Vec<usize>, load: i32) -> Self {
        Self { stops, load }
    }

    /// Location indices served by this trip, in visiting order.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Total demand carried on this trip.
    ///
    /// May exceed vehicle capacity only when the trip consists of a single
    /// location whose demand alone is over capacity.
    pub fn load(&self) -> i32 {
        self.load
    }

    /// Number of stops (excluding the depot).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this trip serves no locations.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

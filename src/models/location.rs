//! Delivery location and priority types.

use serde::{Deserialize, Serialize};

/// Delivery priority of a location.
///
/// Critical locations are expected to be served before Normal ones; the
/// fitness evaluator charges a configurable penalty for every Normal stop
/// visited while any Critical stop is still pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Regular delivery, no ordering preference.
    #[default]
    Normal,
    /// Must-serve-first delivery.
    Critical,
}

/// A delivery location (or the depot) in a routing run.
///
/// Location 0 is conventionally the depot: it carries no demand and is
/// always [`Priority::Normal`]. Locations are immutable once loaded.
///
/// # Examples
///
/// ```
/// use evoroute::models::{Location, Priority};
///
/// let depot = Location::depot(35.0, 35.0);
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.demand(), 0);
///
/// let loc = Location::new(1, 41.0, 49.0, 10).with_priority(Priority::Critical);
/// assert_eq!(loc.demand(), 10);
/// assert!(loc.is_critical());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    x: f64,
    y: f64,
    demand: i32,
    priority: Priority,
}

impl Location {
    /// Creates a new location with [`Priority::Normal`].
    pub fn new(id: usize, x: f64, y: f64, demand: i32) -> Self {
        Self {
            id,
            x,
            y,
            demand,
            priority: Priority::Normal,
        }
    }

    /// Creates the depot at the given coordinates (id = 0, demand = 0).
    pub fn depot(x: f64, y: f64) -> Self {
        Self::new(0, x, y, 0)
    }

    /// Sets the delivery priority of this location.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Location ID (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Demand weight at this location.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Delivery priority of this location.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns `true` if this location is flagged [`Priority::Critical`].
    pub fn is_critical(&self) -> bool {
        self.priority == Priority::Critical
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_new() {
        let loc = Location::new(3, 10.0, 20.0, 5);
        assert_eq!(loc.id(), 3);
        assert_eq!(loc.x(), 10.0);
        assert_eq!(loc.y(), 20.0);
        assert_eq!(loc.demand(), 5);
        assert_eq!(loc.priority(), Priority::Normal);
    }

    #[test]
    fn test_location_depot() {
        let depot = Location::depot(35.0, 35.0);
        assert_eq!(depot.id(), 0);
        assert_eq!(depot.demand(), 0);
        assert!(!depot.is_critical());
    }

    #[test]
    fn test_location_with_priority() {
        let loc = Location::new(1, 0.0, 0.0, 5).with_priority(Priority::Critical);
        assert!(loc.is_critical());
    }

    #[test]
    fn test_distance() {
        let a = Location::new(0, 0.0, 0.0, 0);
        let b = Location::new(1, 3.0, 4.0, 0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_priority_default() {
        assert_eq!(Priority::default(), Priority::Normal);
    }
}

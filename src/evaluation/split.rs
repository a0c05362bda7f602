//! Capacity decomposition of a tour into depot-anchored trips.

use crate::models::Trip;

use super::evaluator::rotate_to_depot;

/// Splits a tour into depot-to-depot trips respecting vehicle capacity.
///
/// The tour is rotated so the depot (index 0) leads, then walked in order;
/// a trip is closed whenever the next stop's demand would push the load
/// over `capacity`. A single stop whose demand alone exceeds capacity is
/// placed in its own over-capacity trip rather than rejected.
///
/// This is a pure utility sharing the same walk as the capacity-split
/// fitness model, so collaborators can render vehicle-by-vehicle routes
/// without re-deriving the split logic.
///
/// # Examples
///
/// ```
/// use evoroute::evaluation::decompose_into_trips;
///
/// // Depot plus three stops of demand 10, capacity 20.
/// let trips = decompose_into_trips(&[0, 1, 2, 3], &[0, 10, 10, 10], 20);
/// assert_eq!(trips.len(), 2);
/// assert_eq!(trips[0].stops(), &[1, 2]);
/// assert_eq!(trips[1].stops(), &[3]);
/// assert!(trips.iter().all(|t| t.load() <= 20));
/// ```
pub fn decompose_into_trips(genes: &[usize], weights: &[i32], capacity: i32) -> Vec<Trip> {
    if genes.is_empty() {
        return Vec::new();
    }

    let rotated = rotate_to_depot(genes);

    let mut trips = Vec::new();
    let mut stops: Vec<usize> = Vec::new();
    let mut load = 0i32;

    // The leading element anchors the walk and is not itself a stop.
    for &stop in &rotated[1..] {
        let weight = weights[stop];
        if load + weight > capacity {
            if !stops.is_empty() {
                trips.push(Trip::new(stops, load));
            }
            stops = vec![stop];
            load = weight;
        } else {
            stops.push(stop);
            load += weight;
        }
    }

    if !stops.is_empty() {
        trips.push(Trip::new(stops, load));
    }

    trips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_trip() {
        let trips = decompose_into_trips(&[0, 1, 2, 3], &[0, 10, 10, 10], 30);
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].stops(), &[1, 2, 3]);
        assert_eq!(trips[0].load(), 30);
    }

    #[test]
    fn test_split_into_two_trips() {
        // Capacity equals the sum of two demands and is less than three.
        let trips = decompose_into_trips(&[0, 1, 2, 3, 4], &[0, 10, 10, 10, 10], 20);
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].stops(), &[1, 2]);
        assert_eq!(trips[1].stops(), &[3, 4]);
        assert!(trips.iter().all(|t| t.load() <= 20));
    }

    #[test]
    fn test_each_stop_alone() {
        let trips = decompose_into_trips(&[0, 1, 2, 3], &[0, 10, 10, 10], 10);
        assert_eq!(trips.len(), 3);
        for trip in &trips {
            assert_eq!(trip.len(), 1);
            assert_eq!(trip.load(), 10);
        }
    }

    #[test]
    fn test_rotation_to_depot() {
        let trips = decompose_into_trips(&[2, 3, 0, 1], &[0, 10, 10, 10], 30);
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].stops(), &[1, 2, 3]);
    }

    #[test]
    fn test_oversized_stop_rides_alone() {
        let trips = decompose_into_trips(&[0, 1, 2, 3], &[0, 10, 50, 10], 20);
        assert_eq!(trips.len(), 3);
        assert_eq!(trips[1].stops(), &[2]);
        // The forced single-stop trip may exceed capacity.
        assert_eq!(trips[1].load(), 50);
        assert!(trips[0].load() <= 20);
        assert!(trips[2].load() <= 20);
    }

    #[test]
    fn test_trips_partition_the_tour() {
        let genes = [0, 4, 2, 1, 3];
        let trips = decompose_into_trips(&genes, &[0, 5, 15, 10, 10], 20);
        let visited: Vec<usize> = trips.iter().flat_map(|t| t.stops().iter().copied()).collect();
        assert_eq!(visited, vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_empty_tour() {
        assert!(decompose_into_trips(&[], &[], 10).is_empty());
    }

    #[test]
    fn test_depot_only() {
        assert!(decompose_into_trips(&[0], &[0], 10).is_empty());
    }
}

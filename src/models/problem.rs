//! Dispatch problem instance.

use super::{Container, Location, TruckCapacity};
use crate::distance::{DistanceMatrix, DistanceOracle};

/// A validated, request-scoped dispatch problem.
///
/// Locations are addressed by index; containers refer to their source and
/// destination by those indices. The distance matrix is computed once, up
/// front, from a [`DistanceOracle`].
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Container, Coordinates, Location, LocationKind, Problem, Temperature, TruckCapacity};
/// use u_dispatch::distance::GreatCircle;
///
/// let at = |lat, lon| Coordinates::new(lat, lon).unwrap();
/// let locations = vec![
///     Location::new("dc", LocationKind::Source, at(39.36, -84.31)),
///     Location::new("dayton", LocationKind::Destination, at(39.76, -84.19)),
/// ];
/// let containers = vec![Container::new("C01", 0, 1, 2, Temperature::Ambient)];
/// let capacity = TruckCapacity::new(10, 5).unwrap();
///
/// let problem = Problem::new(locations, containers, capacity, &GreatCircle);
/// assert_eq!(problem.num_containers(), 1);
/// assert!(problem.distance(0, 1) > 40_000.0);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    locations: Vec<Location>,
    containers: Vec<Container>,
    capacity: TruckCapacity,
    distances: DistanceMatrix,
}

impl Problem {
    /// Creates a problem, computing the distance matrix with `oracle`.
    pub fn new(
        locations: Vec<Location>,
        containers: Vec<Container>,
        capacity: TruckCapacity,
        oracle: &dyn DistanceOracle,
    ) -> Self {
        let distances = DistanceMatrix::from_locations(&locations, oracle);
        Self {
            locations,
            containers,
            capacity,
            distances,
        }
    }

    /// Creates a problem with a precomputed distance matrix.
    ///
    /// Returns `None` if the matrix size doesn't match the location count.
    pub fn with_distances(
        locations: Vec<Location>,
        containers: Vec<Container>,
        capacity: TruckCapacity,
        distances: DistanceMatrix,
    ) -> Option<Self> {
        if distances.size() != locations.len() {
            return None;
        }
        Some(Self {
            locations,
            containers,
            capacity,
            distances,
        })
    }

    /// All locations, sources and destinations.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location at `index`.
    pub fn location(&self, index: usize) -> &Location {
        &self.locations[index]
    }

    /// Indices of source locations, in declaration order.
    pub fn sources(&self) -> impl Iterator<Item = usize> + '_ {
        self.locations
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_source())
            .map(|(i, _)| i)
    }

    /// Solvable containers, in input order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Container at `index`.
    pub fn container(&self, index: usize) -> &Container {
        &self.containers[index]
    }

    /// Number of solvable containers.
    pub fn num_containers(&self) -> usize {
        self.containers.len()
    }

    /// Per-truck compartment limits.
    pub fn capacity(&self) -> &TruckCapacity {
        &self.capacity
    }

    /// Distance matrix over all locations.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Travel distance between two locations.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }
}

//! Truck (route) type.

use super::{Container, Load};
use crate::geometry::LegGeometry;

/// One vehicle's assignment: a source, an ordered list of destination stops,
/// and the containers it carries.
///
/// A truck starts and ends at its source (not stored in `stops`). Distance
/// and duration are filled in by the
/// [`SolutionAssembler`](crate::evaluation::SolutionAssembler).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Container, Temperature, Truck};
///
/// let mut truck = Truck::new(0);
/// truck.assign(0, &Container::new("c0", 0, 3, 2, Temperature::Ambient));
/// truck.assign(1, &Container::new("c1", 0, 3, 1, Temperature::Refrigerated));
/// assert_eq!(truck.stops(), &[3]);
/// assert_eq!(truck.containers(), &[0, 1]);
/// assert_eq!(truck.load().refrigerated(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Truck {
    source: usize,
    stops: Vec<usize>,
    containers: Vec<usize>,
    load: Load,
    total_distance: f64,
    total_duration: f64,
    legs: Vec<LegGeometry>,
}

impl Truck {
    /// Creates an empty truck based at the given source location.
    pub fn new(source: usize) -> Self {
        Self {
            source,
            stops: Vec::new(),
            containers: Vec::new(),
            load: Load::default(),
            total_distance: 0.0,
            total_duration: 0.0,
            legs: Vec::new(),
        }
    }

    /// Assigns a container (by index) and appends its destination as a stop
    /// unless the truck already stops there.
    pub fn assign(&mut self, index: usize, container: &Container) {
        self.containers.push(index);
        self.load.add_units(container.temperature(), container.size());
        self.push_stop(container.destination());
    }

    /// Appends a stop unless already present.
    pub fn push_stop(&mut self, location: usize) {
        if !self.stops.contains(&location) {
            self.stops.push(location);
        }
    }

    /// Moves all containers and stops of `other` into this truck.
    pub fn absorb(&mut self, other: Truck) {
        for stop in other.stops {
            self.push_stop(stop);
        }
        self.containers.extend(other.containers);
        self.load += other.load;
    }

    /// Replaces the visiting order. `order` must be a permutation of the
    /// current stops.
    pub fn set_stops(&mut self, order: Vec<usize>) {
        debug_assert_eq!(order.len(), self.stops.len());
        self.stops = order;
    }

    /// Source location index.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Destination location indices in visiting order.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Returns `true` if the truck stops at `location`.
    pub fn visits(&self, location: usize) -> bool {
        self.stops.contains(&location)
    }

    /// Assigned container indices, in assignment order.
    pub fn containers(&self) -> &[usize] {
        &self.containers
    }

    /// Current compartment totals.
    pub fn load(&self) -> &Load {
        &self.load
    }

    /// Returns `true` if nothing is assigned.
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Closed-tour distance (set by the assembler).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Route duration (set by the assembler).
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    /// Per-leg geometry, when a geometry provider was used.
    pub fn legs(&self) -> &[LegGeometry] {
        &self.legs
    }

    /// Sets the total distance (used by the assembler).
    pub fn set_total_distance(&mut self, d: f64) {
        self.total_distance = d;
    }

    /// Sets the total duration (used by the assembler).
    pub fn set_total_duration(&mut self, d: f64) {
        self.total_duration = d;
    }

    /// Sets the leg geometry (used by the assembler).
    pub fn set_legs(&mut self, legs: Vec<LegGeometry>) {
        self.legs = legs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Temperature;

    #[test]
    fn test_truck_empty() {
        let t = Truck::new(2);
        assert!(t.is_empty());
        assert_eq!(t.source(), 2);
        assert!(t.stops().is_empty());
        assert_eq!(t.total_distance(), 0.0);
        assert!(t.load().is_empty());
    }

    #[test]
    fn test_assign_dedups_stops() {
        let mut t = Truck::new(0);
        t.assign(0, &Container::new("a", 0, 4, 1, Temperature::Ambient));
        t.assign(1, &Container::new("b", 0, 5, 2, Temperature::Ambient));
        t.assign(2, &Container::new("c", 0, 4, 3, Temperature::Refrigerated));
        assert_eq!(t.stops(), &[4, 5]);
        assert_eq!(t.containers(), &[0, 1, 2]);
        assert_eq!(*t.load(), Load::new(3, 3));
        assert!(t.visits(5));
        assert!(!t.visits(6));
    }

    #[test]
    fn test_absorb() {
        let mut a = Truck::new(0);
        a.assign(0, &Container::new("a", 0, 4, 1, Temperature::Ambient));
        let mut b = Truck::new(0);
        b.assign(1, &Container::new("b", 0, 5, 2, Temperature::Refrigerated));
        a.absorb(b);
        assert_eq!(a.stops(), &[4, 5]);
        assert_eq!(a.containers(), &[0, 1]);
        assert_eq!(*a.load(), Load::new(1, 2));
    }

    #[test]
    fn test_set_stops() {
        let mut t = Truck::new(0);
        t.push_stop(3);
        t.push_stop(4);
        t.set_stops(vec![4, 3]);
        assert_eq!(t.stops(), &[4, 3]);
    }
}

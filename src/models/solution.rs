//! Solution, violation, and result types.

use serde::Serialize;

use super::{Temperature, Truck};

/// A type of invariant violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A compartment is loaded beyond its capacity.
    CapacityExceeded {
        /// Truck index in the solution.
        truck_index: usize,
        /// Overloaded compartment.
        temperature: Temperature,
        /// Load in that compartment.
        load: u64,
        /// Compartment capacity.
        capacity: u32,
    },
    /// A container from another source was loaded on the truck.
    MixedSource {
        /// Truck index in the solution.
        truck_index: usize,
        /// Offending container ID.
        container_id: String,
    },
    /// A container's destination is not among the truck's stops.
    StopMissing {
        /// Truck index in the solution.
        truck_index: usize,
        /// Offending container ID.
        container_id: String,
    },
    /// A solvable container is not assigned to any truck.
    ContainerMissing {
        /// Container ID.
        container_id: String,
    },
    /// A container is assigned to more than one truck.
    ContainerDuplicated {
        /// Container ID.
        container_id: String,
    },
}

/// An invariant violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// One complete strategy output: a fleet of trucks.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Solution, Truck};
///
/// let mut sol = Solution::new();
/// let mut truck = Truck::new(0);
/// truck.set_total_distance(12.5);
/// sol.add_truck(truck);
/// assert_eq!(sol.num_trucks(), 1);
/// assert_eq!(sol.total_distance(), 12.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    trucks: Vec<Truck>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self { trucks: Vec::new() }
    }

    /// Creates a solution from a list of trucks.
    pub fn from_trucks(trucks: Vec<Truck>) -> Self {
        Self { trucks }
    }

    /// Adds a truck to this solution.
    pub fn add_truck(&mut self, truck: Truck) {
        self.trucks.push(truck);
    }

    /// Returns the trucks in this solution.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// Returns the number of trucks used.
    pub fn num_trucks(&self) -> usize {
        self.trucks.len()
    }

    /// Total distance across all trucks.
    pub fn total_distance(&self) -> f64 {
        self.trucks.iter().map(|t| t.total_distance()).sum()
    }

    /// Total duration across all trucks.
    pub fn total_duration(&self) -> f64 {
        self.trucks.iter().map(|t| t.total_duration()).sum()
    }

    /// Total number of containers carried.
    pub fn num_assigned(&self) -> usize {
        self.trucks.iter().map(|t| t.containers().len()).sum()
    }
}

/// A container no truck can carry: its size exceeds the capacity of its
/// temperature compartment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfeasibleContainer {
    /// Container ID.
    pub container_id: String,
    /// Requested size.
    pub size: u32,
    /// Temperature class.
    pub temperature: Temperature,
    /// Capacity of the matching compartment.
    pub capacity: u32,
}

/// Both strategy outputs for one request, plus the containers that were
/// excluded as infeasible.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Greedy rule-list solution.
    pub basic: Solution,
    /// Savings + 2-opt solution.
    pub optimized: Solution,
    /// Containers excluded from both solutions.
    pub infeasible: Vec<InfeasibleContainer>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Container;

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new();
        assert_eq!(sol.num_trucks(), 0);
        assert_eq!(sol.num_assigned(), 0);
        assert_eq!(sol.total_distance(), 0.0);
        assert_eq!(sol.total_duration(), 0.0);
    }

    #[test]
    fn test_solution_totals() {
        let mut t1 = Truck::new(0);
        t1.assign(0, &Container::new("a", 0, 2, 1, Temperature::Ambient));
        t1.set_total_distance(50.0);
        t1.set_total_duration(5.0);

        let mut t2 = Truck::new(1);
        t2.assign(1, &Container::new("b", 1, 3, 1, Temperature::Ambient));
        t2.assign(2, &Container::new("c", 1, 3, 1, Temperature::Refrigerated));
        t2.set_total_distance(80.0);
        t2.set_total_duration(8.0);

        let sol = Solution::from_trucks(vec![t1, t2]);
        assert_eq!(sol.num_trucks(), 2);
        assert_eq!(sol.num_assigned(), 3);
        assert!((sol.total_distance() - 130.0).abs() < 1e-10);
        assert!((sol.total_duration() - 13.0).abs() < 1e-10);
    }

    #[test]
    fn test_violation_types() {
        let v = Violation::new(ViolationType::CapacityExceeded {
            truck_index: 0,
            temperature: Temperature::Ambient,
            load: 12,
            capacity: 10,
        });
        assert!(matches!(
            v.kind,
            ViolationType::CapacityExceeded { load: 12, capacity: 10, .. }
        ));
    }

    #[test]
    fn test_infeasible_serializes_codes() {
        let inf = InfeasibleContainer {
            container_id: "big".into(),
            size: 4,
            temperature: Temperature::Refrigerated,
            capacity: 3,
        };
        let json = serde_json::to_value(&inf).expect("serialize");
        assert_eq!(json["temperature"], "RE");
        assert_eq!(json["capacity"], 3);
    }
}

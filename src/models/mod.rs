//! Domain model types for container dispatch.
//!
//! Provides the core abstractions: locations (sources and destinations),
//! temperature-classed containers, dual-compartment loads and capacity,
//! trucks as ordered stop sequences, and solutions.

mod capacity;
mod container;
mod location;
mod problem;
mod solution;
mod truck;

pub use capacity::{Load, TruckCapacity};
pub use container::{Container, Temperature};
pub use location::{Coordinates, Location, LocationKind};
pub use problem::Problem;
pub use solution::{InfeasibleContainer, OptimizationResult, Solution, Violation, ViolationType};
pub use truck::Truck;

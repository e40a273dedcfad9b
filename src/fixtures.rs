//! Shared test fixtures.

use crate::distance::DistanceMatrix;
use crate::models::{
    Container, Coordinates, Location, LocationKind, Problem, Temperature, TruckCapacity,
};

/// Euclidean matrix over planar points, for hand-checkable distances.
pub(crate) fn planar_matrix(points: &[(f64, f64)]) -> DistanceMatrix {
    let n = points.len();
    let mut dm = DistanceMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            let dx = points[i].0 - points[j].0;
            let dy = points[i].1 - points[j].1;
            dm.set(i, j, (dx * dx + dy * dy).sqrt());
        }
    }
    dm
}

/// Builds a problem with `sources` source locations followed by
/// destinations, one per remaining matrix row. Sources are named `s0..`,
/// destinations `d0..`.
pub(crate) fn problem(
    sources: usize,
    distances: DistanceMatrix,
    containers: Vec<Container>,
    capacity: (u32, u32),
) -> Problem {
    let origin = Coordinates::new(0.0, 0.0).expect("valid");
    let locations = (0..distances.size())
        .map(|i| {
            if i < sources {
                Location::new(format!("s{i}"), LocationKind::Source, origin)
            } else {
                Location::new(format!("d{}", i - sources), LocationKind::Destination, origin)
            }
        })
        .collect();
    let capacity = TruckCapacity::new(capacity.0, capacity.1).expect("valid capacity");
    Problem::with_distances(locations, containers, capacity, distances).expect("matching sizes")
}

/// Ambient container shorthand.
pub(crate) fn am(id: &str, source: usize, destination: usize, size: u32) -> Container {
    Container::new(id, source, destination, size, Temperature::Ambient)
}

/// Refrigerated container shorthand.
pub(crate) fn re(id: &str, source: usize, destination: usize, size: u32) -> Container {
    Container::new(id, source, destination, size, Temperature::Refrigerated)
}

//! Turns raw trucks into a measured [`Solution`].

use crate::config::EngineConfig;
use crate::geometry::{resolve_legs, GeometryProvider};
use crate::models::{Coordinates, Problem, Solution, Truck};
use crate::parallel::parallel_into_collect;
use crate::sequencing::route_distance;

/// Fills in per-truck distance, duration and (optionally) leg geometry.
///
/// Distance always comes from the problem's distance matrix, so both
/// strategies are compared under the same metric. Duration is the sum of
/// the geometry provider's leg durations when one is attached, otherwise
/// distance divided by the configured average speed.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::evaluation::SolutionAssembler;
/// use u_dispatch::models::{Container, Coordinates, Location, LocationKind, Problem, Temperature, Truck, TruckCapacity};
/// use u_dispatch::EngineConfig;
///
/// let c = Coordinates::new(0.0, 0.0).unwrap();
/// let locations = vec![
///     Location::new("src", LocationKind::Source, c),
///     Location::new("dst", LocationKind::Destination, c),
/// ];
/// let containers = vec![Container::new("c0", 0, 1, 1, Temperature::Ambient)];
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 500.0, 500.0, 0.0]).unwrap();
/// let cap = TruckCapacity::new(10, 6).unwrap();
/// let problem = Problem::with_distances(locations, containers, cap, dm).unwrap();
///
/// let mut truck = Truck::new(0);
/// truck.assign(0, problem.container(0));
///
/// let config = EngineConfig::default().with_average_speed(10.0);
/// let solution = SolutionAssembler::new(&problem, &config).assemble(vec![truck]);
/// assert_eq!(solution.total_distance(), 1000.0);
/// assert_eq!(solution.total_duration(), 100.0);
/// ```
pub struct SolutionAssembler<'a> {
    problem: &'a Problem,
    config: &'a EngineConfig,
    geometry: Option<&'a dyn GeometryProvider>,
}

impl<'a> SolutionAssembler<'a> {
    /// Creates an assembler without a geometry provider.
    pub fn new(problem: &'a Problem, config: &'a EngineConfig) -> Self {
        Self {
            problem,
            config,
            geometry: None,
        }
    }

    /// Attaches a geometry provider for leg paths and durations.
    pub fn with_geometry(mut self, geometry: Option<&'a dyn GeometryProvider>) -> Self {
        self.geometry = geometry;
        self
    }

    /// Measures every truck and wraps them into a solution, keeping order.
    pub fn assemble(&self, trucks: Vec<Truck>) -> Solution {
        let measured = parallel_into_collect(trucks, self.config.parallel, |mut truck| {
            self.measure(&mut truck);
            truck
        });
        Solution::from_trucks(measured)
    }

    fn measure(&self, truck: &mut Truck) {
        let distance = route_distance(truck.stops(), truck.source(), self.problem.distances());
        truck.set_total_distance(distance);

        let Some(provider) = self.geometry else {
            truck.set_total_duration(self.config.duration_for(distance));
            return;
        };
        if truck.stops().is_empty() {
            truck.set_total_duration(0.0);
            return;
        }

        let legs = resolve_legs(
            provider,
            &self.waypoints(truck),
            self.config.geometry_retries,
            self.config.average_speed_mps,
        );
        truck.set_total_duration(legs.iter().map(|l| l.duration_seconds).sum());
        truck.set_legs(legs);
    }

    fn waypoints(&self, truck: &Truck) -> Vec<Coordinates> {
        let at = |i: usize| *self.problem.location(i).coordinates();
        std::iter::once(truck.source())
            .chain(truck.stops().iter().copied())
            .chain(std::iter::once(truck.source()))
            .map(at)
            .collect()
    }
}

//! Request validation and conversion to a [`Problem`].

use std::collections::{HashMap, HashSet};

use tracing::warn;

use super::request::{LocationInput, OptimizationRequest, TruckSize};
use crate::distance::DistanceOracle;
use crate::error::ValidationError;
use crate::models::{
    Container, Coordinates, InfeasibleContainer, Location, LocationKind, Problem, Temperature,
    TruckCapacity,
};

/// A request that passed validation.
#[derive(Debug, Clone)]
pub struct Validated {
    /// Solvable part of the request. Sources come first, then destinations,
    /// both in request order.
    pub problem: Problem,
    /// Containers too large for their compartment, in request order. They
    /// are not part of `problem`.
    pub infeasible: Vec<InfeasibleContainer>,
}

/// Checks a request and builds the problem, measuring distances with `oracle`.
///
/// Every structural error is fatal. Containers that are well-formed but
/// larger than their compartment are set aside in
/// [`Validated::infeasible`] instead.
pub fn validate(
    request: &OptimizationRequest,
    oracle: &dyn DistanceOracle,
) -> Result<Validated, ValidationError> {
    let capacity = capacity(&request.truck_size)?;

    let mut locations = Vec::with_capacity(request.sources.len() + request.destinations.len());
    let source_index = index_locations(&request.sources, LocationKind::Source, &mut locations)?;
    let destination_index =
        index_locations(&request.destinations, LocationKind::Destination, &mut locations)?;

    let mut seen = HashSet::new();
    let mut containers = Vec::with_capacity(request.containers.len());
    let mut infeasible = Vec::new();

    for input in &request.containers {
        let id = input.container_id.as_str();
        if id.is_empty() {
            return Err(ValidationError::EmptyId { role: "container" });
        }
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateContainer { id: id.to_string() });
        }
        let source = *source_index.get(input.source_id.as_str()).ok_or_else(|| {
            ValidationError::UnknownSource {
                container_id: id.to_string(),
                source_id: input.source_id.clone(),
            }
        })?;
        let destination = *destination_index
            .get(input.destination_id.as_str())
            .ok_or_else(|| ValidationError::UnknownDestination {
                container_id: id.to_string(),
                destination_id: input.destination_id.clone(),
            })?;
        let size = u32::try_from(input.size)
            .ok()
            .filter(|&s| s > 0)
            .ok_or(ValidationError::InvalidSize {
                container_id: id.to_string(),
                size: input.size,
            })?;
        let temperature = Temperature::from_code(&input.temperature).ok_or_else(|| {
            ValidationError::UnknownTemperature {
                container_id: id.to_string(),
                code: input.temperature.clone(),
            }
        })?;

        let container = Container::new(id, source, destination, size, temperature);
        if capacity.can_carry(&container) {
            containers.push(container);
        } else {
            warn!(
                container = id,
                size,
                compartment = temperature.code(),
                capacity = capacity.get(temperature),
                "container exceeds compartment capacity"
            );
            infeasible.push(InfeasibleContainer {
                container_id: id.to_string(),
                size,
                temperature,
                capacity: capacity.get(temperature),
            });
        }
    }

    Ok(Validated {
        problem: Problem::new(locations, containers, capacity, oracle),
        infeasible,
    })
}

fn capacity(size: &TruckSize) -> Result<TruckCapacity, ValidationError> {
    let compartment = |code: &'static str, value: i64| {
        u32::try_from(value)
            .ok()
            .filter(|&v| v > 0)
            .ok_or(ValidationError::InvalidCapacity {
                compartment: code,
                value,
            })
    };
    let ambient = compartment("AM", size.ambient)?;
    let refrigerated = compartment("RE", size.refrigerated)?;
    TruckCapacity::new(ambient, refrigerated).ok_or(ValidationError::InvalidCapacity {
        compartment: "AM",
        value: size.ambient,
    })
}

/// Appends `inputs` to `locations` and returns an ID → location index map.
fn index_locations<'r>(
    inputs: &'r [LocationInput],
    kind: LocationKind,
    locations: &mut Vec<Location>,
) -> Result<HashMap<&'r str, usize>, ValidationError> {
    let role = match kind {
        LocationKind::Source => "source",
        LocationKind::Destination => "destination",
    };
    let mut index = HashMap::with_capacity(inputs.len());
    for input in inputs {
        if input.id.is_empty() {
            return Err(ValidationError::EmptyId { role });
        }
        let coordinates = input
            .lat
            .value()
            .zip(input.lon.value())
            .and_then(|(lat, lon)| Coordinates::new(lat, lon))
            .ok_or_else(|| ValidationError::InvalidCoordinates {
                id: input.id.clone(),
            })?;
        if index.insert(input.id.as_str(), locations.len()).is_some() {
            return Err(ValidationError::DuplicateLocation {
                role,
                id: input.id.clone(),
            });
        }
        locations.push(Location::new(input.id.clone(), kind, coordinates));
    }
    Ok(index)
}

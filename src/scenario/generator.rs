use rand::Rng;

use crate::api::{ContainerInput, LocationInput, OptimizationRequest, TruckSize};

const LAT_RANGE: (f64, f64) = (38.0, 40.0);
const LON_RANGE: (f64, f64) = (-86.2, -83.0);
const SIZE_RANGE: (i64, i64) = (1, 4);

/// Shape of a synthetic benchmark instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSpec {
    /// Display name.
    pub name: String,
    /// Number of sources.
    pub sources: usize,
    /// Number of destinations.
    pub destinations: usize,
    /// Number of containers.
    pub containers: usize,
    /// Probability that a container is ambient.
    pub ambient_fraction: f64,
    /// Ambient compartment capacity.
    pub truck_ambient: i64,
    /// Refrigerated compartment capacity.
    pub truck_refrigerated: i64,
}

impl ScenarioSpec {
    /// Creates a spec.
    pub fn new(
        name: impl Into<String>,
        sources: usize,
        destinations: usize,
        containers: usize,
        ambient_fraction: f64,
        truck: (i64, i64),
    ) -> Self {
        Self {
            name: name.into(),
            sources,
            destinations,
            containers,
            ambient_fraction,
            truck_ambient: truck.0,
            truck_refrigerated: truck.1,
        }
    }
}

/// The standard benchmark suite, small to large plus capacity and
/// temperature-mix variations.
pub fn default_scenarios() -> Vec<ScenarioSpec> {
    vec![
        ScenarioSpec::new("small: 1src 3dst 10c", 1, 3, 10, 0.6, (10, 6)),
        ScenarioSpec::new("small: 2src 5dst 20c", 2, 5, 20, 0.6, (10, 6)),
        ScenarioSpec::new("medium: 2src 8dst 40c", 2, 8, 40, 0.6, (10, 6)),
        ScenarioSpec::new("medium: 3src 8dst 50c", 3, 8, 50, 0.5, (12, 8)),
        ScenarioSpec::new("large: 4src 10dst 80c", 4, 10, 80, 0.6, (15, 10)),
        ScenarioSpec::new("large: 5src 10dst 100c", 5, 10, 100, 0.6, (15, 10)),
        ScenarioSpec::new("tight capacity: 2src 6dst", 2, 6, 40, 0.7, (6, 4)),
        ScenarioSpec::new("loose capacity: 2src 6dst", 2, 6, 40, 0.7, (20, 15)),
        ScenarioSpec::new("AM-heavy: 2src 6dst 40c", 2, 6, 40, 0.9, (12, 4)),
        ScenarioSpec::new("RE-heavy: 2src 6dst 40c", 2, 6, 40, 0.1, (4, 12)),
    ]
}

/// Draws a request matching `spec` from `rng`.
///
/// Locations are scattered uniformly over a fixed regional bounding box;
/// container sizes are uniform in 1..=4. The same seed always yields the
/// same request.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_dispatch::scenario::{default_scenarios, generate};
///
/// let spec = &default_scenarios()[0];
/// let a = generate(spec, &mut StdRng::seed_from_u64(42));
/// let b = generate(spec, &mut StdRng::seed_from_u64(42));
/// assert_eq!(a, b);
/// assert_eq!(a.containers.len(), 10);
/// ```
pub fn generate<R: Rng + ?Sized>(spec: &ScenarioSpec, rng: &mut R) -> OptimizationRequest {
    let sources = locations("src", spec.sources, rng);
    let destinations = locations("dst", spec.destinations, rng);

    let count = if sources.is_empty() || destinations.is_empty() {
        0
    } else {
        spec.containers
    };
    let containers = (0..count)
        .map(|k| {
            let source = &sources[rng.random_range(0..sources.len())];
            let destination = &destinations[rng.random_range(0..destinations.len())];
            let temperature = if rng.random_bool(spec.ambient_fraction.clamp(0.0, 1.0)) {
                "AM"
            } else {
                "RE"
            };
            ContainerInput {
                container_id: format!("c-{k}"),
                source_id: source.id.clone(),
                destination_id: destination.id.clone(),
                size: rng.random_range(SIZE_RANGE.0..=SIZE_RANGE.1),
                temperature: temperature.to_string(),
            }
        })
        .collect();

    OptimizationRequest {
        sources,
        destinations,
        containers,
        truck_size: TruckSize {
            ambient: spec.truck_ambient,
            refrigerated: spec.truck_refrigerated,
        },
    }
}

fn locations<R: Rng + ?Sized>(prefix: &str, count: usize, rng: &mut R) -> Vec<LocationInput> {
    (0..count)
        .map(|i| LocationInput {
            id: format!("{prefix}-{i}"),
            lat: rng.random_range(LAT_RANGE.0..LAT_RANGE.1).into(),
            lon: rng.random_range(LON_RANGE.0..LON_RANGE.1).into(),
        })
        .collect()
}

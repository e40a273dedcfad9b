//! Wire-format request types.

use serde::{Deserialize, Serialize};

/// A dispatch request as received over JSON.
///
/// # Examples
///
/// ```
/// use u_dispatch::api::OptimizationRequest;
///
/// let json = r#"{
///     "sources": [{ "id": "dc", "lat": "39.36", "lon": -84.31 }],
///     "destinations": [{ "id": "dayton", "lat": 39.76, "lon": -84.19 }],
///     "containers": [
///         { "container_id": "C1", "source_id": "dc", "destination_id": "dayton", "size": 3, "temperature": "AM" }
///     ],
///     "truck_size": { "AM": 10, "RE": 5 }
/// }"#;
/// let request: OptimizationRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.sources[0].lat.value(), Some(39.36));
/// assert_eq!(request.truck_size.ambient, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// Depots where containers originate.
    pub sources: Vec<LocationInput>,
    /// Delivery points.
    pub destinations: Vec<LocationInput>,
    /// Containers to move.
    pub containers: Vec<ContainerInput>,
    /// Per-compartment capacity of every truck.
    pub truck_size: TruckSize,
}

/// A source or destination as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    /// Unique ID within its role.
    pub id: String,
    /// Latitude in degrees.
    pub lat: Coordinate,
    /// Longitude in degrees.
    pub lon: Coordinate,
}

/// A coordinate that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    /// `39.1`
    Number(f64),
    /// `"39.1"`
    Text(String),
}

impl Coordinate {
    /// Numeric value, or `None` if the text does not parse.
    pub fn value(&self) -> Option<f64> {
        match self {
            Coordinate::Number(v) => Some(*v),
            Coordinate::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<f64> for Coordinate {
    fn from(v: f64) -> Self {
        Coordinate::Number(v)
    }
}

/// A container as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerInput {
    /// Unique container ID.
    pub container_id: String,
    /// ID of the source it departs from.
    pub source_id: String,
    /// ID of the destination it is delivered to.
    pub destination_id: String,
    /// Capacity units; must be positive.
    pub size: i64,
    /// `"AM"` or `"RE"`.
    pub temperature: String,
}

/// Truck compartment capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckSize {
    /// Ambient compartment.
    #[serde(rename = "AM")]
    pub ambient: i64,
    /// Refrigerated compartment.
    #[serde(rename = "RE")]
    pub refrigerated: i64,
}

//! Location and coordinate types.

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Coordinates;
///
/// let c = Coordinates::new(39.1013, -84.5151).unwrap();
/// assert_eq!(c.lat(), 39.1013);
/// assert!(Coordinates::new(91.0, 0.0).is_none());
/// assert!(Coordinates::new(f64::NAN, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    ///
    /// Returns `None` if either value is non-finite or out of range
    /// (latitude within ±90, longitude within ±180).
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return None;
        }
        Some(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Whether a location is a pickup source or a delivery destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    /// Depot where containers originate and trucks start and end.
    Source,
    /// Drop-off point for one or more containers.
    Destination,
}

/// A source or destination in a dispatch problem.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Coordinates, Location, LocationKind};
///
/// let depot = Location::new("dc-mason", LocationKind::Source, Coordinates::new(39.36, -84.31).unwrap());
/// assert_eq!(depot.id(), "dc-mason");
/// assert!(depot.is_source());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    id: String,
    kind: LocationKind,
    coordinates: Coordinates,
}

impl Location {
    /// Creates a new location.
    pub fn new(id: impl Into<String>, kind: LocationKind, coordinates: Coordinates) -> Self {
        Self {
            id: id.into(),
            kind,
            coordinates,
        }
    }

    /// Location ID as given in the request.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Role of this location.
    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// Returns `true` for sources.
    pub fn is_source(&self) -> bool {
        self.kind == LocationKind::Source
    }

    /// Geographic position.
    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }
}

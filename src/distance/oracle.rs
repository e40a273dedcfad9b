//! Travel-cost metrics between locations.

use std::collections::HashMap;

use crate::models::{Coordinates, Location};

/// Mean earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A symmetric, non-negative travel-cost metric between two locations.
///
/// Implementations must satisfy `distance(a, b) == distance(b, a)` and
/// `distance(a, a) == 0`, and must be deterministic. The triangle
/// inequality is not required.
pub trait DistanceOracle: Send + Sync {
    /// Travel cost from `a` to `b`, in meters.
    fn distance(&self, a: &Location, b: &Location) -> f64;
}

/// Great-circle (haversine) distance over the mean earth radius.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::haversine;
/// use u_dispatch::models::Coordinates;
///
/// let a = Coordinates::new(0.0, 0.0).unwrap();
/// let b = Coordinates::new(0.0, 1.0).unwrap();
/// // One degree of longitude at the equator is ~111.2 km.
/// assert!((haversine(&a, &b) - 111_195.0).abs() < 10.0);
/// ```
pub fn haversine(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.lon() - a.lon()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_METERS * c
}

/// Straight-line distance on the sphere. The default oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatCircle;

impl DistanceOracle for GreatCircle {
    fn distance(&self, a: &Location, b: &Location) -> f64 {
        haversine(a.coordinates(), b.coordinates())
    }
}

/// Externally supplied pairwise distances keyed by location ID, such as a
/// precomputed road-distance matrix.
///
/// Entries are stored symmetrically. Pairs without an entry fall back to
/// great-circle distance.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::{DistanceOracle, LookupOracle};
/// use u_dispatch::models::{Coordinates, Location, LocationKind};
///
/// let origin = Coordinates::new(0.0, 0.0).unwrap();
/// let a = Location::new("A", LocationKind::Destination, origin);
/// let b = Location::new("B", LocationKind::Destination, origin);
///
/// let oracle = LookupOracle::new().with("A", "B", 5.0);
/// assert_eq!(oracle.distance(&a, &b), 5.0);
/// assert_eq!(oracle.distance(&b, &a), 5.0);
/// assert_eq!(oracle.distance(&a, &a), 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LookupOracle {
    table: HashMap<(String, String), f64>,
}

impl LookupOracle {
    /// Creates an empty lookup table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a square matrix whose rows and columns follow
    /// `ids`. Asymmetric entries are averaged so the metric stays symmetric.
    ///
    /// Returns `None` if the matrix is not `ids.len()` square or holds a
    /// negative or non-finite value.
    pub fn from_matrix(ids: &[&str], rows: &[Vec<f64>]) -> Option<Self> {
        let n = ids.len();
        if rows.len() != n || rows.iter().any(|r| r.len() != n) {
            return None;
        }
        if rows.iter().flatten().any(|d| !d.is_finite() || *d < 0.0) {
            return None;
        }
        let mut oracle = Self::new();
        for i in 0..n {
            for j in (i + 1)..n {
                oracle.insert(ids[i], ids[j], (rows[i][j] + rows[j][i]) / 2.0);
            }
        }
        Some(oracle)
    }

    /// Inserts a symmetric entry. Negative values are clamped to zero.
    pub fn insert(&mut self, a: &str, b: &str, distance: f64) {
        let d = distance.max(0.0);
        self.table.insert((a.to_string(), b.to_string()), d);
        self.table.insert((b.to_string(), a.to_string()), d);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, a: &str, b: &str, distance: f64) -> Self {
        self.insert(a, b, distance);
        self
    }

    /// Number of stored (directed) entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl DistanceOracle for LookupOracle {
    fn distance(&self, a: &Location, b: &Location) -> f64 {
        if a.id() == b.id() {
            return 0.0;
        }
        self.table
            .get(&(a.id().to_string(), b.id().to_string()))
            .copied()
            .unwrap_or_else(|| GreatCircle.distance(a, b))
    }
}

//! Distance oracles and the dense distance matrix.
//!
//! The oracle defines the metric; the matrix caches it per request so the
//! algorithms work on location indices.

mod matrix;
mod oracle;

pub use matrix::DistanceMatrix;
pub use oracle::{haversine, DistanceOracle, GreatCircle, LookupOracle, EARTH_RADIUS_METERS};

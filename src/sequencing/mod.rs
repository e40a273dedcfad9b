//! Route sequencing.
//!
//! Orders an unordered set of stops for one truck and measures the closed
//! tour from its source.

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor_order, route_distance};

//! Road-network leg geometry.
//!
//! The engine itself ranks routes by the distance oracle. A
//! [`GeometryProvider`] is consulted afterwards, per leg, to attach a
//! drawable path and a driving duration to each truck. Failed lookups are
//! retried and then replaced by a straight line.

mod provider;

pub use provider::{resolve_legs, GeometryError, GeometryProvider, LegGeometry, StraightLine};

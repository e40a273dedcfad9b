use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::distance::haversine;
use crate::models::Coordinates;

/// Path, distance and duration of one leg between consecutive waypoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegGeometry {
    /// Polyline from the leg's start to its end, inclusive.
    pub coordinates: Vec<Coordinates>,
    /// Driving distance in meters reported by the provider.
    pub distance_meters: f64,
    /// Driving duration in seconds reported by the provider.
    pub duration_seconds: f64,
    /// `true` if this leg is a straight-line substitute for a failed lookup.
    pub fallback: bool,
}

impl LegGeometry {
    /// A straight segment at constant speed.
    pub fn straight(from: Coordinates, to: Coordinates, speed_mps: f64) -> Self {
        let distance = haversine(&from, &to);
        let duration = if speed_mps > 0.0 { distance / speed_mps } else { distance };
        Self {
            coordinates: vec![from, to],
            distance_meters: distance,
            duration_seconds: duration,
            fallback: false,
        }
    }
}

/// Why a leg lookup failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The provider could not be reached or answered with an error.
    #[error("geometry provider unavailable: {0}")]
    Unavailable(String),
    /// The provider found no drivable route between the two points.
    #[error("no route between waypoints")]
    NoRoute,
}

/// Source of driving geometry for a single leg.
///
/// Implementations may block (for example on an HTTP request); the engine
/// only calls them after both strategies have finished.
pub trait GeometryProvider: Send + Sync {
    /// Looks up the leg from `from` to `to`.
    fn leg(&self, from: &Coordinates, to: &Coordinates) -> Result<LegGeometry, GeometryError>;
}

/// Provider that always answers with a great-circle segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightLine {
    /// Constant travel speed in meters per second.
    pub speed_mps: f64,
}

impl GeometryProvider for StraightLine {
    fn leg(&self, from: &Coordinates, to: &Coordinates) -> Result<LegGeometry, GeometryError> {
        Ok(LegGeometry::straight(*from, *to, self.speed_mps))
    }
}

/// Resolves every leg along `waypoints`.
///
/// Each leg gets `1 + retries` attempts. A leg that still fails is replaced
/// by a straight segment at `fallback_speed_mps` and marked as a fallback.
///
/// # Examples
///
/// ```
/// use u_dispatch::geometry::{resolve_legs, StraightLine};
/// use u_dispatch::models::Coordinates;
///
/// let a = Coordinates::new(39.0, -85.0).unwrap();
/// let b = Coordinates::new(39.1, -85.0).unwrap();
/// let legs = resolve_legs(&StraightLine { speed_mps: 10.0 }, &[a, b, a], 1, 10.0);
/// assert_eq!(legs.len(), 2);
/// assert!(!legs[0].fallback);
/// ```
pub fn resolve_legs(
    provider: &dyn GeometryProvider,
    waypoints: &[Coordinates],
    retries: usize,
    fallback_speed_mps: f64,
) -> Vec<LegGeometry> {
    waypoints
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let mut last_err = GeometryError::NoRoute;
            for _ in 0..=retries {
                match provider.leg(from, to) {
                    Ok(leg) => return leg,
                    Err(e) => last_err = e,
                }
            }
            warn!(error = %last_err, ?from, ?to, "leg lookup failed, using straight line");
            LegGeometry {
                fallback: true,
                ..LegGeometry::straight(*from, *to, fallback_speed_mps)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails the first `failures` calls, then answers with a fixed leg.
    struct Flaky {
        failures: usize,
        calls: AtomicUsize,
    }

    impl GeometryProvider for Flaky {
        fn leg(&self, from: &Coordinates, to: &Coordinates) -> Result<LegGeometry, GeometryError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err(GeometryError::Unavailable("timeout".into()));
            }
            Ok(LegGeometry {
                coordinates: vec![*from, *to],
                distance_meters: 1000.0,
                duration_seconds: 60.0,
                fallback: false,
            })
        }
    }

    fn points() -> Vec<Coordinates> {
        vec![
            Coordinates::new(39.0, -85.0).expect("valid"),
            Coordinates::new(39.5, -85.0).expect("valid"),
        ]
    }

    #[test]
    fn test_straight_line() {
        let p = points();
        let leg = LegGeometry::straight(p[0], p[1], 10.0);
        assert!((leg.duration_seconds - leg.distance_meters / 10.0).abs() < 1e-9);
        assert_eq!(leg.coordinates.len(), 2);
    }

    #[test]
    fn test_retry_then_success() {
        let flaky = Flaky {
            failures: 1,
            calls: AtomicUsize::new(0),
        };
        let legs = resolve_legs(&flaky, &points(), 1, 10.0);
        assert_eq!(legs.len(), 1);
        assert!(!legs[0].fallback);
        assert_eq!(legs[0].duration_seconds, 60.0);
        assert_eq!(flaky.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_fallback_after_retries() {
        let flaky = Flaky {
            failures: usize::MAX,
            calls: AtomicUsize::new(0),
        };
        let p = points();
        let legs = resolve_legs(&flaky, &p, 2, 10.0);
        assert_eq!(flaky.calls.load(Ordering::SeqCst), 3);
        assert!(legs[0].fallback);
        assert!((legs[0].distance_meters - haversine(&p[0], &p[1])).abs() < 1e-6);
    }

    #[test]
    fn test_no_legs_for_single_point() {
        let p = points();
        assert!(resolve_legs(&StraightLine { speed_mps: 1.0 }, &p[..1], 0, 1.0).is_empty());
    }
}

//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions (i, j) in a route, compute the change in
//! distance from reversing the segment between them:
//!
//! ```text
//! delta = d(prev_i, r[j]) + d(r[i], next_j) - d(prev_i, r[i]) - d(r[j], next_j)
//! ```
//!
//! where `prev_i` and `next_j` are the source at the route ends. The first
//! pair with `delta < -1e-9` is reversed and the scan restarts (one move per
//! pass). Passes stop when a full scan finds no move or the pass ceiling is
//! reached.
//!
//! # Complexity
//!
//! O(n²) per pass, at most `factor · n² + 1` passes.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::cancel::CancelToken;
use crate::distance::DistanceMatrix;
use crate::error::OptimizeError;
use crate::sequencing::route_distance;

const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Result of a 2-opt run on one route.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoOptOutcome {
    /// Improved stop order (source excluded).
    pub order: Vec<usize>,
    /// Closed-tour distance of `order`.
    pub distance: f64,
    /// Passes performed, including the final one that found no move.
    pub passes: usize,
    /// `true` if the last pass found no improving move.
    pub converged: bool,
}

/// Maximum number of passes for a route of `n` stops.
pub fn pass_ceiling(n: usize, factor: usize) -> usize {
    factor.saturating_mul(n.saturating_mul(n)).saturating_add(1)
}

/// Applies 2-opt improvement to a single route (given as a sequence of stops).
///
/// The route is assumed to start and end at `source`. The distance never
/// increases.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::local_search::{pass_ceiling, two_opt_improve};
/// use u_dispatch::CancelToken;
///
/// // Points on a line: 0 (source), 1, 2, 3
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// // Suboptimal order: 2, 1, 3
/// let out = two_opt_improve(&[2, 1, 3], 0, &dm, pass_ceiling(3, 4), &CancelToken::new()).unwrap();
/// assert!(out.converged);
/// assert!((out.distance - 6.0).abs() < 1e-10); // optimal: 0→1→2→3→0 = 6
/// ```
pub fn two_opt_improve(
    route: &[usize],
    source: usize,
    distances: &DistanceMatrix,
    max_passes: usize,
    cancel: &CancelToken,
) -> Result<TwoOptOutcome, OptimizeError> {
    let mut current = route.to_vec();
    let n = current.len();
    let mut passes = 0;
    let mut converged = n < 2;

    while !converged && passes < max_passes {
        cancel.check()?;
        passes += 1;
        match first_improvement(&current, source, distances) {
            Some((i, j)) => current[i..=j].reverse(),
            None => converged = true,
        }
    }

    let distance = route_distance(&current, source, distances);
    Ok(TwoOptOutcome {
        order: current,
        distance,
        passes,
        converged,
    })
}

fn first_improvement(
    route: &[usize],
    source: usize,
    distances: &DistanceMatrix,
) -> Option<(usize, usize)> {
    let n = route.len();
    for i in 0..n - 1 {
        for j in i + 1..n {
            if two_opt_delta(route, source, distances, i, j) < -IMPROVEMENT_EPSILON {
                return Some((i, j));
            }
        }
    }
    None
}

/// Computes the distance change from reversing `route[i..=j]`.
///
/// Before: ...-prev_i - route[i] - ... - route[j] - next_j-...
/// After:  ...-prev_i - route[j] - ... - route[i] - next_j-...
fn two_opt_delta(
    route: &[usize],
    source: usize,
    distances: &DistanceMatrix,
    i: usize,
    j: usize,
) -> f64 {
    let n = route.len();
    let prev_i = if i == 0 { source } else { route[i - 1] };
    let next_j = if j == n - 1 { source } else { route[j + 1] };

    let old_cost = distances.get(prev_i, route[i]) + distances.get(route[j], next_j);
    let new_cost = distances.get(prev_i, route[j]) + distances.get(route[i], next_j);

    new_cost - old_cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::planar_matrix;

    fn line() -> DistanceMatrix {
        planar_matrix(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)])
    }

    fn run(route: &[usize], dm: &DistanceMatrix) -> TwoOptOutcome {
        two_opt_improve(route, 0, dm, pass_ceiling(route.len(), 4), &CancelToken::new())
            .expect("ok")
    }

    #[test]
    fn test_2opt_already_optimal() {
        let out = run(&[1, 2, 3], &line());
        assert_eq!(out.order, vec![1, 2, 3]);
        assert!((out.distance - 6.0).abs() < 1e-10);
        assert_eq!(out.passes, 1);
        assert!(out.converged);
    }

    #[test]
    fn test_2opt_reverses_crossing() {
        let dm = planar_matrix(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (1.0, -1.0)]);
        // 0→(1,1)→(1,-1)→(2,0)→0 crosses itself
        let before = route_distance(&[1, 3, 2], 0, &dm);
        let out = run(&[1, 3, 2], &dm);
        assert!(out.distance < before - 1e-9);
        assert!(out.converged);
    }

    #[test]
    fn test_2opt_empty_route() {
        let out = run(&[], &line());
        assert!(out.order.is_empty());
        assert_eq!(out.distance, 0.0);
        assert_eq!(out.passes, 0);
        assert!(out.converged);
    }

    #[test]
    fn test_2opt_single_stop() {
        let out = run(&[2], &line());
        assert_eq!(out.order, vec![2]);
        assert!((out.distance - 4.0).abs() < 1e-10); // 0→2→0 = 2+2
    }

    #[test]
    fn test_2opt_does_not_worsen() {
        let dm = planar_matrix(&[(5.0, 5.0), (0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
        let initial = [1, 4, 2, 3]; // deliberately bad order
        let out = run(&initial, &dm);
        assert!(out.distance <= route_distance(&initial, 0, &dm) + 1e-10);
        assert!(out.passes <= pass_ceiling(4, 4));
    }

    #[test]
    fn test_pass_ceiling_stops_early() {
        let dm = planar_matrix(&[(5.0, 5.0), (0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
        let out = two_opt_improve(&[1, 4, 2, 3], 0, &dm, 1, &CancelToken::new()).expect("ok");
        assert_eq!(out.passes, 1);
        assert!(!out.converged);
    }

    #[test]
    fn test_pass_ceiling_formula() {
        assert_eq!(pass_ceiling(0, 4), 1);
        assert_eq!(pass_ceiling(3, 4), 37);
        assert_eq!(pass_ceiling(usize::MAX, 4), usize::MAX);
    }

    #[test]
    fn test_2opt_cancelled() {
        let token = CancelToken::new();
        token.cancel();
        assert_eq!(
            two_opt_improve(&[1, 3, 2], 0, &line(), 10, &token),
            Err(OptimizeError::Cancelled)
        );
    }
}

//! Nearest-neighbor stop ordering.
//!
//! Starting from the source, always travel to the closest unvisited stop.
//! Ties go to the stop listed first.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.

use crate::distance::DistanceMatrix;

/// Orders `stops` by the nearest-neighbor rule starting at `source`.
///
/// The source itself is not part of the returned order.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::sequencing::nearest_neighbor_order;
///
/// // Source 0; stop 1 is far, stop 2 is near, stop 3 is next to 1.
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 10.0, 1.0, 11.0,
///     10.0, 0.0, 9.0, 1.0,
///     1.0, 9.0, 0.0, 10.0,
///     11.0, 1.0, 10.0, 0.0,
/// ]).unwrap();
/// assert_eq!(nearest_neighbor_order(0, &[1, 3, 2], &dm), vec![2, 1, 3]);
/// ```
pub fn nearest_neighbor_order(
    source: usize,
    stops: &[usize],
    distances: &DistanceMatrix,
) -> Vec<usize> {
    let mut unvisited = stops.to_vec();
    let mut order = Vec::with_capacity(stops.len());
    let mut current = source;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        if let Some(pos) = unvisited.iter().position(|&s| s == next) {
            unvisited.remove(pos);
        }
        order.push(next);
        current = next;
    }

    order
}

/// Computes the closed-tour distance `source → order[0] → … → order[n-1] → source`.
///
/// An empty order has distance zero.
pub fn route_distance(order: &[usize], source: usize, distances: &DistanceMatrix) -> f64 {
    let (Some(&first), Some(&last)) = (order.first(), order.last()) else {
        return 0.0;
    };
    let inner: f64 = order.windows(2).map(|w| distances.get(w[0], w[1])).sum();
    distances.get(source, first) + inner + distances.get(last, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::planar_matrix;

    fn line() -> DistanceMatrix {
        // source at x=0, stops at x=1,2,3
        planar_matrix(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)])
    }

    #[test]
    fn test_empty() {
        assert!(nearest_neighbor_order(0, &[], &line()).is_empty());
        assert_eq!(route_distance(&[], 0, &line()), 0.0);
    }

    #[test]
    fn test_single_stop() {
        let dm = line();
        assert_eq!(nearest_neighbor_order(0, &[3], &dm), vec![3]);
        assert!((route_distance(&[3], 0, &dm) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_line_order() {
        let dm = line();
        let order = nearest_neighbor_order(0, &[3, 1, 2], &dm);
        assert_eq!(order, vec![1, 2, 3]);
        assert!((route_distance(&order, 0, &dm) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_tie_first_listed() {
        // Two stops equidistant from the source on opposite sides.
        let dm = planar_matrix(&[(0.0, 0.0), (-1.0, 0.0), (1.0, 0.0)]);
        assert_eq!(nearest_neighbor_order(0, &[2, 1], &dm), vec![2, 1]);
        assert_eq!(nearest_neighbor_order(0, &[1, 2], &dm), vec![1, 2]);
    }

    #[test]
    fn test_includes_return_leg() {
        let dm = line();
        // 0→1 (1) + 1→2 (1) + 2→0 (2)
        assert!((route_distance(&[1, 2], 0, &dm) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_no_worse_than_worst_ordering() {
        let dm = planar_matrix(&[(0.0, 0.0), (5.0, 1.0), (1.0, 4.0), (6.0, 6.0)]);
        let nn = route_distance(&nearest_neighbor_order(0, &[1, 2, 3], &dm), 0, &dm);
        let orders = [[1, 2, 3], [1, 3, 2], [2, 1, 3], [2, 3, 1], [3, 1, 2], [3, 2, 1]];
        let worst = orders
            .iter()
            .map(|o| route_distance(o, 0, &dm))
            .fold(f64::MIN, f64::max);
        assert!(nn <= worst + 1e-10);
    }
}

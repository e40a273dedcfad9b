//! Dense distance matrix.

use super::DistanceOracle;
use crate::models::Location;

/// A dense n×n distance matrix stored in row-major order, indexed by
/// location index.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 10.0, 10.0,
///     10.0, 0.0, 5.0,
///     10.0, 5.0, 0.0,
/// ]).unwrap();
/// assert_eq!(dm.get(1, 2), 5.0);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a symmetric matrix over `locations` using `oracle`.
    ///
    /// Only the upper triangle is queried; the diagonal stays zero.
    pub fn from_locations(locations: &[Location], oracle: &dyn DistanceOracle) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = oracle.distance(&locations[i], &locations[j]).max(0.0);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::GreatCircle;
    use crate::models::{Coordinates, LocationKind};

    fn sample_locations() -> Vec<Location> {
        let at = |lat, lon| Coordinates::new(lat, lon).expect("valid");
        vec![
            Location::new("dc", LocationKind::Source, at(39.3601, -84.3101)),
            Location::new("cincy", LocationKind::Destination, at(39.1013, -84.5151)),
            Location::new("dayton", LocationKind::Destination, at(39.7589, -84.1916)),
        ]
    }

    #[test]
    fn test_from_locations() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), &GreatCircle);
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(1, 1), 0.0);
        assert!(dm.get(0, 1) > 0.0);
        assert!(dm.is_symmetric(1e-9));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_nearest_neighbor_ties_first_listed() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 7.0, 7.0, 7.0, 0.0, 1.0, 7.0, 1.0, 0.0])
            .expect("valid");
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(1, &[0, 2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }
}

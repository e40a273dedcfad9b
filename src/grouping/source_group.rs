//! Per-source partition of containers.

use crate::models::{Load, Problem, Temperature, Truck};

/// All containers bound for one destination from one source.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationDemand {
    destination: usize,
    containers: Vec<usize>,
    load: Load,
}

impl DestinationDemand {
    /// Destination location index.
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// Container indices, in input order.
    pub fn containers(&self) -> &[usize] {
        &self.containers
    }

    /// Ambient and refrigerated totals.
    pub fn load(&self) -> &Load {
        &self.load
    }

    /// Container indices of one temperature class, in input order.
    pub fn containers_of<'a>(
        &'a self,
        problem: &'a Problem,
        temperature: Temperature,
    ) -> impl Iterator<Item = usize> + 'a {
        self.containers
            .iter()
            .copied()
            .filter(move |&c| problem.container(c).temperature() == temperature)
    }

    /// Splits the demand into single-stop trucks that each fit capacity.
    ///
    /// Containers are placed first-fit in input order, so one truck suffices
    /// whenever the whole demand fits.
    pub fn split(&self, problem: &Problem, source: usize) -> Vec<Truck> {
        let capacity = problem.capacity();
        let mut trucks: Vec<Truck> = Vec::new();
        for &c in &self.containers {
            let container = problem.container(c);
            match trucks
                .iter_mut()
                .find(|t| capacity.can_add(t.load(), container))
            {
                Some(truck) => truck.assign(c, container),
                None => {
                    let mut truck = Truck::new(source);
                    truck.assign(c, container);
                    trucks.push(truck);
                }
            }
        }
        trucks
    }
}

/// Containers that originate at one source. Trucks never cross groups.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceGroup {
    source: usize,
    containers: Vec<usize>,
    demands: Vec<DestinationDemand>,
}

impl SourceGroup {
    /// Source location index.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Container indices, in input order.
    pub fn containers(&self) -> &[usize] {
        &self.containers
    }

    /// Per-destination demand, in order of first appearance.
    pub fn demands(&self) -> &[DestinationDemand] {
        &self.demands
    }

    /// Number of distinct destinations served from this source.
    pub fn num_destinations(&self) -> usize {
        self.demands.len()
    }

    /// Combined load of the whole group.
    pub fn total_load(&self) -> Load {
        self.demands
            .iter()
            .fold(Load::default(), |acc, d| acc + *d.load())
    }
}

/// Partitions the problem's containers by source.
///
/// Groups follow source declaration order; sources without containers are
/// skipped.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::grouping::group_by_source;
/// use u_dispatch::models::{Container, Coordinates, Location, LocationKind, Problem, Temperature, TruckCapacity};
///
/// let c = Coordinates::new(0.0, 0.0).unwrap();
/// let locations = vec![
///     Location::new("src-A", LocationKind::Source, c),
///     Location::new("src-B", LocationKind::Source, c),
///     Location::new("dst-X", LocationKind::Destination, c),
/// ];
/// let containers = vec![
///     Container::new("c0", 0, 2, 1, Temperature::Ambient),
///     Container::new("c1", 1, 2, 1, Temperature::Ambient),
///     Container::new("c2", 0, 2, 2, Temperature::Refrigerated),
/// ];
/// let cap = TruckCapacity::new(10, 6).unwrap();
/// let problem = Problem::with_distances(locations, containers, cap, DistanceMatrix::new(3)).unwrap();
///
/// let groups = group_by_source(&problem);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].containers(), &[0, 2]);
/// assert_eq!(groups[0].demands()[0].load().refrigerated(), 2);
/// ```
pub fn group_by_source(problem: &Problem) -> Vec<SourceGroup> {
    problem
        .sources()
        .filter_map(|source| {
            let mut containers = Vec::new();
            let mut demands: Vec<DestinationDemand> = Vec::new();
            for (idx, container) in problem.containers().iter().enumerate() {
                if container.source() != source {
                    continue;
                }
                containers.push(idx);
                let pos = match demands
                    .iter()
                    .position(|d| d.destination == container.destination())
                {
                    Some(pos) => pos,
                    None => {
                        demands.push(DestinationDemand {
                            destination: container.destination(),
                            containers: Vec::new(),
                            load: Load::default(),
                        });
                        demands.len() - 1
                    }
                };
                demands[pos].containers.push(idx);
                demands[pos]
                    .load
                    .add_units(container.temperature(), container.size());
            }
            if containers.is_empty() {
                None
            } else {
                Some(SourceGroup {
                    source,
                    containers,
                    demands,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::fixtures::{am, problem, re};

    #[test]
    fn test_sources_never_mixed() {
        // s0, s1, d0, d1
        let p = problem(
            2,
            DistanceMatrix::new(4),
            vec![am("c0", 0, 2, 1), am("c1", 1, 2, 1), re("c2", 1, 3, 1), am("c3", 0, 3, 1)],
            (10, 6),
        );
        let groups = group_by_source(&p);
        assert_eq!(groups.len(), 2);
        for g in &groups {
            for &c in g.containers() {
                assert_eq!(p.container(c).source(), g.source());
            }
        }
        assert_eq!(groups[1].containers(), &[1, 2]);
    }

    #[test]
    fn test_empty_source_skipped() {
        let p = problem(2, DistanceMatrix::new(3), vec![am("c0", 1, 2, 1)], (10, 6));
        let groups = group_by_source(&p);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].source(), 1);
    }

    #[test]
    fn test_demands_first_appearance_order() {
        // s0, d0(1), d1(2)
        let p = problem(
            1,
            DistanceMatrix::new(3),
            vec![am("c0", 0, 2, 1), re("c1", 0, 1, 2), am("c2", 0, 2, 3)],
            (10, 6),
        );
        let g = &group_by_source(&p)[0];
        assert_eq!(g.num_destinations(), 2);
        assert_eq!(g.demands()[0].destination(), 2);
        assert_eq!(g.demands()[0].containers(), &[0, 2]);
        assert_eq!(*g.demands()[0].load(), Load::new(4, 0));
        assert_eq!(*g.demands()[1].load(), Load::new(0, 2));
        assert_eq!(g.total_load(), Load::new(4, 2));
    }

    #[test]
    fn test_containers_of_temperature() {
        let p = problem(
            1,
            DistanceMatrix::new(2),
            vec![am("c0", 0, 1, 1), re("c1", 0, 1, 1), am("c2", 0, 1, 1)],
            (10, 6),
        );
        let g = &group_by_source(&p)[0];
        let ambient: Vec<_> = g.demands()[0].containers_of(&p, Temperature::Ambient).collect();
        assert_eq!(ambient, vec![0, 2]);
    }

    #[test]
    fn test_split_respects_capacity() {
        let p = problem(
            1,
            DistanceMatrix::new(2),
            vec![am("c0", 0, 1, 8), am("c1", 0, 1, 8), re("c2", 0, 1, 5), am("c3", 0, 1, 2)],
            (10, 6),
        );
        let g = &group_by_source(&p)[0];
        let chunks = g.demands()[0].split(&p, 0);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].containers(), &[0, 2, 3]);
        assert_eq!(chunks[1].containers(), &[1]);
        for t in &chunks {
            assert!(p.capacity().fits(t.load()));
            assert_eq!(t.stops(), &[1]);
        }
    }
}

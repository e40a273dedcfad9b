//! Invariant checks over a finished solution.

use crate::models::{Problem, Solution, Temperature, Violation, ViolationType};

/// Lists every invariant a solution breaks.
///
/// Checks that each container of the problem is carried exactly once, that
/// no compartment is overloaded, that a truck only carries containers of its
/// own source, and that it stops at every carried container's destination.
/// An empty result means the solution is valid.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::evaluation::check_solution;
/// use u_dispatch::models::{Container, Coordinates, Location, LocationKind, Problem, Solution, Temperature, Truck, TruckCapacity};
///
/// let c = Coordinates::new(0.0, 0.0).unwrap();
/// let locations = vec![
///     Location::new("src", LocationKind::Source, c),
///     Location::new("dst", LocationKind::Destination, c),
/// ];
/// let containers = vec![Container::new("c0", 0, 1, 1, Temperature::Ambient)];
/// let cap = TruckCapacity::new(10, 6).unwrap();
/// let problem = Problem::with_distances(locations, containers, cap, DistanceMatrix::new(2)).unwrap();
///
/// assert_eq!(check_solution(&problem, &Solution::new()).len(), 1);
///
/// let mut truck = Truck::new(0);
/// truck.assign(0, problem.container(0));
/// assert!(check_solution(&problem, &Solution::from_trucks(vec![truck])).is_empty());
/// ```
pub fn check_solution(problem: &Problem, solution: &Solution) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen = vec![0usize; problem.num_containers()];

    for (truck_index, truck) in solution.trucks().iter().enumerate() {
        for temperature in [Temperature::Ambient, Temperature::Refrigerated] {
            let load = truck.load().get(temperature);
            let capacity = problem.capacity().get(temperature);
            if load > u64::from(capacity) {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    truck_index,
                    temperature,
                    load,
                    capacity,
                }));
            }
        }

        for &idx in truck.containers() {
            let container = problem.container(idx);
            seen[idx] += 1;
            if container.source() != truck.source() {
                violations.push(Violation::new(ViolationType::MixedSource {
                    truck_index,
                    container_id: container.id().to_string(),
                }));
            }
            if !truck.visits(container.destination()) {
                violations.push(Violation::new(ViolationType::StopMissing {
                    truck_index,
                    container_id: container.id().to_string(),
                }));
            }
        }
    }

    for (idx, &count) in seen.iter().enumerate() {
        let container_id = problem.container(idx).id().to_string();
        match count {
            0 => violations.push(Violation::new(ViolationType::ContainerMissing {
                container_id,
            })),
            1 => {}
            _ => violations.push(Violation::new(ViolationType::ContainerDuplicated {
                container_id,
            })),
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::fixtures::{am, problem, re};
    use crate::models::Truck;

    fn two_source_problem() -> Problem {
        // s0, s1, d0(2), d1(3)
        problem(
            2,
            DistanceMatrix::new(4),
            vec![am("a", 0, 2, 6), am("b", 0, 3, 6), re("c", 1, 2, 1)],
            (10, 6),
        )
    }

    #[test]
    fn test_valid() {
        let p = two_source_problem();
        let mut t0 = Truck::new(0);
        t0.assign(0, p.container(0));
        let mut t1 = Truck::new(0);
        t1.assign(1, p.container(1));
        let mut t2 = Truck::new(1);
        t2.assign(2, p.container(2));
        let sol = Solution::from_trucks(vec![t0, t1, t2]);
        assert!(check_solution(&p, &sol).is_empty());
    }

    #[test]
    fn test_capacity_and_missing() {
        let p = two_source_problem();
        let mut t0 = Truck::new(0);
        t0.assign(0, p.container(0));
        t0.assign(1, p.container(1));
        let v = check_solution(&p, &Solution::from_trucks(vec![t0]));
        assert_eq!(v.len(), 2);
        assert!(matches!(
            v[0].kind,
            ViolationType::CapacityExceeded {
                truck_index: 0,
                temperature: Temperature::Ambient,
                load: 12,
                capacity: 10
            }
        ));
        assert_eq!(
            v[1].kind,
            ViolationType::ContainerMissing {
                container_id: "c".into()
            }
        );
    }

    #[test]
    fn test_mixed_source_and_duplicate() {
        let p = two_source_problem();
        let mut t0 = Truck::new(0);
        t0.assign(0, p.container(0));
        t0.assign(2, p.container(2));
        let mut t1 = Truck::new(0);
        t1.assign(1, p.container(1));
        t1.assign(0, p.container(0));
        let v = check_solution(&p, &Solution::from_trucks(vec![t0, t1]));
        assert!(v.iter().any(|x| matches!(
            &x.kind,
            ViolationType::MixedSource { truck_index: 0, container_id } if container_id == "c"
        )));
        assert!(v.iter().any(|x| matches!(
            &x.kind,
            ViolationType::ContainerDuplicated { container_id } if container_id == "a"
        )));
    }

    #[test]
    fn test_stop_missing() {
        let p = two_source_problem();
        let mut t0 = Truck::new(0);
        t0.assign(0, p.container(0));
        t0.set_stops(vec![3]);
        let mut t1 = Truck::new(0);
        t1.assign(1, p.container(1));
        let mut t2 = Truck::new(1);
        t2.assign(2, p.container(2));
        let v = check_solution(&p, &Solution::from_trucks(vec![t0, t1, t2]));
        assert_eq!(v.len(), 1);
        assert!(matches!(v[0].kind, ViolationType::StopMissing { truck_index: 0, .. }));
    }
}

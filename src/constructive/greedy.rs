//! Greedy container batching.
//!
//! # Algorithm
//!
//! Containers of one source are placed one at a time, in input order. For
//! each container the rule list is consulted in priority order:
//!
//! 1. an open truck already stopping at the destination, with room;
//! 2. the open truck with room whose nearest stop is closest;
//! 3. a new truck.
//!
//! Stops are recorded in order of first assignment; visiting order is
//! decided afterwards by the route sequencer.
//!
//! # Complexity
//!
//! O(c · t · s) for c containers, t open trucks and s stops per truck.

use tracing::trace;

use super::rules::{AssignmentRule, Placement, RuleContext};
use crate::cancel::CancelToken;
use crate::error::OptimizeError;
use crate::grouping::SourceGroup;
use crate::models::{Problem, Truck};

/// Assigns every container of `group` to a truck using `rules`.
///
/// If no rule produces a placement the container opens a new truck. A
/// placement on a truck without room is also turned into a new truck, so
/// custom rules cannot break the capacity invariant.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::{default_rules, greedy_batch};
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::grouping::group_by_source;
/// use u_dispatch::models::{Container, Coordinates, Location, LocationKind, Problem, Temperature, TruckCapacity};
/// use u_dispatch::CancelToken;
///
/// let c = Coordinates::new(0.0, 0.0).unwrap();
/// let locations = vec![
///     Location::new("src", LocationKind::Source, c),
///     Location::new("dst", LocationKind::Destination, c),
/// ];
/// let containers = vec![
///     Container::new("c0", 0, 1, 8, Temperature::Ambient),
///     Container::new("c1", 0, 1, 8, Temperature::Ambient),
/// ];
/// let cap = TruckCapacity::new(10, 6).unwrap();
/// let problem = Problem::with_distances(locations, containers, cap, DistanceMatrix::new(2)).unwrap();
///
/// let group = &group_by_source(&problem)[0];
/// let trucks = greedy_batch(&problem, group, &default_rules(), &CancelToken::new()).unwrap();
/// assert_eq!(trucks.len(), 2);
/// ```
pub fn greedy_batch(
    problem: &Problem,
    group: &SourceGroup,
    rules: &[Box<dyn AssignmentRule>],
    cancel: &CancelToken,
) -> Result<Vec<Truck>, OptimizeError> {
    let mut trucks: Vec<Truck> = Vec::new();

    for &idx in group.containers() {
        cancel.check()?;
        let container = problem.container(idx);

        let placement = {
            let ctx = RuleContext {
                trucks: &trucks,
                capacity: problem.capacity(),
                distances: problem.distances(),
            };
            rules
                .iter()
                .find_map(|rule| {
                    rule.select(&ctx, container).inspect(|p| {
                        trace!(rule = rule.name(), container = container.id(), ?p, "placed");
                    })
                })
                .unwrap_or(Placement::Open)
        };

        match placement {
            Placement::Existing(i)
                if trucks
                    .get(i)
                    .is_some_and(|t| problem.capacity().can_add(t.load(), container)) =>
            {
                trucks[i].assign(idx, container);
            }
            _ => {
                let mut truck = Truck::new(group.source());
                truck.assign(idx, container);
                trucks.push(truck);
            }
        }
    }

    Ok(trucks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::default_rules;
    use crate::distance::DistanceMatrix;
    use crate::fixtures::{am, planar_matrix, problem, re};
    use crate::grouping::group_by_source;

    fn batch(p: &Problem) -> Vec<Truck> {
        group_by_source(p)
            .iter()
            .flat_map(|g| greedy_batch(p, g, &default_rules(), &CancelToken::new()).expect("ok"))
            .collect()
    }

    #[test]
    fn test_single_destination_collapses() {
        let p = problem(
            1,
            DistanceMatrix::new(2),
            vec![am("c0", 0, 1, 2), am("c1", 0, 1, 3), re("c2", 0, 1, 2)],
            (10, 6),
        );
        let trucks = batch(&p);
        assert_eq!(trucks.len(), 1);
        assert_eq!(trucks[0].containers(), &[0, 1, 2]);
    }

    #[test]
    fn test_ambient_overflow_opens_truck() {
        let p = problem(
            1,
            DistanceMatrix::new(2),
            vec![am("c0", 0, 1, 8), am("c1", 0, 1, 8)],
            (10, 6),
        );
        assert_eq!(batch(&p).len(), 2);
    }

    #[test]
    fn test_near_limit_sizes_open_second_truck() {
        let p = problem(
            1,
            DistanceMatrix::new(2),
            vec![am("c0", 0, 1, 3_000_000_000), am("c1", 0, 1, 3_000_000_000)],
            (4_000_000_000, 1),
        );
        let trucks = batch(&p);
        assert_eq!(trucks.len(), 2);
        assert!(trucks.iter().all(|t| p.capacity().fits(t.load())));
    }

    #[test]
    fn test_compartments_independent() {
        let p = problem(
            1,
            DistanceMatrix::new(2),
            vec![am("c0", 0, 1, 5), re("c1", 0, 1, 5)],
            (10, 6),
        );
        assert_eq!(batch(&p).len(), 1);
    }

    #[test]
    fn test_two_sources_never_mixed() {
        let p = problem(
            2,
            DistanceMatrix::new(3),
            vec![am("c0", 0, 2, 1), am("c1", 1, 2, 1)],
            (10, 6),
        );
        let trucks = batch(&p);
        assert_eq!(trucks.len(), 2);
        assert_eq!(trucks[0].source(), 0);
        assert_eq!(trucks[1].source(), 1);
    }

    #[test]
    fn test_nearest_truck_gets_container() {
        // source at 0; d0 at x=1, d1 at x=20, d2 at x=19.
        let dm = planar_matrix(&[(0.0, 0.0), (1.0, 0.0), (20.0, 0.0), (19.0, 0.0)]);
        let p = problem(
            1,
            dm,
            vec![am("c0", 0, 1, 4), am("c1", 0, 2, 4), am("c2", 0, 3, 2)],
            (8, 6),
        );
        // c0 opens T1, c1 joins T1 (nearest with room), c2 must open T2 since T1 is full.
        let trucks = batch(&p);
        assert_eq!(trucks.len(), 2);
        assert_eq!(trucks[0].containers(), &[0, 1]);
        assert_eq!(trucks[1].containers(), &[2]);
    }

    #[test]
    fn test_cancelled() {
        let p = problem(1, DistanceMatrix::new(2), vec![am("c0", 0, 1, 1)], (10, 6));
        let token = CancelToken::new();
        token.cancel();
        let g = &group_by_source(&p)[0];
        assert_eq!(
            greedy_batch(&p, g, &default_rules(), &token),
            Err(OptimizeError::Cancelled)
        );
    }

    struct AlwaysFirst;

    impl AssignmentRule for AlwaysFirst {
        fn name(&self) -> &'static str {
            "always-first"
        }

        fn select(&self, ctx: &RuleContext<'_>, _: &crate::models::Container) -> Option<Placement> {
            (!ctx.trucks.is_empty()).then_some(Placement::Existing(0))
        }
    }

    #[test]
    fn test_custom_rule_cannot_overload() {
        let p = problem(
            1,
            DistanceMatrix::new(2),
            vec![am("c0", 0, 1, 6), am("c1", 0, 1, 6)],
            (10, 6),
        );
        let g = &group_by_source(&p)[0];
        let rules: Vec<Box<dyn AssignmentRule>> = vec![Box::new(AlwaysFirst)];
        let trucks = greedy_batch(&p, g, &rules, &CancelToken::new()).expect("ok");
        assert_eq!(trucks.len(), 2);
    }
}

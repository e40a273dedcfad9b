//! Clarke-Wright savings algorithm.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each destination
//! on its own round trip (source → destination → source). It then merges
//! routes by computing the "savings" of joining the end of one route to the
//! start of another:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! Routes are merged in decreasing order of savings, subject to both
//! compartment capacities.
//!
//! A destination whose own demand exceeds one truck is split first-fit into
//! several single-stop chunks. Two chunks of the same destination never fit
//! together, so savings are only generated between distinct destinations.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of chunks (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use tracing::debug;

use crate::cancel::CancelToken;
use crate::error::OptimizeError;
use crate::grouping::SourceGroup;
use crate::models::{Load, Problem, Truck};

/// A savings value for merging two chunks' routes.
#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: f64,
}

/// Builds the trucks of one source with the Clarke-Wright savings algorithm.
///
/// Stops of each returned truck are in merge order; sequencing and 2-opt
/// run afterwards.
///
/// # Examples
///
/// ```
/// use u_dispatch::constructive::clarke_wright_savings;
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::grouping::group_by_source;
/// use u_dispatch::models::{Container, Coordinates, Location, LocationKind, Problem, Temperature, TruckCapacity};
/// use u_dispatch::CancelToken;
///
/// let c = Coordinates::new(0.0, 0.0).unwrap();
/// let locations = vec![
///     Location::new("src", LocationKind::Source, c),
///     Location::new("A", LocationKind::Destination, c),
///     Location::new("B", LocationKind::Destination, c),
/// ];
/// let containers = vec![
///     Container::new("c0", 0, 1, 1, Temperature::Ambient),
///     Container::new("c1", 0, 2, 1, Temperature::Ambient),
/// ];
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 10.0, 10.0,
///     10.0, 0.0, 5.0,
///     10.0, 5.0, 0.0,
/// ]).unwrap();
/// let cap = TruckCapacity::new(10, 6).unwrap();
/// let problem = Problem::with_distances(locations, containers, cap, dm).unwrap();
///
/// let group = &group_by_source(&problem)[0];
/// let trucks = clarke_wright_savings(&problem, group, &CancelToken::new()).unwrap();
/// assert_eq!(trucks.len(), 1);
/// assert_eq!(trucks[0].stops(), &[1, 2]);
/// ```
pub fn clarke_wright_savings(
    problem: &Problem,
    group: &SourceGroup,
    cancel: &CancelToken,
) -> Result<Vec<Truck>, OptimizeError> {
    cancel.check()?;
    let source = group.source();
    let distances = problem.distances();
    let capacity = problem.capacity();

    // Initial round trips, one per chunk.
    let mut chunks: Vec<Option<Truck>> = group
        .demands()
        .iter()
        .flat_map(|d| d.split(problem, source))
        .map(Some)
        .collect();
    let n = chunks.len();
    let stop_of: Vec<usize> = chunks
        .iter()
        .flatten()
        .map(|t| t.stops()[0])
        .collect();

    // Compute savings
    let mut savings = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (stop_of[i], stop_of[j]);
            if a == b {
                continue;
            }
            let s = distances.get(source, a) + distances.get(source, b) - distances.get(a, b);
            if s > 0.0 {
                savings.push(Saving { i, j, value: s });
            }
        }
    }

    // Sort by decreasing savings; stable, so ties keep generation order.
    savings.sort_by(|a, b| b.value.total_cmp(&a.value));

    // route_of[chunk] = route index, route_members[r] = chunks in visiting order
    let mut route_of: Vec<usize> = (0..n).collect();
    let mut route_load: Vec<Load> = chunks
        .iter()
        .flatten()
        .map(|t| *t.load())
        .collect();
    let mut route_members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
    let mut merges = 0usize;

    for saving in &savings {
        cancel.check()?;

        let ri = route_of[saving.i];
        let rj = route_of[saving.j];

        // Skip if same route
        if ri == rj {
            continue;
        }

        // Check capacity
        let combined_load = route_load[ri] + route_load[rj];
        if !capacity.fits(&combined_load) {
            continue;
        }

        // Check that i is at the end of its route and j is at the start (or vice versa)
        let i_at_end = route_members[ri].last() == Some(&saving.i);
        let j_at_start = route_members[rj].first() == Some(&saving.j);
        let i_at_start = route_members[ri].first() == Some(&saving.i);
        let j_at_end = route_members[rj].last() == Some(&saving.j);

        let (merge_from, merge_into, reverse_from, reverse_into) = if i_at_end && j_at_start {
            (rj, ri, false, false)
        } else if j_at_end && i_at_start {
            (ri, rj, false, false)
        } else if i_at_end && j_at_end {
            (rj, ri, true, false)
        } else if i_at_start && j_at_start {
            (rj, ri, false, true)
        } else {
            continue;
        };

        // Merge: append members of merge_from into merge_into
        let mut from_members = std::mem::take(&mut route_members[merge_from]);
        if reverse_from {
            from_members.reverse();
        }

        if reverse_into {
            route_members[merge_into].reverse();
        }

        route_members[merge_into].append(&mut from_members);
        route_load[merge_into] = combined_load;
        route_load[merge_from] = Load::default();

        // Update route assignments
        for &cid in &route_members[merge_into] {
            route_of[cid] = merge_into;
        }
        merges += 1;
    }

    // Build trucks from merged routes
    let mut trucks = Vec::new();
    for members in &route_members {
        let mut route: Option<Truck> = None;
        for &cid in members {
            let Some(chunk) = chunks[cid].take() else {
                continue;
            };
            match route.as_mut() {
                Some(truck) => truck.absorb(chunk),
                None => route = Some(chunk),
            }
        }
        trucks.extend(route);
    }

    debug!(
        source = problem.location(source).id(),
        chunks = n,
        savings = savings.len(),
        merges,
        trucks = trucks.len(),
        "savings construction done"
    );
    Ok(trucks)
}

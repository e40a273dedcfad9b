//! Assignment strategies.
//!
//! A strategy plans one source at a time; [`run_strategy`] fans the source
//! groups out (on rayon when enabled) and concatenates the trucks in source
//! declaration order.
//!
//! - [`BasicStrategy`] — greedy rule list, nearest-neighbor order
//! - [`OptimizedStrategy`] — Clarke-Wright savings, then 2-opt, with a
//!   per-source regression guard

mod basic;
mod optimized;

pub use basic::BasicStrategy;
pub use optimized::OptimizedStrategy;

use tracing::{debug, instrument};

use crate::cancel::CancelToken;
use crate::error::OptimizeError;
use crate::grouping::{group_by_source, SourceGroup};
use crate::local_search::{pass_ceiling, two_opt_improve};
use crate::models::{Problem, Truck};
use crate::parallel::{parallel_collect, parallel_into_collect};
use crate::sequencing::{nearest_neighbor_order, route_distance};

/// Plans the trucks of one source.
pub trait Strategy: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Builds sequenced trucks for every container of `group`.
    fn plan_source(
        &self,
        problem: &Problem,
        group: &SourceGroup,
        cancel: &CancelToken,
    ) -> Result<Vec<Truck>, OptimizeError>;
}

/// Runs `strategy` over every source group of `problem`.
///
/// Trucks are returned grouped by source, sources in declaration order.
#[instrument(level = "debug", skip_all, fields(strategy = strategy.name()))]
pub fn run_strategy(
    strategy: &dyn Strategy,
    problem: &Problem,
    parallel: bool,
    cancel: &CancelToken,
) -> Result<Vec<Truck>, OptimizeError> {
    let groups = group_by_source(problem);
    let planned = parallel_collect(&groups, parallel, |group| {
        strategy.plan_source(problem, group, cancel)
    });

    let mut trucks = Vec::new();
    for plan in planned {
        trucks.extend(plan?);
    }
    debug!(sources = groups.len(), trucks = trucks.len(), "strategy done");
    Ok(trucks)
}

/// Reorders every truck's stops by nearest neighbor from its source.
pub(crate) fn sequence(problem: &Problem, trucks: &mut [Truck]) {
    for truck in trucks {
        let order = nearest_neighbor_order(truck.source(), truck.stops(), problem.distances());
        truck.set_stops(order);
    }
}

/// Nearest-neighbor then 2-opt on every truck independently.
pub(crate) fn refine(
    problem: &Problem,
    trucks: Vec<Truck>,
    pass_factor: usize,
    parallel: bool,
    cancel: &CancelToken,
) -> Result<Vec<Truck>, OptimizeError> {
    parallel_into_collect(trucks, parallel, |mut truck| -> Result<Truck, OptimizeError> {
        let start = nearest_neighbor_order(truck.source(), truck.stops(), problem.distances());
        let ceiling = pass_ceiling(start.len(), pass_factor);
        let outcome =
            two_opt_improve(&start, truck.source(), problem.distances(), ceiling, cancel)?;
        truck.set_stops(outcome.order);
        Ok(truck)
    })
    .into_iter()
    .collect()
}

/// Sum of closed-tour distances under the problem's matrix.
pub(crate) fn plan_distance(problem: &Problem, trucks: &[Truck]) -> f64 {
    trucks
        .iter()
        .map(|t| route_distance(t.stops(), t.source(), problem.distances()))
        .sum()
}

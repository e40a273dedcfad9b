//! Priority-ordered truck selection rules for greedy batching.

use crate::distance::DistanceMatrix;
use crate::models::{Container, Truck, TruckCapacity};

/// Where a container should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Add to the open truck at this index.
    Existing(usize),
    /// Open a new truck.
    Open,
}

/// What a rule can see while placing one container.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Trucks opened so far for the current source, oldest first.
    pub trucks: &'a [Truck],
    /// Fleet capacity.
    pub capacity: &'a TruckCapacity,
    /// Distance matrix.
    pub distances: &'a DistanceMatrix,
}

impl RuleContext<'_> {
    /// Indices of open trucks that can take `container`, oldest first.
    pub fn fitting(&self, container: &Container) -> Vec<usize> {
        self.trucks
            .iter()
            .enumerate()
            .filter(|(_, t)| self.capacity.can_add(t.load(), container))
            .map(|(i, _)| i)
            .collect()
    }
}

/// One step of the greedy decision list.
///
/// Rules are evaluated in order; the first that returns a placement wins.
pub trait AssignmentRule: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Proposes a placement, or `None` to defer to the next rule.
    fn select(&self, ctx: &RuleContext<'_>, container: &Container) -> Option<Placement>;
}

/// Joins the oldest truck already stopping at the container's destination
/// that still has room in the matching compartment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedDestination;

impl AssignmentRule for SharedDestination {
    fn name(&self) -> &'static str {
        "shared-destination"
    }

    fn select(&self, ctx: &RuleContext<'_>, container: &Container) -> Option<Placement> {
        ctx.fitting(container)
            .into_iter()
            .find(|&i| ctx.trucks[i].visits(container.destination()))
            .map(Placement::Existing)
    }
}

/// Joins the truck with room whose nearest stop is closest to the
/// container's destination. Ties go to the oldest truck.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestStop;

impl NearestStop {
    fn proximity(truck: &Truck, destination: usize, distances: &DistanceMatrix) -> f64 {
        truck
            .stops()
            .iter()
            .map(|&s| distances.get(s, destination))
            .min_by(|a, b| a.total_cmp(b))
            .unwrap_or_else(|| distances.get(truck.source(), destination))
    }
}

impl AssignmentRule for NearestStop {
    fn name(&self) -> &'static str {
        "nearest-stop"
    }

    fn select(&self, ctx: &RuleContext<'_>, container: &Container) -> Option<Placement> {
        let mut best: Option<(usize, f64)> = None;
        for i in ctx.fitting(container) {
            let d = Self::proximity(&ctx.trucks[i], container.destination(), ctx.distances);
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| Placement::Existing(i))
    }
}

/// Always opens a new truck. Terminates the default rule list.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenTruck;

impl AssignmentRule for OpenTruck {
    fn name(&self) -> &'static str {
        "open-truck"
    }

    fn select(&self, _ctx: &RuleContext<'_>, _container: &Container) -> Option<Placement> {
        Some(Placement::Open)
    }
}

/// The basic strategy's rule list: shared destination, nearest stop, new truck.
pub fn default_rules() -> Vec<Box<dyn AssignmentRule>> {
    vec![
        Box::new(SharedDestination),
        Box::new(NearestStop),
        Box::new(OpenTruck),
    ]
}

//! Wire-format response types.

use serde::Serialize;

use crate::geometry::LegGeometry;
use crate::models::{InfeasibleContainer, OptimizationResult, Problem, Solution, Truck};

/// Both plans for a request, plus containers no truck can carry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResponse {
    /// Greedy rule-list plan.
    pub basic: SolutionOutput,
    /// Savings plus 2-opt plan.
    pub optimized: SolutionOutput,
    /// Containers excluded from both plans.
    pub infeasible: Vec<InfeasibleContainer>,
}

impl OptimizationResponse {
    /// Converts an engine result, resolving indices back to request IDs.
    pub fn from_result(problem: &Problem, result: &OptimizationResult) -> Self {
        Self {
            basic: SolutionOutput::from_solution(problem, &result.basic),
            optimized: SolutionOutput::from_solution(problem, &result.optimized),
            infeasible: result.infeasible.clone(),
        }
    }
}

/// One plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionOutput {
    /// Trucks, IDs `T1`, `T2`, … in order.
    pub trucks: Vec<TruckOutput>,
    /// Sum of truck distances.
    pub total_distance_meters: f64,
    /// Sum of truck durations.
    pub total_duration_seconds: f64,
}

impl SolutionOutput {
    /// Converts a solution, numbering trucks from `T1`.
    pub fn from_solution(problem: &Problem, solution: &Solution) -> Self {
        Self {
            trucks: solution
                .trucks()
                .iter()
                .enumerate()
                .map(|(i, t)| TruckOutput::from_truck(problem, i, t))
                .collect(),
            total_distance_meters: solution.total_distance(),
            total_duration_seconds: solution.total_duration(),
        }
    }
}

/// One truck of a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TruckOutput {
    /// `T<n>`, 1-based position in the plan.
    pub id: String,
    /// Source location ID.
    pub source_id: String,
    /// Destination IDs in visiting order.
    pub destination_ids: Vec<String>,
    /// Carried container IDs.
    pub container_ids: Vec<String>,
    /// Closed-tour distance.
    pub route_distance_meters: f64,
    /// Route duration.
    pub route_duration_seconds: f64,
    /// Per-leg geometry; omitted when no geometry provider was used.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<LegGeometry>,
}

impl TruckOutput {
    fn from_truck(problem: &Problem, position: usize, truck: &Truck) -> Self {
        Self {
            id: format!("T{}", position + 1),
            source_id: problem.location(truck.source()).id().to_string(),
            destination_ids: truck
                .stops()
                .iter()
                .map(|&s| problem.location(s).id().to_string())
                .collect(),
            container_ids: truck
                .containers()
                .iter()
                .map(|&c| problem.container(c).id().to_string())
                .collect(),
            route_distance_meters: truck.total_distance(),
            route_duration_seconds: truck.total_duration(),
            legs: truck.legs().to_vec(),
        }
    }
}

//! The optimization entry point.

use tracing::{error, info, instrument, warn};

use crate::api::{validate, OptimizationRequest, OptimizationResponse, Validated};
use crate::cancel::CancelToken;
use crate::config::EngineConfig;
use crate::distance::{DistanceOracle, GreatCircle};
use crate::error::OptimizeError;
use crate::evaluation::{check_solution, SolutionAssembler};
use crate::geometry::GeometryProvider;
use crate::models::{OptimizationResult, Problem, Solution};
use crate::parallel::join;
use crate::strategy::{run_strategy, BasicStrategy, OptimizedStrategy};

/// Solves dispatch requests with both strategies.
///
/// The engine holds no per-request state; one instance can serve many
/// requests, from many threads.
///
/// # Examples
///
/// ```
/// use u_dispatch::api::OptimizationRequest;
/// use u_dispatch::{Engine, EngineConfig};
///
/// let request: OptimizationRequest = serde_json::from_str(r#"{
///     "sources": [{ "id": "dc", "lat": 39.36, "lon": -84.31 }],
///     "destinations": [
///         { "id": "a", "lat": 39.10, "lon": -84.51 },
///         { "id": "b", "lat": 39.76, "lon": -84.19 }
///     ],
///     "containers": [
///         { "container_id": "C1", "source_id": "dc", "destination_id": "a", "size": 3, "temperature": "AM" },
///         { "container_id": "C2", "source_id": "dc", "destination_id": "b", "size": 2, "temperature": "RE" }
///     ],
///     "truck_size": { "AM": 10, "RE": 5 }
/// }"#).unwrap();
///
/// let response = Engine::new(EngineConfig::default()).optimize(&request).unwrap();
/// assert!(response.optimized.total_distance_meters <= response.basic.total_distance_meters + 1e-6);
/// assert_eq!(response.optimized.trucks[0].id, "T1");
/// ```
pub struct Engine {
    config: EngineConfig,
    oracle: Box<dyn DistanceOracle>,
    geometry: Option<Box<dyn GeometryProvider>>,
}

impl Engine {
    /// Creates an engine using great-circle distances and no geometry provider.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            oracle: Box::new(GreatCircle),
            geometry: None,
        }
    }

    /// Replaces the distance oracle.
    pub fn with_oracle(mut self, oracle: impl DistanceOracle + 'static) -> Self {
        self.oracle = Box::new(oracle);
        self
    }

    /// Attaches a geometry provider for leg paths and durations.
    pub fn with_geometry(mut self, provider: impl GeometryProvider + 'static) -> Self {
        self.geometry = Some(Box::new(provider));
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validates and solves a request.
    pub fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResponse, OptimizeError> {
        self.optimize_with_cancel(request, &CancelToken::new())
    }

    /// Like [`optimize`](Self::optimize), abandoning work once `cancel` is set.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            sources = request.sources.len(),
            destinations = request.destinations.len(),
            containers = request.containers.len()
        )
    )]
    pub fn optimize_with_cancel(
        &self,
        request: &OptimizationRequest,
        cancel: &CancelToken,
    ) -> Result<OptimizationResponse, OptimizeError> {
        let Validated {
            problem,
            infeasible,
        } = validate(request, self.oracle.as_ref())?;
        if !infeasible.is_empty() {
            warn!(count = infeasible.len(), "infeasible containers excluded");
        }

        let mut result = self.solve(&problem, cancel)?;
        result.infeasible = infeasible;
        Ok(OptimizationResponse::from_result(&problem, &result))
    }

    /// Runs both strategies on an already validated problem.
    ///
    /// The returned result has an empty infeasible list; containers in
    /// `problem` are assumed to fit their compartment.
    #[instrument(level = "debug", skip_all, fields(containers = problem.num_containers()))]
    pub fn solve(
        &self,
        problem: &Problem,
        cancel: &CancelToken,
    ) -> Result<OptimizationResult, OptimizeError> {
        let parallel = self.config.parallel;
        let basic = BasicStrategy::new();
        let optimized = OptimizedStrategy::new(&self.config);

        let (basic_trucks, optimized_trucks) = join(
            parallel,
            || run_strategy(&basic, problem, parallel, cancel),
            || run_strategy(&optimized, problem, parallel, cancel),
        );
        let (basic_trucks, optimized_trucks) = (basic_trucks?, optimized_trucks?);
        cancel.check()?;

        let assembler = SolutionAssembler::new(problem, &self.config)
            .with_geometry(self.geometry.as_deref());
        let basic = assembler.assemble(basic_trucks);
        let optimized = assembler.assemble(optimized_trucks);

        audit("basic", problem, &basic);
        audit("optimized", problem, &optimized);
        info!(
            basic_trucks = basic.num_trucks(),
            basic_distance = basic.total_distance(),
            optimized_trucks = optimized.num_trucks(),
            optimized_distance = optimized.total_distance(),
            "optimization done"
        );

        Ok(OptimizationResult {
            basic,
            optimized,
            infeasible: Vec::new(),
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn audit(strategy: &str, problem: &Problem, solution: &Solution) {
    for violation in check_solution(problem, solution) {
        error!(strategy, ?violation, "solution violates an invariant");
    }
}

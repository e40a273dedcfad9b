use tracing::debug;

use crate::cancel::CancelToken;
use crate::config::EngineConfig;
use crate::constructive::{clarke_wright_savings, default_rules, greedy_batch, AssignmentRule};
use crate::error::OptimizeError;
use crate::grouping::SourceGroup;
use crate::models::{Problem, Truck};

use super::{plan_distance, refine, Strategy};

/// Clarke-Wright savings construction refined by 2-opt.
///
/// With the regression guard enabled, each source's plan is compared with
/// the greedy rule-list plan after the same 2-opt refinement, and the
/// shorter one is kept. Only an exact tie keeps the savings plan. Since
/// 2-opt never lengthens a route, the result is never longer than the basic
/// plan.
pub struct OptimizedStrategy {
    pass_factor: usize,
    parallel: bool,
    regression_guard: bool,
    guard_rules: Vec<Box<dyn AssignmentRule>>,
}

impl OptimizedStrategy {
    /// Creates the strategy from engine settings.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            pass_factor: config.two_opt_pass_factor,
            parallel: config.parallel,
            regression_guard: config.regression_guard,
            guard_rules: default_rules(),
        }
    }
}

impl Default for OptimizedStrategy {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl Strategy for OptimizedStrategy {
    fn name(&self) -> &'static str {
        "optimized"
    }

    fn plan_source(
        &self,
        problem: &Problem,
        group: &SourceGroup,
        cancel: &CancelToken,
    ) -> Result<Vec<Truck>, OptimizeError> {
        let savings = clarke_wright_savings(problem, group, cancel)?;
        let savings = refine(problem, savings, self.pass_factor, self.parallel, cancel)?;
        if !self.regression_guard {
            return Ok(savings);
        }

        let greedy = greedy_batch(problem, group, &self.guard_rules, cancel)?;
        let greedy = refine(problem, greedy, self.pass_factor, self.parallel, cancel)?;

        let savings_total = plan_distance(problem, &savings);
        let greedy_total = plan_distance(problem, &greedy);
        if !keeps_savings(savings_total, greedy_total) {
            debug!(
                source = problem.location(group.source()).id(),
                savings_total,
                greedy_total,
                "regression guard kept greedy plan"
            );
            Ok(greedy)
        } else {
            Ok(savings)
        }
    }
}

/// The savings plan survives the guard only if it is not longer at all.
fn keeps_savings(savings_total: f64, greedy_total: f64) -> bool {
    savings_total <= greedy_total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::fixtures::{am, planar_matrix, problem, re};
    use crate::grouping::group_by_source;
    use crate::strategy::BasicStrategy;

    fn plan(strategy: &dyn Strategy, p: &Problem) -> Vec<Truck> {
        group_by_source(p)
            .iter()
            .flat_map(|g| strategy.plan_source(p, g, &CancelToken::new()).expect("ok"))
            .collect()
    }

    #[test]
    fn test_two_destinations_one_truck() {
        let dm =
            DistanceMatrix::from_data(3, vec![0.0, 10.0, 10.0, 10.0, 0.0, 5.0, 10.0, 5.0, 0.0])
                .expect("valid");
        let p = problem(1, dm, vec![am("a", 0, 1, 1), am("b", 0, 2, 1)], (10, 6));
        let trucks = plan(&OptimizedStrategy::default(), &p);
        assert_eq!(trucks.len(), 1);
        assert!((plan_distance(&p, &trucks) - 25.0).abs() < 1e-9);
        // Two separate round trips would cost 40.
        assert!(plan_distance(&p, &trucks) < 40.0);
    }

    #[test]
    fn test_never_worse_than_basic() {
        let dm = planar_matrix(&[
            (0.0, 0.0),
            (4.0, 1.0),
            (-3.0, 2.0),
            (1.0, -5.0),
            (6.0, 6.0),
            (-2.0, -2.0),
        ]);
        let p = problem(
            1,
            dm,
            vec![
                am("a", 0, 1, 4),
                re("b", 0, 2, 3),
                am("c", 0, 3, 5),
                am("d", 0, 4, 2),
                re("e", 0, 5, 3),
                am("f", 0, 2, 1),
            ],
            (8, 5),
        );
        let basic = plan(&BasicStrategy::new(), &p);
        let optimized = plan(&OptimizedStrategy::default(), &p);
        assert!(plan_distance(&p, &optimized) <= plan_distance(&p, &basic));
    }

    #[test]
    fn test_guard_prefers_greedy_on_any_excess() {
        assert!(keeps_savings(25.0, 25.0));
        assert!(keeps_savings(24.0, 25.0));
        assert!(!keeps_savings(25.0 + 1e-12, 25.0));
        assert!(!keeps_savings(25.0 + 1e-10, 25.0));
    }

    #[test]
    fn test_guard_disabled_keeps_savings() {
        let dm = planar_matrix(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let p = problem(1, dm, vec![am("a", 0, 1, 1), am("b", 0, 2, 1)], (10, 6));
        let config = EngineConfig::default().with_regression_guard(false);
        let trucks = plan(&OptimizedStrategy::new(&config), &p);
        assert_eq!(trucks.len(), 1);
        assert_eq!(trucks[0].stops(), &[1, 2]);
    }
}

use crate::cancel::CancelToken;
use crate::constructive::{default_rules, greedy_batch, AssignmentRule};
use crate::error::OptimizeError;
use crate::grouping::SourceGroup;
use crate::models::{Problem, Truck};

use super::{sequence, Strategy};

/// Greedy rule-list assignment with nearest-neighbor stop order.
///
/// This is the reference plan the optimized strategy is measured against.
pub struct BasicStrategy {
    rules: Vec<Box<dyn AssignmentRule>>,
}

impl BasicStrategy {
    /// Creates the strategy with [`default_rules`].
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Replaces the rule list.
    pub fn with_rules(mut self, rules: Vec<Box<dyn AssignmentRule>>) -> Self {
        self.rules = rules;
        self
    }
}

impl Default for BasicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for BasicStrategy {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn plan_source(
        &self,
        problem: &Problem,
        group: &SourceGroup,
        cancel: &CancelToken,
    ) -> Result<Vec<Truck>, OptimizeError> {
        let mut trucks = greedy_batch(problem, group, &self.rules, cancel)?;
        sequence(problem, &mut trucks);
        Ok(trucks)
    }
}

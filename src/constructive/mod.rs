//! Constructive heuristics that assign a source's containers to trucks.
//!
//! - [`greedy_batch`] — Priority-ordered rule list, O(c·t·s)
//! - [`clarke_wright_savings`] — Clarke-Wright savings algorithm (1964), O(n² log n)
//!
//! Both work on one [`SourceGroup`](crate::grouping::SourceGroup) at a time
//! and leave stop order to the sequencer.

mod clarke_wright;
mod greedy;
mod rules;

pub use clarke_wright::clarke_wright_savings;
pub use greedy::greedy_batch;
pub use rules::{
    default_rules, AssignmentRule, NearestStop, OpenTruck, Placement, RuleContext,
    SharedDestination,
};
